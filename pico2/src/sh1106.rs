//! SH1106 128x64 OLED driver over async I2C.
//!
//! The controller has 132 columns of RAM with the 128 visible ones starting at
//! column 2, which is the main difference from the SSD1306. It only supports page
//! addressing, so a flush is eight "set page / set column / write 128 bytes"
//! sequences taken straight from [`Framebuffer::page`].
//!
//! # I2C Framing
//!
//! Every transfer starts with a control byte: `0x00` for a command stream, `0x40`
//! for display data.

use embedded_hal_async::i2c::I2c;
use sensor_monitor_common::Framebuffer;
use sensor_monitor_common::config::{SCREEN_PAGES, SCREEN_WIDTH};

/// Default 7-bit address (SA0 low).
pub const DEFAULT_ADDRESS: u8 = 0x3C;

const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// First visible RAM column.
const COLUMN_OFFSET: u8 = 2;

const CMD_DISPLAY_OFF: u8 = 0xAE;
const CMD_DISPLAY_ON: u8 = 0xAF;
const CMD_PAGE_ADDRESS: u8 = 0xB0;
const CMD_COLUMN_LOW: u8 = 0x00;
const CMD_COLUMN_HIGH: u8 = 0x10;

/// Power-up sequence for a 128x64 panel with the internal DC-DC enabled.
#[rustfmt::skip]
const INIT_SEQUENCE: [u8; 24] = [
    CMD_DISPLAY_OFF,
    0xD5, 0x80, // clock divide ratio / oscillator frequency
    0xA8, 0x3F, // multiplex ratio: 64
    0xD3, 0x00, // display offset: 0
    0x40,       // start line: 0
    0xAD, 0x8B, // DC-DC on
    0xA1,       // segment remap (column 127 is SEG0)
    0xC8,       // COM scan direction: remapped
    0xDA, 0x12, // COM pins: alternative
    0x81, 0xCF, // contrast
    0xD9, 0x22, // pre-charge period
    0xDB, 0x40, // VCOMH deselect level
    0xA4,       // resume to RAM content
    0xA6,       // normal (not inverted)
    0x32,       // pump voltage 8.0 V
    CMD_DISPLAY_ON,
];

#[derive(Debug)]
pub enum Sh1106Error<E> {
    /// The I2C transfer failed (usually no ACK from the panel).
    Bus(E),
}

pub struct Sh1106<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> Sh1106<I> {
    pub const fn new(
        i2c: I,
        address: u8,
    ) -> Self {
        Self { i2c, address }
    }

    /// Send the power-up sequence and turn the panel on.
    pub async fn init(&mut self) -> Result<(), Sh1106Error<I::Error>> { self.commands(&INIT_SEQUENCE).await }

    /// Send the whole framebuffer, one page at a time.
    pub async fn flush(
        &mut self,
        framebuffer: &Framebuffer,
    ) -> Result<(), Sh1106Error<I::Error>> {
        let mut data = [0u8; SCREEN_WIDTH as usize + 1];
        data[0] = CONTROL_DATA;

        for page in 0..SCREEN_PAGES {
            self.commands(&[
                CMD_PAGE_ADDRESS | page as u8,
                CMD_COLUMN_LOW | (COLUMN_OFFSET & 0x0F),
                CMD_COLUMN_HIGH | (COLUMN_OFFSET >> 4),
            ])
            .await?;

            data[1..].copy_from_slice(framebuffer.page(page));
            self.i2c.write(self.address, &data).await.map_err(Sh1106Error::Bus)?;
        }

        Ok(())
    }

    async fn commands(
        &mut self,
        commands: &[u8],
    ) -> Result<(), Sh1106Error<I::Error>> {
        let mut buf = [0u8; INIT_SEQUENCE.len() + 1];
        buf[0] = CONTROL_COMMAND;
        buf[1..=commands.len()].copy_from_slice(commands);

        self.i2c
            .write(self.address, &buf[..=commands.len()])
            .await
            .map_err(Sh1106Error::Bus)
    }
}
