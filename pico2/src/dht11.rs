//! Bit-banged DHT11 single-wire driver.
//!
//! The host pulls the line low for at least 18 ms, releases it, and the sensor answers
//! with an 80us low / 80us high preamble followed by 40 data bits. The data phase is
//! timed with interrupts disabled (about 4 ms) since a 20us jitter is enough to flip
//! a bit. Bit decoding and the checksum live in [`sensor_monitor_common::dht11`].

use embassy_rp::gpio::{Flex, Pull};
use embassy_time::{Duration, Instant, Timer, block_for};
use sensor_monitor_common::dht11::{FRAME_BITS, FrameBuilder, FrameError, Reading};

/// Start signal low phase (datasheet minimum is 18 ms).
const START_LOW_MS: u64 = 20;
/// Start signal high phase before handing the line to the sensor.
const START_HIGH_US: u64 = 30;

/// Longest a single preamble phase may last.
const PREAMBLE_TIMEOUT_US: u64 = 100;
/// Longest the low phase before a data bit may last.
const BIT_LOW_TIMEOUT_US: u64 = 70;
/// Longest a data bit high phase may last.
const BIT_HIGH_TIMEOUT_US: u64 = 100;

#[derive(Clone, Copy, Debug)]
pub enum Dht11Error {
    /// The sensor did not answer, or a phase lasted too long.
    Timeout,
    /// A frame was received but could not be decoded.
    Frame(FrameError),
}

impl defmt::Format for Dht11Error {
    fn format(
        &self,
        f: defmt::Formatter,
    ) {
        match self {
            Self::Timeout => defmt::write!(f, "timeout"),
            Self::Frame(FrameError::Incomplete { bits }) => defmt::write!(f, "incomplete frame ({} bits)", bits),
            Self::Frame(FrameError::Checksum { expected, actual }) => {
                defmt::write!(f, "checksum mismatch (expected {=u8:#x}, got {=u8:#x})", expected, actual);
            }
        }
    }
}

pub struct Dht11<'d> {
    pin: Flex<'d>,
}

impl<'d> Dht11<'d> {
    /// Take the data pin and leave it released (input with pull-up).
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::Up);
        pin.set_as_input();
        Self { pin }
    }

    /// Perform one measurement.
    ///
    /// The start signal awaits the timer; the response is sampled in a critical section.
    pub async fn read(&mut self) -> Result<Reading, Dht11Error> {
        self.pin.set_low();
        self.pin.set_as_output();
        Timer::after_millis(START_LOW_MS).await;

        self.pin.set_high();
        block_for(Duration::from_micros(START_HIGH_US));
        self.pin.set_as_input();

        let frame = cortex_m::interrupt::free(|_| self.receive_frame())?;
        frame.finish().map_err(Dht11Error::Frame)
    }

    fn receive_frame(&self) -> Result<FrameBuilder, Dht11Error> {
        // Sensor takes the line, then the 80us low / 80us high preamble
        self.wait_while(true, PREAMBLE_TIMEOUT_US)?;
        self.wait_while(false, PREAMBLE_TIMEOUT_US)?;
        self.wait_while(true, PREAMBLE_TIMEOUT_US)?;

        let mut frame = FrameBuilder::new();
        for _ in 0..FRAME_BITS {
            self.wait_while(false, BIT_LOW_TIMEOUT_US)?;
            let high_us = self.wait_while(true, BIT_HIGH_TIMEOUT_US)?;
            frame.push_high_pulse(high_us);
        }

        Ok(frame)
    }

    /// Busy-wait while the line reads `high`, returning how long that took.
    fn wait_while(
        &self,
        high: bool,
        timeout_us: u64,
    ) -> Result<u32, Dht11Error> {
        let start = Instant::now();
        while self.pin.is_high() == high {
            if start.elapsed().as_micros() > timeout_us {
                return Err(Dht11Error::Timeout);
            }
        }
        Ok(start.elapsed().as_micros() as u32)
    }
}
