//! Monochrome framebuffer in SH1106 page layout.
//!
//! The display RAM is organized as 8 pages of 128 columns; each byte is a vertical
//! strip of 8 pixels with the LSB at the top. Keeping the framebuffer in the same
//! layout lets the driver stream a page straight out of [`Framebuffer::page`].
//!
//! Drawing goes through `embedded-graphics` (`DrawTarget`) and never touches the bus;
//! the firmware clears, draws, then flushes the whole buffer once per frame.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::config::{SCREEN_HEIGHT, SCREEN_PAGES, SCREEN_WIDTH};

const WIDTH: usize = SCREEN_WIDTH as usize;
const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// Framebuffer size in bytes (1 bit per pixel).
pub const BUFFER_SIZE: usize = WIDTH * SCREEN_PAGES;

/// Off-screen buffer for one full display frame.
pub struct Framebuffer {
    buffer: [u8; BUFFER_SIZE],
}

impl Framebuffer {
    /// Create a blank framebuffer.
    pub const fn new() -> Self { Self { buffer: [0; BUFFER_SIZE] } }

    /// Turn every pixel off.
    pub fn clear_buffer(&mut self) { self.buffer.fill(0); }

    /// Set a pixel. Coordinates outside the display are ignored.
    #[inline]
    pub fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        on: bool,
    ) {
        if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
            return;
        }
        let idx = (y as usize / 8) * WIDTH + x as usize;
        let mask = 1u8 << (y as usize % 8);
        if on {
            self.buffer[idx] |= mask;
        } else {
            self.buffer[idx] &= !mask;
        }
    }

    /// Read a pixel. Coordinates outside the display read as off.
    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> bool {
        if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
            return false;
        }
        let idx = (y as usize / 8) * WIDTH + x as usize;
        self.buffer[idx] & (1 << (y as usize % 8)) != 0
    }

    /// The 128 column bytes of one page, ready to send to the display.
    #[inline]
    pub fn page(
        &self,
        page: usize,
    ) -> &[u8] {
        &self.buffer[page * WIDTH..(page + 1) * WIDTH]
    }

    /// Number of pixels turned on.
    pub fn lit_pixels(&self) -> u32 { self.buffer.iter().map(|b| b.count_ones()).sum() }
}

impl Default for Framebuffer {
    fn default() -> Self { Self::new() }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.buffer.fill(if color.is_on() { 0xFF } else { 0x00 });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_blank() {
        let fb = Framebuffer::new();
        assert_eq!(fb.lit_pixels(), 0);
        assert_eq!(fb.size(), Size::new(128, 64));
    }

    #[test]
    fn test_page_layout() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(3, 0, true);
        fb.set_pixel(3, 9, true);
        fb.set_pixel(127, 63, true);

        assert_eq!(fb.page(0)[3], 0b0000_0001);
        assert_eq!(fb.page(1)[3], 0b0000_0010);
        assert_eq!(fb.page(7)[127], 0b1000_0000);
        assert!(fb.pixel(3, 9));
        assert!(!fb.pixel(4, 9));
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(-1, 0, true);
        fb.set_pixel(128, 0, true);
        fb.set_pixel(0, 64, true);
        assert_eq!(fb.lit_pixels(), 0);
        assert!(!fb.pixel(200, 200));
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new();
        fb.clear(BinaryColor::On).ok();
        assert_eq!(fb.lit_pixels(), 128 * 64);

        fb.clear_buffer();
        assert_eq!(fb.lit_pixels(), 0);
    }

    #[test]
    fn test_draw_pixel_off_clears_bit() {
        let mut fb = Framebuffer::new();
        fb.clear(BinaryColor::On).ok();
        Pixel(Point::new(10, 10), BinaryColor::Off).draw(&mut fb).ok();
        assert!(!fb.pixel(10, 10));
        assert_eq!(fb.lit_pixels(), 128 * 64 - 1);
    }
}
