//! DHT11 frame assembly and decoding.
//!
//! The sensor answers a start pulse with 40 data bits. Every bit starts with a ~50us
//! low phase followed by a high phase whose length encodes the value: ~26-28us for
//! `0`, ~70us for `1`. The bus driver measures the high phases and feeds them to
//! [`FrameBuilder`]; everything from there on is timing independent.
//!
//! # Frame Layout
//!
//! | Byte | Content |
//! |------|---------|
//! | 0 | Humidity, integer part |
//! | 1 | Humidity, tenths |
//! | 2 | Temperature, integer part |
//! | 3 | Temperature, tenths (bit 7 set = below zero) |
//! | 4 | Checksum: low byte of the sum of bytes 0-3 |

/// Number of data bits in a frame.
pub const FRAME_BITS: usize = 40;

/// High phases longer than this (microseconds) are `1` bits.
pub const ONE_BIT_THRESHOLD_US: u32 = 40;

/// Decoded sensor reading.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Reading {
    /// Air temperature in degC.
    pub temperature: f32,
    /// Relative humidity in %.
    pub humidity: f32,
}

/// Frame decoding failure.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FrameError {
    /// Fewer than [`FRAME_BITS`] bits were received.
    Incomplete { bits: usize },
    /// Byte 4 does not match the sum of bytes 0-3.
    Checksum { expected: u8, actual: u8 },
}

/// Collects measured high-phase widths into a 5-byte frame, MSB first.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameBuilder {
    bytes: [u8; 5],
    bits: usize,
}

impl FrameBuilder {
    pub const fn new() -> Self {
        Self {
            bytes: [0; 5],
            bits: 0,
        }
    }

    /// Record one bit from the width of its high phase. Extra bits are ignored.
    pub fn push_high_pulse(
        &mut self,
        high_us: u32,
    ) {
        if self.bits >= FRAME_BITS {
            return;
        }
        if high_us > ONE_BIT_THRESHOLD_US {
            self.bytes[self.bits / 8] |= 1 << (7 - self.bits % 8);
        }
        self.bits += 1;
    }

    /// Bits received so far.
    #[inline]
    pub const fn len(&self) -> usize { self.bits }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.bits == 0 }

    /// Decode the collected frame.
    pub fn finish(&self) -> Result<Reading, FrameError> {
        if self.bits < FRAME_BITS {
            return Err(FrameError::Incomplete { bits: self.bits });
        }
        decode_frame(&self.bytes)
    }
}

/// Verify the checksum and convert a raw frame into a [`Reading`].
pub fn decode_frame(frame: &[u8; 5]) -> Result<Reading, FrameError> {
    let expected = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if expected != frame[4] {
        return Err(FrameError::Checksum {
            expected,
            actual: frame[4],
        });
    }

    let humidity = f32::from(frame[0]) + f32::from(frame[1]) / 10.0;

    let magnitude = f32::from(frame[2]) + f32::from(frame[3] & 0x7F) / 10.0;
    let temperature = if frame[3] & 0x80 != 0 { -magnitude } else { magnitude };

    Ok(Reading { temperature, humidity })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with_checksum(data: [u8; 4]) -> [u8; 5] {
        let sum = data.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
        [data[0], data[1], data[2], data[3], sum]
    }

    #[test]
    fn test_decode_integer_frame() {
        let reading = decode_frame(&frame_with_checksum([45, 0, 23, 0])).unwrap();
        assert_eq!(reading.humidity, 45.0);
        assert_eq!(reading.temperature, 23.0);
    }

    #[test]
    fn test_decode_decimal_parts() {
        let reading = decode_frame(&frame_with_checksum([52, 3, 21, 7])).unwrap();
        assert!((reading.humidity - 52.3).abs() < 0.001);
        assert!((reading.temperature - 21.7).abs() < 0.001);
    }

    #[test]
    fn test_decode_negative_temperature() {
        let reading = decode_frame(&frame_with_checksum([30, 0, 2, 0x85])).unwrap();
        assert!((reading.temperature + 2.5).abs() < 0.001);
    }

    #[test]
    fn test_checksum_wraps() {
        // 200 + 0 + 100 + 0 = 300 -> 44
        let frame = [200, 0, 100, 0, 44];
        assert!(decode_frame(&frame).is_ok());
    }

    #[test]
    fn test_bad_checksum() {
        let frame = [45, 0, 23, 0, 69];
        assert_eq!(
            decode_frame(&frame),
            Err(FrameError::Checksum {
                expected: 68,
                actual: 69
            })
        );
    }

    #[test]
    fn test_builder_assembles_msb_first() {
        let frame = frame_with_checksum([45, 0, 23, 0]);
        let mut builder = FrameBuilder::new();
        for byte in frame {
            for bit in (0..8).rev() {
                let width = if byte & (1 << bit) != 0 { 70 } else { 27 };
                builder.push_high_pulse(width);
            }
        }
        assert_eq!(builder.len(), FRAME_BITS);

        let reading = builder.finish().unwrap();
        assert_eq!(reading.humidity, 45.0);
        assert_eq!(reading.temperature, 23.0);
    }

    #[test]
    fn test_builder_incomplete_frame() {
        let mut builder = FrameBuilder::new();
        assert!(builder.is_empty());
        for _ in 0..12 {
            builder.push_high_pulse(27);
        }
        assert_eq!(builder.finish(), Err(FrameError::Incomplete { bits: 12 }));
    }

    #[test]
    fn test_builder_ignores_extra_bits() {
        let mut builder = FrameBuilder::new();
        for _ in 0..FRAME_BITS + 5 {
            builder.push_high_pulse(27);
        }
        assert_eq!(builder.len(), FRAME_BITS);
        // All-zero frame has a valid (zero) checksum
        let reading = builder.finish().unwrap();
        assert_eq!(reading.temperature, 0.0);
    }
}
