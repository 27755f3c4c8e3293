//! Board wiring for the Raspberry Pi Pico 2.
//!
//! | Function | GPIO | Notes |
//! |----------|------|-------|
//! | DHT11 data | 22 | Single-wire, internal pull-up |
//! | Microphone | 27 | ADC1, amplifier output centred around mid-scale |
//! | Light sensor | 26 | ADC0, higher reading is brighter |
//! | Button "previous" | 14 | Active low, internal pull-up |
//! | Button "next" | 15 | Active low, internal pull-up |
//! | OLED SDA | 4 | I2C0 |
//! | OLED SCL | 5 | I2C0 |
//!
//! Pins are taken by name in `main`; this module holds the peripheral settings.

use embassy_rp::i2c;

/// SH1106 I2C address.
pub const OLED_ADDRESS: u8 = crate::sh1106::DEFAULT_ADDRESS;

/// I2C clock for the OLED (fast mode).
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

pub fn i2c_config() -> i2c::Config {
    let mut config = i2c::Config::default();
    config.frequency = I2C_FREQUENCY_HZ;
    config
}
