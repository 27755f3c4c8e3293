//! Shared logic for the multi-sensor monitor.
//!
//! This crate contains the platform-agnostic parts of the firmware so they can be
//! tested on the host. The `pico2` binary wires them to the RP2350 peripherals.
//!
//! - [`config`]: Display geometry, task cadences, ADC and window constants
//! - [`thresholds`]: Classification boundaries and validity ranges
//! - [`scale`]: Integer range mapping and clamping
//! - [`history`]: Fixed-size sample ring and batch rolling average
//! - [`climate`]: Temperature/humidity state with stale-on-failure validation
//! - [`dht11`]: DHT11 frame assembly and decoding
//! - [`sound`]: Peak-to-peak sampling window and sound state
//! - [`light`]: Baseline change detection and light state
//! - [`pages`]: Screen selection enum
//! - [`button`] / [`input`]: Debounce gate and screen navigation
//! - [`framebuffer`]: Page-organized monochrome framebuffer (`DrawTarget`)
//! - [`styles`]: Text styles for the two display fonts
//! - [`screens`]: Drawing of the three screens
//!
//! # Testing
//!
//! ```bash
//! cargo test -p sensor-monitor-common
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while the firmware uses the crate
//! as `no_std`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod button;
pub mod climate;
pub mod config;
pub mod dht11;
pub mod framebuffer;
pub mod history;
pub mod input;
pub mod light;
pub mod pages;
pub mod scale;
pub mod screens;
pub mod sound;
pub mod styles;
pub mod thresholds;

// Re-export commonly used items
pub use climate::ClimateState;
pub use framebuffer::Framebuffer;
pub use light::LightState;
pub use pages::Screen;
pub use sound::SoundState;
