//! Async tasks for the sensor monitor firmware.
//!
//! Core 1 (sampling):
//! - `climate`: DHT11 temperature/humidity every 2 s
//! - `sound`: Microphone peak-to-peak over 100 ms windows
//! - `light`: Light sensor against the startup baseline every 150 ms
//!
//! Core 0 (user interface):
//! - `buttons`: Screen navigation, on the high priority executor
//! - `display`: Renders the selected screen every 200 ms

pub mod buttons;
pub mod climate;
pub mod display;
pub mod light;
pub mod sound;

pub use buttons::button_task;
pub use climate::climate_task;
pub use display::display_task;
pub use light::light_task;
pub use sound::sound_task;
