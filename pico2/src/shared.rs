//! State shared between tasks.
//!
//! Each state block has exactly one writer, which owns the working copy and publishes
//! a full snapshot after every cycle. The renderer is the only receiver and takes the
//! latest snapshot without waiting, so it never sees a half-updated block.

use embassy_rp::adc::{Adc, Async};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::watch::Watch;
use sensor_monitor_common::{ClimateState, LightState, Screen, SoundState};

/// Latest climate reading, written by the climate task.
pub static CLIMATE: Watch<CriticalSectionRawMutex, ClimateState, 1> = Watch::new();

/// Latest sound window, written by the sound task.
pub static SOUND: Watch<CriticalSectionRawMutex, SoundState, 1> = Watch::new();

/// Latest light reading, written by the light task.
pub static LIGHT: Watch<CriticalSectionRawMutex, LightState, 1> = Watch::new();

/// Selected screen, written by the button task.
pub static SCREEN: Watch<CriticalSectionRawMutex, Screen, 1> = Watch::new();

/// The ADC, shared by the sound and light tasks one conversion at a time.
pub type SharedAdc = Mutex<CriticalSectionRawMutex, Adc<'static, Async>>;
