//! Compile-time configuration for the monitor.
//!
//! Cadences are the sleep durations between task cycles. Screen responsiveness and the
//! averaging windows depend on their relative values, so change them together.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SH1106 128x64 OLED).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

/// Number of 8-pixel pages the display RAM is split into.
pub const SCREEN_PAGES: usize = (SCREEN_HEIGHT / 8) as usize;

/// Number of selectable screens.
pub const SCREEN_COUNT: u8 = 3;

// =============================================================================
// Task Cadences (milliseconds)
// =============================================================================

/// Temperature/humidity read interval.
pub const CLIMATE_PERIOD_MS: u64 = 2000;

/// Length of one sound sampling window.
pub const SOUND_WINDOW_MS: u64 = 100;

/// Pause after each sound sampling window.
pub const SOUND_PAUSE_MS: u64 = 100;

/// Light read interval.
pub const LIGHT_PERIOD_MS: u64 = 150;

/// Button poll interval.
pub const BUTTON_PERIOD_MS: u64 = 50;

/// Display refresh interval.
pub const RENDER_PERIOD_MS: u64 = 200;

/// Minimum time between two accepted button presses.
pub const DEBOUNCE_MS: u64 = 200;

const _: () = assert!(BUTTON_PERIOD_MS < DEBOUNCE_MS);

// =============================================================================
// ADC Configuration
// =============================================================================

/// Full-scale 12-bit ADC reading.
pub const ADC_MAX: u16 = 4095;

/// Readings at this value are clipped and excluded from sound min/max tracking.
pub const ADC_SATURATION: u16 = ADC_MAX;

// =============================================================================
// Derived Metric Configuration
// =============================================================================

/// Slots in the sound and light history rings.
pub const HISTORY_SIZE: usize = 32;

/// The rolling average is published once more than this many samples are summed.
pub const AVG_WINDOW: u32 = 10;

/// Peak-to-peak amplitude mapped to the top of the decibel range.
pub const SOUND_P2P_FULL_SCALE: i32 = 2000;

/// Quietest reported decibel estimate.
pub const SOUND_DB_MIN: i32 = 30;

/// Loudest reported decibel estimate.
pub const SOUND_DB_MAX: i32 = 90;

/// Peak-to-peak amplitude mapped to the top of the sound history scale.
pub const SOUND_HISTORY_P2P_SCALE: i32 = 1000;

/// Top of the sound history scale.
pub const SOUND_HISTORY_MAX: i32 = 20;

/// Top of the light history scale.
pub const LIGHT_HISTORY_MAX: i32 = 25;
