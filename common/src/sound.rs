//! Sound level sampling and state.
//!
//! A microphone on an ADC channel is sampled as fast as possible for one window.
//! The spread between the loudest and quietest sample (peak-to-peak) is the
//! amplitude proxy; it is mapped onto a rough 30-90 dB scale for display.
//!
//! Samples at the ADC ceiling are clipped and would inflate the spread, so
//! [`SoundWindow`] leaves them out of min/max tracking.

use crate::config::{
    ADC_SATURATION,
    SOUND_DB_MAX,
    SOUND_DB_MIN,
    SOUND_HISTORY_MAX,
    SOUND_HISTORY_P2P_SCALE,
    SOUND_P2P_FULL_SCALE,
};
use crate::history::{History, RollingAverage};
use crate::scale::{constrain, map_range};
use crate::thresholds::{SOUND_LOUD_BELOW, SOUND_NORMAL_BELOW, SOUND_QUIET_BELOW};

// =============================================================================
// Classification
// =============================================================================

/// Loudness band of a decibel estimate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SoundLevel {
    Quiet,
    Normal,
    Loud,
    VeryLoud,
}

impl SoundLevel {
    pub const fn from_decibels(db: u8) -> Self {
        if db < SOUND_QUIET_BELOW {
            Self::Quiet
        } else if db < SOUND_NORMAL_BELOW {
            Self::Normal
        } else if db < SOUND_LOUD_BELOW {
            Self::Loud
        } else {
            Self::VeryLoud
        }
    }

    /// Short label that fits the status row.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quiet => "Quiet",
            Self::Normal => "Normal",
            Self::Loud => "Loud",
            Self::VeryLoud => "V.Loud",
        }
    }
}

/// Decibel estimate for a peak-to-peak amplitude, clamped to `[30, 90]`.
pub const fn decibels(peak_to_peak: u16) -> u8 {
    let db = map_range(peak_to_peak as i32, 0, SOUND_P2P_FULL_SCALE, SOUND_DB_MIN, SOUND_DB_MAX);
    constrain(db, SOUND_DB_MIN, SOUND_DB_MAX) as u8
}

/// History slot value for a peak-to-peak amplitude, clamped to `[0, 20]`.
pub const fn history_value(peak_to_peak: u16) -> u16 {
    let scaled = map_range(peak_to_peak as i32, 0, SOUND_HISTORY_P2P_SCALE, 0, SOUND_HISTORY_MAX);
    constrain(scaled, 0, SOUND_HISTORY_MAX) as u16
}

// =============================================================================
// Sampling Window
// =============================================================================

/// Min/max tracker for one sampling window.
#[derive(Clone, Copy, Debug)]
pub struct SoundWindow {
    max: u16,
    min: u16,
    accepted: u32,
    clipped: u32,
}

impl SoundWindow {
    pub const fn new() -> Self {
        Self {
            max: 0,
            min: ADC_SATURATION,
            accepted: 0,
            clipped: 0,
        }
    }

    /// Feed one raw ADC sample.
    pub fn record(
        &mut self,
        sample: u16,
    ) {
        if sample >= ADC_SATURATION {
            self.clipped += 1;
            return;
        }
        self.accepted += 1;
        if sample > self.max {
            self.max = sample;
        }
        if sample < self.min {
            self.min = sample;
        }
    }

    /// Spread between the largest and smallest unclipped sample.
    ///
    /// A window without unclipped samples has no spread and reports 0.
    pub const fn peak_to_peak(&self) -> u16 {
        if self.accepted == 0 { 0 } else { self.max - self.min }
    }

    /// Unclipped samples seen in this window.
    #[inline]
    pub const fn accepted(&self) -> u32 { self.accepted }

    /// Samples rejected at the ADC ceiling.
    #[inline]
    pub const fn clipped(&self) -> u32 { self.clipped }
}

impl Default for SoundWindow {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Sound State
// =============================================================================

/// Everything the sound sampler publishes after a window.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoundState {
    level: u16,
    max_level: u16,
    decibels: u8,
    average: RollingAverage,
    history: History,
}

impl SoundState {
    pub const fn new() -> Self {
        Self {
            level: 0,
            max_level: 0,
            decibels: 0,
            average: RollingAverage::new(),
            history: History::new(),
        }
    }

    /// Fold a finished window's peak-to-peak amplitude into the state.
    pub fn record(
        &mut self,
        peak_to_peak: u16,
    ) {
        self.level = peak_to_peak;
        self.decibels = decibels(peak_to_peak);

        if peak_to_peak > self.max_level {
            self.max_level = peak_to_peak;
        }

        self.average.push(u32::from(peak_to_peak));
        self.history.push(history_value(peak_to_peak));
    }

    /// Peak-to-peak amplitude of the last window.
    #[inline]
    pub const fn level(&self) -> u16 { self.level }

    /// Largest peak-to-peak amplitude since boot.
    #[inline]
    pub const fn max_level(&self) -> u16 { self.max_level }

    /// Last published rolling average of the level.
    #[inline]
    pub const fn avg_level(&self) -> u32 { self.average.average() }

    /// Decibel estimate of the last window (0 before the first window).
    #[inline]
    pub const fn decibels(&self) -> u8 { self.decibels }

    #[inline]
    pub const fn descriptor(&self) -> SoundLevel { SoundLevel::from_decibels(self.decibels) }

    #[inline]
    pub const fn history(&self) -> &History { &self.history }
}

// =============================================================================
// Unit Tests
// =============================================================================
