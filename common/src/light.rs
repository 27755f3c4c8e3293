//! Ambient light state.
//!
//! The light sensor is read once per cycle and compared with a baseline captured at
//! startup. Deviations beyond [`LIGHT_CHANGE_THRESHOLD`] are reported as brighter or
//! darker together with the signed delta.

use core::fmt;

use crate::config::{ADC_MAX, LIGHT_HISTORY_MAX};
use crate::history::{History, RollingAverage};
use crate::scale::map_range;
use crate::thresholds::{
    LIGHT_BRIGHT_BELOW,
    LIGHT_CHANGE_THRESHOLD,
    LIGHT_DARK_BELOW,
    LIGHT_DIM_BELOW,
};

// =============================================================================
// Classification
// =============================================================================

/// Brightness band of a raw light reading.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LightLevel {
    Dark,
    Dim,
    Bright,
    VeryBright,
}

impl LightLevel {
    pub const fn from_raw(raw: u16) -> Self {
        if raw < LIGHT_DARK_BELOW {
            Self::Dark
        } else if raw < LIGHT_DIM_BELOW {
            Self::Dim
        } else if raw < LIGHT_BRIGHT_BELOW {
            Self::Bright
        } else {
            Self::VeryBright
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Dim => "Dim",
            Self::Bright => "Bright",
            Self::VeryBright => "V.Bright",
        }
    }
}

/// Raw reading as a percentage of full scale (truncating).
pub const fn light_percentage(raw: u16) -> u8 { map_range(raw as i32, 0, ADC_MAX as i32, 0, 100) as u8 }

/// History slot value for a raw reading, `[0, 4095]` onto `[0, 25]`.
pub const fn history_value(raw: u16) -> u16 { map_range(raw as i32, 0, ADC_MAX as i32, 0, LIGHT_HISTORY_MAX) as u16 }

/// Change relative to the startup baseline.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ChangeStatus {
    /// No sample taken yet.
    #[default]
    Initializing,
    /// Within the threshold of the baseline.
    NoChange,
    /// Brighter than the baseline by the contained (positive) delta.
    Brighter(i32),
    /// Darker than the baseline by the contained (negative) delta.
    Darker(i32),
}

impl ChangeStatus {
    /// Compare a reading with the baseline.
    pub const fn classify(
        value: u16,
        baseline: u16,
    ) -> Self {
        let delta = value as i32 - baseline as i32;
        if delta.abs() > LIGHT_CHANGE_THRESHOLD {
            if delta > 0 { Self::Brighter(delta) } else { Self::Darker(delta) }
        } else {
            Self::NoChange
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Initializing => f.write_str("Initializing..."),
            Self::NoChange => f.write_str("No change"),
            Self::Brighter(delta) => write!(f, "Brighter: +{delta}"),
            Self::Darker(delta) => write!(f, "Darker: {delta}"),
        }
    }
}

// =============================================================================
// Light State
// =============================================================================

/// Everything the light sampler publishes after a reading.
#[derive(Clone, Copy, Debug)]
pub struct LightState {
    value: u16,
    baseline: u16,
    min_value: u16,
    max_value: u16,
    average: RollingAverage,
    change: ChangeStatus,
    history: History,
}

impl LightState {
    /// Create the state around a baseline captured at startup.
    ///
    /// Min starts at full scale and max at zero, so the first reading sets both.
    pub const fn new(baseline: u16) -> Self {
        Self {
            value: 0,
            baseline,
            min_value: ADC_MAX,
            max_value: 0,
            average: RollingAverage::new(),
            change: ChangeStatus::Initializing,
            history: History::new(),
        }
    }

    /// Fold a raw reading into the state.
    pub fn record(
        &mut self,
        raw: u16,
    ) {
        self.value = raw;
        self.change = ChangeStatus::classify(raw, self.baseline);

        if raw < self.min_value {
            self.min_value = raw;
        }
        if raw > self.max_value {
            self.max_value = raw;
        }

        self.average.push(u32::from(raw));
        self.history.push(history_value(raw));
    }

    /// Last raw reading.
    #[inline]
    pub const fn value(&self) -> u16 { self.value }

    #[inline]
    pub const fn baseline(&self) -> u16 { self.baseline }

    #[inline]
    pub const fn min_value(&self) -> u16 { self.min_value }

    #[inline]
    pub const fn max_value(&self) -> u16 { self.max_value }

    /// Last published rolling average of the raw value.
    #[inline]
    pub const fn avg_value(&self) -> u32 { self.average.average() }

    #[inline]
    pub const fn change(&self) -> ChangeStatus { self.change }

    #[inline]
    pub const fn percentage(&self) -> u8 { light_percentage(self.value) }

    #[inline]
    pub const fn descriptor(&self) -> LightLevel { LightLevel::from_raw(self.value) }

    #[inline]
    pub const fn history(&self) -> &History { &self.history }
}

impl Default for LightState {
    fn default() -> Self { Self::new(0) }
}

// =============================================================================
// Unit Tests
// =============================================================================
