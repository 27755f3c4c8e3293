//! Temperature and humidity state.
//!
//! The sampler feeds every raw reading through [`ClimateState::apply`]. Each quantity is
//! validated on its own; a rejected value leaves the previous one in place, so a
//! failing sensor shows up as a stale reading rather than an error.

use crate::thresholds::{
    TEMP_COLD_BELOW,
    TEMP_COOL_BELOW,
    TEMP_WARM_MAX,
    is_valid_humidity,
    is_valid_temperature,
};

/// Comfort band for an air temperature.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TemperatureCondition {
    /// Below 15 degC.
    Cold,
    /// 15 degC up to (not including) 25 degC.
    Cool,
    /// 25 degC up to and including 30 degC.
    Warm,
    /// Above 30 degC.
    Hot,
}

impl TemperatureCondition {
    /// Classify a temperature in degC.
    pub fn from_celsius(celsius: f32) -> Self {
        if celsius < TEMP_COLD_BELOW {
            Self::Cold
        } else if celsius < TEMP_COOL_BELOW {
            Self::Cool
        } else if celsius <= TEMP_WARM_MAX {
            Self::Warm
        } else {
            Self::Hot
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cold => "Cold",
            Self::Cool => "Cool",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
        }
    }
}

/// Which halves of a reading were accepted by [`ClimateState::apply`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Accepted {
    pub temperature: bool,
    pub humidity: bool,
}

/// Last accepted temperature and humidity.
///
/// `None` means no valid value has been read since boot.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ClimateState {
    temperature: Option<f32>,
    humidity: Option<f32>,
}

impl ClimateState {
    pub const fn new() -> Self {
        Self {
            temperature: None,
            humidity: None,
        }
    }

    /// Validate and store a raw reading. NaN marks a failed sensor read.
    pub fn apply(
        &mut self,
        temperature: f32,
        humidity: f32,
    ) -> Accepted {
        let mut accepted = Accepted::default();

        if is_valid_temperature(temperature) {
            self.temperature = Some(temperature);
            accepted.temperature = true;
        }
        if is_valid_humidity(humidity) {
            self.humidity = Some(humidity);
            accepted.humidity = true;
        }

        accepted
    }

    #[inline]
    pub const fn temperature(&self) -> Option<f32> { self.temperature }

    #[inline]
    pub const fn humidity(&self) -> Option<f32> { self.humidity }

    /// Condition of the last accepted temperature.
    pub fn condition(&self) -> Option<TemperatureCondition> { self.temperature.map(TemperatureCondition::from_celsius) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_bands() {
        assert_eq!(TemperatureCondition::from_celsius(0.0), TemperatureCondition::Cold);
        assert_eq!(TemperatureCondition::from_celsius(14.9), TemperatureCondition::Cold);
        assert_eq!(TemperatureCondition::from_celsius(15.0), TemperatureCondition::Cool);
        assert_eq!(TemperatureCondition::from_celsius(24.9), TemperatureCondition::Cool);
        assert_eq!(TemperatureCondition::from_celsius(25.0), TemperatureCondition::Warm);
        assert_eq!(TemperatureCondition::from_celsius(30.0), TemperatureCondition::Warm);
        assert_eq!(TemperatureCondition::from_celsius(30.1), TemperatureCondition::Hot);
        assert_eq!(TemperatureCondition::from_celsius(50.0), TemperatureCondition::Hot);
    }

    #[test]
    fn test_condition_labels() {
        assert_eq!(TemperatureCondition::Cold.label(), "Cold");
        assert_eq!(TemperatureCondition::Cool.label(), "Cool");
        assert_eq!(TemperatureCondition::Warm.label(), "Warm");
        assert_eq!(TemperatureCondition::Hot.label(), "Hot");
    }

    #[test]
    fn test_new_state_has_no_reading() {
        let state = ClimateState::new();
        assert_eq!(state.temperature(), None);
        assert_eq!(state.humidity(), None);
        assert_eq!(state.condition(), None);
    }

    #[test]
    fn test_apply_valid_reading() {
        let mut state = ClimateState::new();
        let accepted = state.apply(22.5, 40.0);
        assert!(accepted.temperature && accepted.humidity);
        assert_eq!(state.temperature(), Some(22.5));
        assert_eq!(state.humidity(), Some(40.0));
        assert_eq!(state.condition(), Some(TemperatureCondition::Cool));
    }

    #[test]
    fn test_failed_read_keeps_previous_values() {
        let mut state = ClimateState::new();
        state.apply(22.5, 40.0);

        let accepted = state.apply(f32::NAN, f32::NAN);
        assert_eq!(accepted, Accepted::default());
        assert_eq!(state.temperature(), Some(22.5));
        assert_eq!(state.humidity(), Some(40.0));
    }

    #[test]
    fn test_halves_are_validated_independently() {
        let mut state = ClimateState::new();
        state.apply(20.0, 50.0);

        // Out-of-range temperature, fresh humidity
        let accepted = state.apply(61.0, 55.0);
        assert!(!accepted.temperature);
        assert!(accepted.humidity);
        assert_eq!(state.temperature(), Some(20.0));
        assert_eq!(state.humidity(), Some(55.0));
    }
}
