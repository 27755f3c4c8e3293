//! Centralized sensor threshold configuration.
//!
//! All thresholds are compile-time constants with validation assertions, so a
//! misordered band (e.g. `COOL >= WARM`) fails the build instead of producing an
//! overlapping classification.

// =============================================================================
// Reading Validity
// =============================================================================

/// Lowest accepted temperature reading (degC).
pub const TEMP_VALID_MIN: f32 = 0.0;

/// Highest accepted temperature reading (degC). DHT11 measuring range.
pub const TEMP_VALID_MAX: f32 = 50.0;

/// Lowest accepted relative humidity (%).
pub const HUMIDITY_VALID_MIN: f32 = 0.0;

/// Highest accepted relative humidity (%).
pub const HUMIDITY_VALID_MAX: f32 = 100.0;

const _: () = assert!(TEMP_VALID_MIN < TEMP_VALID_MAX);
const _: () = assert!(HUMIDITY_VALID_MIN < HUMIDITY_VALID_MAX);

/// Check if a temperature reading is usable.
///
/// Returns `false` for NaN and for anything outside `[0, 50]`.
#[inline]
pub fn is_valid_temperature(celsius: f32) -> bool {
    !celsius.is_nan() && (TEMP_VALID_MIN..=TEMP_VALID_MAX).contains(&celsius)
}

/// Check if a humidity reading is usable.
///
/// Returns `false` for NaN and for anything outside `[0, 100]`.
#[inline]
pub fn is_valid_humidity(percent: f32) -> bool {
    !percent.is_nan() && (HUMIDITY_VALID_MIN..=HUMIDITY_VALID_MAX).contains(&percent)
}

// =============================================================================
// Temperature Condition Bands
// =============================================================================

/// Below this is "Cold".
pub const TEMP_COLD_BELOW: f32 = 15.0;

/// Below this (and not cold) is "Cool".
pub const TEMP_COOL_BELOW: f32 = 25.0;

/// Up to and including this (and not cool) is "Warm"; above is "Hot".
pub const TEMP_WARM_MAX: f32 = 30.0;

const _: () = assert!(TEMP_COLD_BELOW < TEMP_COOL_BELOW);
const _: () = assert!(TEMP_COOL_BELOW < TEMP_WARM_MAX);

// =============================================================================
// Sound Level Bands (dB estimate)
// =============================================================================

/// Below this is "Quiet".
pub const SOUND_QUIET_BELOW: u8 = 40;

/// Below this is "Normal".
pub const SOUND_NORMAL_BELOW: u8 = 60;

/// Below this is "Loud"; anything louder is "V.Loud".
pub const SOUND_LOUD_BELOW: u8 = 80;

const _: () = assert!(SOUND_QUIET_BELOW < SOUND_NORMAL_BELOW);
const _: () = assert!(SOUND_NORMAL_BELOW < SOUND_LOUD_BELOW);

// =============================================================================
// Light Level Bands (raw ADC counts)
// =============================================================================

/// Below this is "Dark".
pub const LIGHT_DARK_BELOW: u16 = 500;

/// Below this is "Dim".
pub const LIGHT_DIM_BELOW: u16 = 1500;

/// Below this is "Bright"; anything brighter is "V.Bright".
pub const LIGHT_BRIGHT_BELOW: u16 = 3000;

const _: () = assert!(LIGHT_DARK_BELOW < LIGHT_DIM_BELOW);
const _: () = assert!(LIGHT_DIM_BELOW < LIGHT_BRIGHT_BELOW);

/// Deviation from the startup baseline (ADC counts) that counts as a change.
/// The comparison is strict: a delta of exactly this value is "No change".
pub const LIGHT_CHANGE_THRESHOLD: i32 = 50;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_temperature_bounds() {
        assert!(is_valid_temperature(0.0));
        assert!(is_valid_temperature(50.0));
        assert!(is_valid_temperature(23.4));
        assert!(!is_valid_temperature(-0.1));
        assert!(!is_valid_temperature(50.1));
    }

    #[test]
    fn test_valid_temperature_rejects_non_numbers() {
        assert!(!is_valid_temperature(f32::NAN));
        assert!(!is_valid_temperature(f32::INFINITY));
        assert!(!is_valid_temperature(f32::NEG_INFINITY));
    }

    #[test]
    fn test_valid_humidity_bounds() {
        assert!(is_valid_humidity(0.0));
        assert!(is_valid_humidity(100.0));
        assert!(!is_valid_humidity(-1.0));
        assert!(!is_valid_humidity(100.5));
        assert!(!is_valid_humidity(f32::NAN));
    }

    #[test]
    fn test_humidity_and_temperature_ranges_differ() {
        // 75% is a fine humidity but an impossible DHT11 temperature
        assert!(is_valid_humidity(75.0));
        assert!(!is_valid_temperature(75.0));
    }
}
