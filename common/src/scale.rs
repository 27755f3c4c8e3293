//! Integer range mapping.
//!
//! [`map_range`] re-maps a value from one range to another with truncating integer
//! division, and does not clamp: inputs outside the source range map outside the
//! target range. Pair it with [`constrain`] where the result must stay in bounds.

/// Linearly re-map `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// The division truncates toward zero, so `map_range(4094, 0, 4095, 0, 100)` is 99.
#[inline]
pub const fn map_range(
    value: i32,
    in_min: i32,
    in_max: i32,
    out_min: i32,
    out_max: i32,
) -> i32 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Clamp `value` to `[low, high]`.
#[inline]
pub const fn constrain(
    value: i32,
    low: i32,
    high: i32,
) -> i32 {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}
