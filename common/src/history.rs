//! Sample history ring and batch rolling average.
//!
//! Both are fixed-size and allocation free. [`History`] is write-only storage as far
//! as the screens are concerned; it is kept so the samplers carry the same state a
//! graph view would need.

use crate::config::{AVG_WINDOW, HISTORY_SIZE};

// =============================================================================
// History Ring
// =============================================================================

/// Fixed-size circular history. Writes wrap to slot 0 after the last slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct History<const N: usize = HISTORY_SIZE> {
    slots: [u16; N],
    cursor: usize,
}

impl<const N: usize> History<N> {
    /// Create a zeroed history with the cursor at slot 0.
    pub const fn new() -> Self {
        Self {
            slots: [0; N],
            cursor: 0,
        }
    }

    /// Store `value` at the cursor and advance it.
    pub fn push(
        &mut self,
        value: u16,
    ) {
        self.slots[self.cursor] = value;
        self.cursor = (self.cursor + 1) % N;
    }

    /// Slot the next write goes to.
    #[inline]
    pub const fn cursor(&self) -> usize { self.cursor }

    /// Raw slots in storage order (not chronological once wrapped).
    #[inline]
    pub const fn slots(&self) -> &[u16; N] { &self.slots }
}

impl<const N: usize> Default for History<N> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Rolling Average
// =============================================================================

/// Batch average over windows of `AVG_WINDOW + 1` samples.
///
/// Samples accumulate into a running sum. Once the count exceeds [`AVG_WINDOW`] the
/// average (integer division) is published and the accumulator restarts from zero.
/// Between publications [`RollingAverage::average`] keeps returning the last value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RollingAverage {
    sum: u32,
    count: u32,
    average: u32,
}

impl RollingAverage {
    pub const fn new() -> Self {
        Self {
            sum: 0,
            count: 0,
            average: 0,
        }
    }

    /// Add a sample. Returns the new average when this sample completed a window.
    pub fn push(
        &mut self,
        value: u32,
    ) -> Option<u32> {
        self.sum += value;
        self.count += 1;

        if self.count > AVG_WINDOW {
            self.average = self.sum / self.count;
            self.sum = 0;
            self.count = 0;
            return Some(self.average);
        }

        None
    }

    /// Last published average (0 until the first window completes).
    #[inline]
    pub const fn average(&self) -> u32 { self.average }

    /// Sum of the samples in the current, unfinished window.
    #[inline]
    pub const fn pending_sum(&self) -> u32 { self.sum }

    /// Number of samples in the current, unfinished window.
    #[inline]
    pub const fn pending_count(&self) -> u32 { self.count }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_starts_zeroed() {
        let history: History = History::new();
        assert_eq!(history.cursor(), 0);
        assert!(history.slots().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_history_wraps_after_32_writes() {
        let mut history: History = History::new();
        for i in 0..HISTORY_SIZE {
            history.push(i as u16 + 1);
        }
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.slots()[0], 1);
        assert_eq!(history.slots()[HISTORY_SIZE - 1], HISTORY_SIZE as u16);

        // 33rd write lands in slot 0
        history.push(999);
        assert_eq!(history.slots()[0], 999);
        assert_eq!(history.slots()[1], 2);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_average_publishes_on_eleventh_sample() {
        let mut avg = RollingAverage::new();
        for v in 1..=10 {
            assert_eq!(avg.push(v), None);
        }
        assert_eq!(avg.pending_count(), 10);
        assert_eq!(avg.average(), 0);

        // 1 + 2 + ... + 11 = 66, 66 / 11 = 6
        assert_eq!(avg.push(11), Some(6));
        assert_eq!(avg.average(), 6);
        assert_eq!(avg.pending_sum(), 0);
        assert_eq!(avg.pending_count(), 0);
    }

    #[test]
    fn test_average_truncates() {
        let mut avg = RollingAverage::new();
        for _ in 0..10 {
            avg.push(1);
        }
        // 10 + 2 = 12, 12 / 11 = 1
        assert_eq!(avg.push(2), Some(1));
    }

    #[test]
    fn test_average_holds_between_windows() {
        let mut avg = RollingAverage::new();
        for _ in 0..11 {
            avg.push(100);
        }
        assert_eq!(avg.average(), 100);

        for _ in 0..5 {
            avg.push(0);
        }
        assert_eq!(avg.average(), 100);
        assert_eq!(avg.pending_count(), 5);
    }
}
