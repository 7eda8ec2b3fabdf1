//! Cycle timing for the fixed-cadence display loop
//!
//! The scheduler sleeps a fixed interval between cycles; the measured
//! wall-clock delta between cycle starts is diagnostic data shown in the
//! cycle-time window.

/// Nominal interval between scheduler cycles in milliseconds
pub const CYCLE_INTERVAL_MS: u64 = 10;

/// Measures the wall-clock delta between consecutive cycle starts
#[derive(Debug, Default)]
pub struct CycleTimer {
    last_start_us: Option<u64>,
}

impl CycleTimer {
    /// Create a timer with no cycle on record
    pub const fn new() -> Self {
        Self { last_start_us: None }
    }

    /// Mark a cycle start, returning the delta since the previous one
    ///
    /// Returns `None` on the first cycle. The delta is saturating, so a
    /// non-advancing clock reads as 0 rather than wrapping.
    pub fn begin(&mut self, now_us: u64) -> Option<u64> {
        let delta_us = self.last_start_us.map(|last| now_us.saturating_sub(last));
        self.last_start_us = Some(now_us);
        delta_us
    }
}

/// Decompose a microsecond count into whole seconds, milliseconds and
/// the microsecond remainder, for the diagnostic display fields
pub const fn split_us(delta_us: u64) -> (u64, u64, u64) {
    let seconds = delta_us / 1_000_000;
    let millis = delta_us / 1_000 - seconds * 1_000;
    let micros = delta_us - seconds * 1_000_000 - millis * 1_000;
    (seconds, millis, micros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_cycle_has_no_delta() {
        let mut timer = CycleTimer::new();
        assert_eq!(timer.begin(5_000), None);
    }

    #[test]
    fn test_delta_between_cycles() {
        let mut timer = CycleTimer::new();
        timer.begin(5_000);
        assert_eq!(timer.begin(15_200), Some(10_200));
        assert_eq!(timer.begin(25_000), Some(9_800));
    }

    #[test]
    fn test_stalled_clock_reads_zero() {
        let mut timer = CycleTimer::new();
        timer.begin(5_000);
        assert_eq!(timer.begin(5_000), Some(0));
        assert_eq!(timer.begin(4_000), Some(0));
    }

    #[test]
    fn test_split_us_fields() {
        assert_eq!(split_us(0), (0, 0, 0));
        assert_eq!(split_us(999), (0, 0, 999));
        assert_eq!(split_us(10_200), (0, 10, 200));
        assert_eq!(split_us(2_345_678), (2, 345, 678));
    }
}
