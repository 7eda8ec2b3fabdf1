//! Raw level poller
//!
//! The independent fallback path: sample the instantaneous hardware level
//! for a channel and write it into the store. In `Raw` mode the sample
//! bypasses debounce entirely, so it can overwrite a debounced value with
//! a transient one and vice versa - the two paths are deliberately not
//! mutually consistent; polling is the coarse catch-all for edges the
//! interrupt path missed. `Debounced` mode routes samples through the
//! edge filter instead.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::channel::{ChannelBank, ChannelId};
use crate::traits::InputLine;

/// How poll samples are written into the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollMode {
    /// Write the sampled level unconditionally, bypassing debounce
    #[default]
    Raw,
    /// Route the sample through the debounce filter like an edge
    Debounced,
}

/// Sample one line and write its level into the store
pub fn poll_line<M, L, const N: usize>(
    bank: &ChannelBank<M, N>,
    id: ChannelId,
    line: &L,
    mode: PollMode,
    now_us: u64,
) where
    M: RawMutex,
    L: InputLine + ?Sized,
{
    let level = line.read_level();
    match mode {
        PollMode::Raw => bank.apply_poll(id, level),
        PollMode::Debounced => {
            let _ = bank.apply_edge(id, level, now_us);
        }
    }
}

/// Sample every line in table order
pub fn poll_all<M, L, const N: usize>(
    bank: &ChannelBank<M, N>,
    lines: &[L; N],
    mode: PollMode,
    now_us: u64,
) where
    M: RawMutex,
    L: InputLine,
{
    for (index, line) in lines.iter().enumerate() {
        poll_line(bank, ChannelId::from_index(index), line, mode, now_us);
    }
}

#[cfg(test)]
mod tests {
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::*;

    type TestBank = ChannelBank<NoopRawMutex, 8>;

    const T0: u64 = 1_000_000;

    struct FixedLine(bool);

    impl InputLine for FixedLine {
        fn read_level(&self) -> bool {
            self.0
        }
    }

    fn ch(id: u8) -> ChannelId {
        ChannelId::new(id).unwrap()
    }

    #[test]
    fn test_poll_all_reflected_in_snapshot() {
        let bank = TestBank::new(T0);
        let lines: [FixedLine; 8] = core::array::from_fn(|i| FixedLine(i % 2 == 0));

        poll_all(&bank, &lines, PollMode::Raw, T0 + 10);

        for entry in bank.snapshot() {
            assert_eq!(entry.level, (entry.id.get() - 1) % 2 == 0);
            // The raw path never advances transition timestamps.
            assert_eq!(entry.last_transition_us, T0);
        }
    }

    #[test]
    fn test_raw_poll_overwrites_debounced_state() {
        let bank = TestBank::new(T0);
        bank.apply_edge(ch(1), true, T0 + 500);

        poll_line(&bank, ch(1), &FixedLine(false), PollMode::Raw, T0 + 510);

        let entry = bank.snapshot()[0];
        assert!(!entry.level);
        assert_eq!(entry.last_transition_us, T0 + 500);
    }

    #[test]
    fn test_debounced_poll_within_window_rejected() {
        let bank = TestBank::new(T0);

        poll_line(&bank, ch(1), &FixedLine(true), PollMode::Debounced, T0 + 50);

        let entry = bank.snapshot()[0];
        assert!(!entry.level);
        assert_eq!(entry.last_transition_us, T0);
    }

    #[test]
    fn test_debounced_poll_beyond_window_accepted() {
        let bank = TestBank::new(T0);

        poll_line(&bank, ch(1), &FixedLine(true), PollMode::Debounced, T0 + 150);

        let entry = bank.snapshot()[0];
        assert!(entry.level);
        assert_eq!(entry.last_transition_us, T0 + 150);
    }

    #[test]
    fn test_poll_line_through_reference() {
        let bank = TestBank::new(T0);
        let line = FixedLine(true);

        // Blanket impl: a reference to a line is itself a line.
        poll_line(&bank, ch(2), &&line, PollMode::Raw, T0);
        assert!(bank.snapshot()[1].level);
    }
}
