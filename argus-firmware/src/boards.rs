//! Board definitions for the reference Argus sense head
//!
//! Note on pin references: terminal block breakout boards label
//! positions by GPIO number, not package pin. The sense lines sit on
//! GPIO2-GPIO9 (channel 1 = GPIO2, counting up), keeping GPIO0/GPIO1
//! free for the terminal UART. All sense inputs are pulled down and
//! report both edges; the concrete `Input` construction is in `main`.

use argus_core::poll::PollMode;

/// Number of monitored input channels
pub const CHANNEL_COUNT: usize = 8;

/// How the poll path writes samples into the store
///
/// `Raw` means every cycle's unfiltered sample overwrites whatever the
/// debounced edge path last wrote. Switch to `Debounced` to route poll
/// samples through the edge filter.
pub const POLL_MODE: PollMode = PollMode::Raw;
