//! Board-agnostic core logic for the Argus input monitor
//!
//! This crate contains all channel-tracking logic that does not depend on
//! specific hardware implementations:
//!
//! - Per-channel state store with one guard per channel
//! - Edge debounce filter for interrupt-driven notifications
//! - Raw level poller (the debounce-bypassing fallback path)
//! - Cycle timing for the fixed-cadence display loop
//! - Hardware abstraction trait for digital input lines
//!
//! Timestamps are microseconds on a monotonic clock, injected by the
//! caller; the crate never reads time itself.

#![no_std]
#![deny(unsafe_code)]

pub mod channel;
pub mod cycle;
pub mod debounce;
pub mod poll;
pub mod traits;
