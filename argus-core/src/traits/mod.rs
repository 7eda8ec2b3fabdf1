//! Hardware abstraction traits
//!
//! The seam between channel-tracking logic and chip-specific input
//! implementations. The monotonic clock is injected as plain `now_us`
//! parameters rather than a trait, keeping the interrupt path free of
//! indirection.

pub mod input;

pub use input::InputLine;
