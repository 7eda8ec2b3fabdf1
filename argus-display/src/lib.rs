//! Character surface and region layout contract for the Argus monitor
//!
//! Provides the fixed-size character screen the renderer composes into,
//! and the bordered-region geometry with its three layout failure
//! statuses. Backend output (how a composed screen reaches a terminal)
//! belongs to the integrator.

#![no_std]
#![deny(unsafe_code)]

pub mod region;
pub mod screen;

pub use region::{LayoutError, Region};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
