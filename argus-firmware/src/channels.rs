//! Shared channel state
//!
//! The channel bank is the single source of truth for every task. It is
//! initialized once in `main` with the boot timestamp and handed to
//! tasks as a `&'static` reference; all mutation goes through its
//! per-channel guards.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use static_cell::StaticCell;

use argus_core::channel::ChannelBank;

use crate::boards::CHANNEL_COUNT;

/// The concrete bank type: interrupt-safe guard per channel
pub type Bank = ChannelBank<CriticalSectionRawMutex, CHANNEL_COUNT>;

/// Storage for the bank (must live forever for task references)
pub static BANK: StaticCell<Bank> = StaticCell::new();
