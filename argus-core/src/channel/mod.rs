//! Channel state store
//!
//! The single source of truth for per-channel level and transition
//! timestamps. Mutation is channel-scoped: each channel sits behind its
//! own lightweight guard so writers to one channel never couple to
//! readers or writers of another.

mod bank;
mod state;

pub use bank::ChannelBank;
pub use state::{ChannelId, ChannelSnapshot, ChannelState};
