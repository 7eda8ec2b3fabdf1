//! Embassy async tasks
//!
//! One line task per monitored channel plus the monitor loop. Shared
//! state lives in the channel bank; there are no other cross-task
//! channels.

pub mod line;
pub mod monitor;

pub use line::{line_task, GpioLine};
pub use monitor::monitor_task;
