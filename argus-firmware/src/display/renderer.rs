//! Status screen rendering
//!
//! Composes the monitor's windows into the character surface: a header,
//! the per-channel input window, the cycle-time window and the uptime
//! window. Geometry is fixed; every window is validated against the
//! surface before anything is drawn, and a failed validation aborts the
//! whole frame.

use core::fmt::Write;

use heapless::String;

use argus_core::channel::ChannelSnapshot;
use argus_core::cycle::split_us;
use argus_display::{LayoutError, Region, Screen, SCREEN_ROWS};

const HEADER_WINDOW: Region = Region::new(2, 1, 96, 5);
const CYCLE_WINDOW: Region = Region::new(2, 7, 30, 4);
const INPUT_WINDOW: Region = Region::new(34, 7, 48, 14);
const UPTIME_WINDOW: Region = Region::new(2, 12, 30, 4);

/// Row offset of the first channel row inside the input window
const FIRST_CHANNEL_ROW: usize = 4;

/// Screen renderer for the monitor loop
pub struct Renderer {
    screen: Screen,
}

impl Renderer {
    /// Create a renderer with a blank surface
    pub const fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// The composed surface, for the terminal writer
    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Compose the full status frame from a snapshot
    pub fn compose_status(
        &mut self,
        snapshot: &[ChannelSnapshot],
        cycle_delta_us: Option<u64>,
        uptime_us: u64,
    ) -> Result<(), LayoutError> {
        self.screen.clear();

        self.compose_header()?;
        self.compose_cycle_window(cycle_delta_us)?;
        self.compose_input_window(snapshot)?;
        self.compose_uptime_window(uptime_us)?;

        self.screen.put_str(SCREEN_ROWS - 1, 0, "Runs until board reset.");
        Ok(())
    }

    fn compose_header(&mut self) -> Result<(), LayoutError> {
        self.screen.draw_frame(&HEADER_WINDOW)?;
        self.screen.put_str_centered(2, "ARGUS SENSOR INPUT MONITOR");
        self.screen
            .put_str_centered(3, "Eight-channel edge watch over Embassy");
        self.screen.put_str_centered(4, "RP2040");
        Ok(())
    }

    fn compose_cycle_window(&mut self, cycle_delta_us: Option<u64>) -> Result<(), LayoutError> {
        self.screen.draw_frame(&CYCLE_WINDOW)?;

        let row = CYCLE_WINDOW.row as usize;
        let col = CYCLE_WINDOW.col as usize + 2;
        self.screen.put_str(row + 1, col, "CYCLE TIME");

        let mut value: String<28> = String::new();
        match cycle_delta_us {
            Some(delta_us) => {
                let (seconds, millis, micros) = split_us(delta_us);
                let _ = write!(value, "{}s {:03}ms {:03}us", seconds, millis, micros);
            }
            None => {
                let _ = value.push_str("measuring...");
            }
        }
        self.screen.put_str(row + 2, col, &value);
        Ok(())
    }

    fn compose_input_window(&mut self, snapshot: &[ChannelSnapshot]) -> Result<(), LayoutError> {
        self.screen.draw_frame(&INPUT_WINDOW)?;

        let col = INPUT_WINDOW.col as usize;
        let row = INPUT_WINDOW.row as usize;
        self.screen
            .put_str(row + 2, col + 1, "  STATE  CHANNEL      LAST EDGE TIMESTAMP");

        for (index, entry) in snapshot.iter().enumerate() {
            let cell = if entry.level { "  ON " } else { " OFF " };
            let mut line: String<48> = String::new();
            let _ = write!(
                line,
                "{}  CH {} - {}",
                cell,
                entry.id.get(),
                boot_relative(entry.last_transition_us)
            );
            self.screen
                .put_str(row + FIRST_CHANNEL_ROW + index, col + 3, &line);
        }
        Ok(())
    }

    fn compose_uptime_window(&mut self, uptime_us: u64) -> Result<(), LayoutError> {
        self.screen.draw_frame(&UPTIME_WINDOW)?;

        let row = UPTIME_WINDOW.row as usize;
        let col = UPTIME_WINDOW.col as usize + 2;
        self.screen.put_str(row + 1, col, "UPTIME");

        let value = boot_relative(uptime_us);
        self.screen.put_str(row + 2, col, &value);
        Ok(())
    }

    /// Compose the terminal abort screen naming the fatal status
    ///
    /// The abort window geometry is static and always fits the surface.
    pub fn compose_abort(&mut self, fault: LayoutError) {
        self.screen.clear();
        let _ = self.screen.draw_frame(&Region::new(25, 10, 50, 8));

        let reason = match fault {
            LayoutError::OffSurface => "a window origin lies off the surface",
            LayoutError::DoesNotFit => "a window does not fit on the surface",
            LayoutError::TooSmall => "a window is too small to render",
        };

        self.screen.put_str_centered(12, "ARGUS HALTED");
        self.screen.put_str_centered(14, reason);
        self.screen
            .put_str_centered(15, "render loop stopped - reset the board");
    }
}

/// Format a monotonic microsecond timestamp as boot-relative seconds
fn boot_relative(us: u64) -> String<24> {
    let mut out = String::new();
    let _ = write!(out, "+{}.{:06}s", us / 1_000_000, us % 1_000_000);
    out
}
