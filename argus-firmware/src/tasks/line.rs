//! Per-channel input line task
//!
//! Each monitored line gets its own task instance carrying its channel
//! id. The task parks on the GPIO edge interrupt and multiplexes it
//! with the fixed-cadence poll tick; both paths write into the shared
//! bank through that channel's guard. The pin is owned here - the edge
//! wait and the raw poll sample cannot live in different tasks.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, Ticker};

use argus_core::channel::ChannelId;
use argus_core::cycle::CYCLE_INTERVAL_MS;
use argus_core::debounce::EdgeDecision;
use argus_core::poll::{poll_line, PollMode};
use argus_core::traits::InputLine;

use crate::channels::Bank;

/// Binds an RP2040 input to the core sampling seam
pub struct GpioLine(pub Input<'static>);

impl InputLine for GpioLine {
    fn read_level(&self) -> bool {
        self.0.is_high()
    }
}

/// Line task - edge debouncing and raw polling for one channel
///
/// pool_size matches the channel count in the boards module.
#[embassy_executor::task(pool_size = 8)]
pub async fn line_task(bank: &'static Bank, mut line: GpioLine, id: ChannelId, mode: PollMode) {
    info!("Line task started for channel {}", id.get());

    let mut ticker = Ticker::every(Duration::from_millis(CYCLE_INTERVAL_MS));

    loop {
        let event = select(line.0.wait_for_any_edge(), ticker.next()).await;
        match event {
            Either::First(()) => {
                let sampled = line.read_level();
                let now_us = Instant::now().as_micros();
                match bank.apply_edge(id, sampled, now_us) {
                    EdgeDecision::Accepted => {
                        trace!("ch{}: edge accepted, level={}", id.get(), sampled);
                    }
                    EdgeDecision::Discarded => {
                        trace!("ch{}: bounce discarded", id.get());
                    }
                }
            }
            Either::Second(()) => {
                poll_line(bank, id, &line, mode, Instant::now().as_micros());
            }
        }
    }
}
