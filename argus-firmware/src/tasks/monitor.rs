//! Fixed-cadence monitor task
//!
//! The one active loop in the firmware: every cycle it measures the
//! inter-cycle wall-clock delta, takes a consistent snapshot of the
//! bank, composes the status screen and flushes it to the terminal.
//! A layout fault or terminal write failure is fatal - no retries, the
//! loop ends on the abort path and the task parks.

use defmt::*;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::BufferedUartTx;
use embassy_time::{Duration, Instant, Ticker, Timer};

use argus_core::cycle::{CycleTimer, CYCLE_INTERVAL_MS};

use crate::channels::Bank;
use crate::display::{flush_screen, init_terminal, Renderer};

/// Monitor task - poll-snapshot-render at the fixed cycle cadence
#[embassy_executor::task]
pub async fn monitor_task(bank: &'static Bank, mut tx: BufferedUartTx<'static, UART0>) {
    info!("Monitor task started");

    if let Err(e) = init_terminal(&mut tx).await {
        error!("Terminal setup failed: {:?}", e);
        park().await;
    }

    let mut ticker = Ticker::every(Duration::from_millis(CYCLE_INTERVAL_MS));
    let mut timer = CycleTimer::new();
    let mut renderer = Renderer::new();

    loop {
        ticker.next().await;

        let now_us = Instant::now().as_micros();
        let cycle_delta_us = timer.begin(now_us);
        let snapshot = bank.snapshot();

        if let Err(e) = renderer.compose_status(&snapshot, cycle_delta_us, now_us) {
            error!("Layout fault: {:?}", e);
            renderer.compose_abort(e);
            let _ = flush_screen(renderer.screen_mut(), &mut tx).await;
            break;
        }

        if let Err(e) = flush_screen(renderer.screen_mut(), &mut tx).await {
            error!("Terminal write failed: {:?}", e);
            break;
        }
    }

    park().await;
}

/// Terminal diagnostic path: keep the fault visible on the debug channel
async fn park() -> ! {
    loop {
        error!("Monitor halted on fatal display fault");
        Timer::after_secs(60).await;
    }
}
