//! Argus - Digital Input Monitor Firmware
//!
//! Main firmware binary for RP2040-based input monitor heads. Watches
//! eight digital sense lines, debounces their edge interrupts, and
//! reports per-channel state to a UART-attached terminal at a fixed
//! cadence.
//!
//! Named after Argus Panoptes, the hundred-eyed watchman - every line
//! gets its own always-open eye.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Instant;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use argus_core::channel::ChannelId;

use crate::channels::{Bank, BANK};
use crate::tasks::GpioLine;

mod boards;
mod channels;
mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 1024]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Argus firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART0 for the terminal (GPIO0 TX, GPIO1 RX)
    let uart_config = UartConfig::default(); // 115200 baud default

    let tx_buf = TX_BUF.init([0u8; 1024]);
    let rx_buf = RX_BUF.init([0u8; 16]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, _rx) = uart.split();

    info!("Terminal UART initialized");

    // Seed the bank with the boot timestamp: an edge arriving within the
    // debounce window of startup is settling noise and gets discarded.
    let bank: &'static Bank = BANK.init(Bank::new(Instant::now().as_micros()));

    // Sense lines, channel 1 first. Pin assignments are board-specific
    // (see boards module); pull-downs make the lines idle low.
    let lines = [
        Input::new(p.PIN_2, Pull::Down),
        Input::new(p.PIN_3, Pull::Down),
        Input::new(p.PIN_4, Pull::Down),
        Input::new(p.PIN_5, Pull::Down),
        Input::new(p.PIN_6, Pull::Down),
        Input::new(p.PIN_7, Pull::Down),
        Input::new(p.PIN_8, Pull::Down),
        Input::new(p.PIN_9, Pull::Down),
    ];
    info!("Sense lines initialized");

    // Spawn tasks
    for (index, line) in lines.into_iter().enumerate() {
        let id = ChannelId::new(index as u8 + 1).unwrap();
        spawner
            .spawn(tasks::line_task(bank, GpioLine(line), id, boards::POLL_MODE))
            .unwrap();
    }
    spawner.spawn(tasks::monitor_task(bank, tx)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
