//! ANSI terminal writer
//!
//! Flushes the composed surface to the UART-attached terminal: clear
//! and hide the cursor once at setup, then home the cursor and repaint
//! every row per frame. The terminal is treated as a dumb character
//! surface; no capability negotiation.

use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedUartTx, Error as UartError};
use embedded_io_async::Write;

use argus_display::{Screen, SCREEN_COLS};

/// Clear screen and hide the cursor, sent once at setup
const TERM_INIT: &[u8] = b"\x1b[2J\x1b[?25l";

/// Home the cursor before a repaint
const TERM_HOME: &[u8] = b"\x1b[H";

// Frame glyphs are 3-byte UTF-8, plus CR LF per row
const ROW_BUF_LEN: usize = SCREEN_COLS * 3 + 2;

/// Prepare the terminal for full-screen repaints
pub async fn init_terminal(tx: &mut BufferedUartTx<'static, UART0>) -> Result<(), UartError> {
    tx.write_all(TERM_INIT).await
}

/// Send the surface to the terminal if it changed since the last flush
pub async fn flush_screen(
    screen: &mut Screen,
    tx: &mut BufferedUartTx<'static, UART0>,
) -> Result<(), UartError> {
    if !screen.is_dirty() {
        return Ok(());
    }

    tx.write_all(TERM_HOME).await?;

    let mut buf = [0u8; ROW_BUF_LEN];
    for row in screen.rows_iter() {
        let mut len = 0;
        for &ch in row {
            let encoded = ch.encode_utf8(&mut buf[len..]);
            len += encoded.len();
        }
        buf[len] = b'\r';
        buf[len + 1] = b'\n';
        tx.write_all(&buf[..len + 2]).await?;
    }

    screen.mark_clean();
    Ok(())
}
