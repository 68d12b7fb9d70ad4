//! Serial time sync task
//!
//! Reads `T <unix seconds>` lines from the UART, answers each with a
//! status line and forwards accepted times to the controller.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io_async::{Read, Write};

use vitrine_core::time::{SyncEvent, TimeSyncParser};

use crate::channels::TIME_SYNC;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

#[embassy_executor::task]
pub async fn time_sync_task(mut rx: BufferedUartRx, mut tx: BufferedUartTx) {
    info!("Time sync task started");

    let mut parser = TimeSyncParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    if let Some(event) = parser.feed(byte) {
                        handle_event(event);
                        reply(&mut tx, event.reply()).await;
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

fn handle_event(event: SyncEvent) {
    match event {
        SyncEvent::SetEpoch(epoch) => {
            info!("Time sync: {}", epoch);
            TIME_SYNC.signal(epoch);
        }
        SyncEvent::Error(e) => {
            warn!("Time sync rejected: {}", e);
        }
    }
}

async fn reply(tx: &mut BufferedUartTx, line: &str) {
    let result = match tx.write_all(line.as_bytes()).await {
        Ok(()) => tx.write_all(b"\n").await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        warn!("UART write error: {:?}", e);
    }
}
