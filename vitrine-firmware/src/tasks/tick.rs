//! Tick task
//!
//! Wakes the controller at the frame cadence. The controller decides
//! what, if anything, is due on each tick.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};

/// Signal to notify controller of tick, carrying the uptime in ms
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Tick task - sends periodic tick signals with timestamp
#[embassy_executor::task]
pub async fn tick_task(interval_ms: u32) {
    info!("Tick task started ({} ms)", interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(interval_ms.max(1) as u64));

    loop {
        ticker.next().await;
        // Overwrites an unconsumed tick
        TICK_SIGNAL.signal(Instant::now().as_millis() as u32);
    }
}
