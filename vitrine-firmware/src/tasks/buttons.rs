//! Button polling task
//!
//! Samples the four active-low buttons and forwards debounced presses.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use vitrine_core::pages::{Button, Debouncer};
use vitrine_hal_rp2040::{InputPin, RpInput};

use crate::channels::BUTTON_CHANNEL;

/// Button sampling period
const POLL_INTERVAL_MS: u64 = 5;

/// Buttons in [`Button::ALL`] order
pub type ButtonPins = [RpInput<'static>; 4];

#[embassy_executor::task]
pub async fn buttons_task(pins: ButtonPins, debounce_ms: u32) {
    info!("Button task started");

    let mut debouncer = Debouncer::new(debounce_ms);
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        ticker.next().await;
        let now = Instant::now().as_millis() as u32;

        for (button, pin) in Button::ALL.into_iter().zip(&pins) {
            if debouncer.update(button, pin.is_active(), now) {
                debug!("Button {}", button);
                if BUTTON_CHANNEL.try_send(button).is_err() {
                    warn!("Button channel full, dropping press");
                }
            }
        }
    }
}
