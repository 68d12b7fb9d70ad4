//! Main controller task
//!
//! Waits on button presses, ticks and time syncs and hands each to the
//! widget. Only one page is drawn at a time, so nothing here needs locking.

use defmt::*;
use embassy_futures::select::{select3, Either3};

use crate::channels::{BUTTON_CHANNEL, TIME_SYNC};
use crate::controller::Widget;
use crate::tasks::tick::TICK_SIGNAL;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(widget: &'static mut Widget) {
    info!("Controller task started");

    widget.start();
    widget.check_display();

    loop {
        match select3(BUTTON_CHANNEL.receive(), TICK_SIGNAL.wait(), TIME_SYNC.wait()).await {
            Either3::First(button) => widget.press(button),
            Either3::Second(now_ms) => widget.tick(now_ms),
            Either3::Third(epoch) => widget.sync(epoch),
        }
        widget.check_display();
    }
}
