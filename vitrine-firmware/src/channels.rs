//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use vitrine_core::pages::Button;

/// Channel capacity for debounced button presses
const BUTTON_CHANNEL_SIZE: usize = 4;

/// Debounced button presses, in order
pub static BUTTON_CHANNEL: Channel<CriticalSectionRawMutex, Button, BUTTON_CHANNEL_SIZE> =
    Channel::new();

/// Latest valid Unix time received from the host
pub static TIME_SYNC: Signal<CriticalSectionRawMutex, u64> = Signal::new();
