//! Per-button press debouncing

use crate::traits::elapsed_ms;

use super::Button;

pub const DEFAULT_DEBOUNCE_MS: u32 = 200;

/// Reports a press when a button reads active and more than the debounce
/// interval has passed since that button's last reported press
///
/// A held button repeats once per interval.
#[derive(Debug, Clone)]
pub struct Debouncer {
    debounce_ms: u32,
    last_press: [Option<u32>; 4],
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl Debouncer {
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            last_press: [None; 4],
        }
    }

    /// Feed one sample; returns true if this sample is a new press
    pub fn update(&mut self, button: Button, active: bool, now_ms: u32) -> bool {
        if !active {
            return false;
        }

        let slot = &mut self.last_press[button.index()];
        let accept = match *slot {
            Some(last) => elapsed_ms(last, now_ms) > self.debounce_ms,
            None => true,
        };
        if accept {
            *slot = Some(now_ms);
        }
        accept
    }
}
