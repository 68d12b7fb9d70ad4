//! Active page and redraw cadence

use crate::traits::elapsed_ms;

use super::{Button, Page};

pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 16;
pub const DEFAULT_CLOCK_REFRESH_MS: u32 = 1000;

/// Work that has come due on the active page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Due {
    /// Redraw the date and time
    ClockRefresh,
    /// Advance the animation on this page
    Frame(Page),
}

/// Tracks the active page and when it next needs drawing
#[derive(Debug, Clone)]
pub struct PageScheduler {
    page: Page,
    frame_interval_ms: u32,
    clock_refresh_ms: u32,
    last_due_ms: u32,
}

impl Default for PageScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL_MS, DEFAULT_CLOCK_REFRESH_MS)
    }
}

impl PageScheduler {
    pub const fn new(frame_interval_ms: u32, clock_refresh_ms: u32) -> Self {
        Self {
            page: Page::Clock,
            frame_interval_ms,
            clock_refresh_ms,
            last_due_ms: 0,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Handle a button press; returns the page to (re-)enter
    pub fn press(&mut self, button: Button, now_ms: u32) -> Page {
        let page = Page::for_button(button);
        self.enter(page, now_ms);
        page
    }

    /// Make `page` active; the caller draws it immediately
    pub fn enter(&mut self, page: Page, now_ms: u32) {
        self.page = page;
        self.last_due_ms = now_ms;
    }

    /// Report work that is due at `now_ms`, at most one item per call
    pub fn poll(&mut self, now_ms: u32) -> Option<Due> {
        let (interval, due) = match self.page {
            Page::Clock => (self.clock_refresh_ms, Due::ClockRefresh),
            Page::Ball | Page::Mandelbrot => (self.frame_interval_ms, Due::Frame(self.page)),
            Page::Quote => return None,
        };

        if elapsed_ms(self.last_due_ms, now_ms) >= interval {
            self.last_due_ms = now_ms;
            Some(due)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_clock() {
        assert_eq!(PageScheduler::default().page(), Page::Clock);
    }

    #[test]
    fn test_clock_refresh_cadence() {
        let mut s = PageScheduler::default();
        s.enter(Page::Clock, 0);
        assert_eq!(s.poll(500), None);
        assert_eq!(s.poll(999), None);
        assert_eq!(s.poll(1000), Some(Due::ClockRefresh));
        assert_eq!(s.poll(1001), None);
        assert_eq!(s.poll(2000), Some(Due::ClockRefresh));
    }

    #[test]
    fn test_frame_cadence_on_animated_pages() {
        let mut s = PageScheduler::default();
        assert_eq!(s.press(Button::X, 100), Page::Ball);
        assert_eq!(s.poll(110), None);
        assert_eq!(s.poll(116), Some(Due::Frame(Page::Ball)));

        assert_eq!(s.press(Button::Y, 200), Page::Mandelbrot);
        assert_eq!(s.poll(216), Some(Due::Frame(Page::Mandelbrot)));
    }

    #[test]
    fn test_quote_is_static() {
        let mut s = PageScheduler::default();
        assert_eq!(s.press(Button::B, 0), Page::Quote);
        assert_eq!(s.poll(10_000), None);
        assert_eq!(s.poll(100_000), None);
    }

    #[test]
    fn test_repress_restarts_cadence() {
        let mut s = PageScheduler::default();
        s.press(Button::A, 0);
        assert_eq!(s.press(Button::A, 900), Page::Clock);
        assert_eq!(s.poll(1000), None);
        assert_eq!(s.poll(1900), Some(Due::ClockRefresh));
    }

    #[test]
    fn test_late_poll_fires_once() {
        let mut s = PageScheduler::new(16, 1000);
        s.press(Button::X, 0);
        assert_eq!(s.poll(100), Some(Due::Frame(Page::Ball)));
        assert_eq!(s.poll(101), None);
    }
}
