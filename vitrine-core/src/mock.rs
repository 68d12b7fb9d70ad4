//! Test doubles for the panel and the clock

use core::cell::Cell;
use std::vec::Vec;

use crate::color::Rgb565;
use crate::traits::{Clock, PixelSink, SCREEN_HEIGHT, SCREEN_WIDTH};

const W: usize = SCREEN_WIDTH as usize;
const H: usize = SCREEN_HEIGHT as usize;

/// In-memory panel that behaves like the controller's windowed RAM
pub struct MockPanel {
    frame: Vec<u16>,
    window: (u16, u16, u16, u16),
    cursor: (u16, u16),
    /// Number of `set_window` calls
    pub windows: usize,
    /// Top row of every window, in call order
    pub window_rows: Vec<u16>,
    /// Total pixels pushed
    pub pushed: usize,
    /// Number of full-screen fills
    pub fills: usize,
}

impl MockPanel {
    pub fn new() -> Self {
        Self {
            frame: std::vec![0; W * H],
            window: (0, 0, 0, 0),
            cursor: (0, 0),
            windows: 0,
            window_rows: Vec::new(),
            pushed: 0,
            fills: 0,
        }
    }

    /// Native color at a pixel
    pub fn pixel(&self, x: u16, y: u16) -> Rgb565 {
        Rgb565(self.frame[y as usize * W + x as usize])
    }

    /// Number of pixels holding `color`
    pub fn count(&self, color: Rgb565) -> usize {
        self.frame.iter().filter(|&&p| p == color.raw()).count()
    }
}

impl PixelSink for MockPanel {
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) {
        assert!(x0 <= x1 && y0 <= y1, "inverted window");
        assert!((x1 as usize) < W && (y1 as usize) < H, "window off panel");
        self.window = (x0, y0, x1, y1);
        self.cursor = (x0, y0);
        self.windows += 1;
        self.window_rows.push(y0);
    }

    fn push_pixels(&mut self, pixels: &[u16]) {
        let (x0, _, x1, y1) = self.window;
        for &p in pixels {
            let (x, y) = self.cursor;
            if y > y1 {
                break;
            }
            self.frame[y as usize * W + x as usize] = p.swap_bytes();
            self.cursor = if x == x1 { (x0, y + 1) } else { (x + 1, y) };
            self.pushed += 1;
        }
    }

    fn fill_screen(&mut self, color: Rgb565) {
        self.frame.iter_mut().for_each(|p| *p = color.raw());
        self.fills += 1;
    }
}

/// Settable millisecond clock
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    pub fn new(start_ms: u32) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}
