//! Row-at-a-time Mandelbrot renderer with automatic zoom

use crate::fixed::Fx;
use crate::traits::{elapsed_ms, Clock, PixelSink, BORDER, SCREEN_HEIGHT, SCREEN_WIDTH};

use super::escape::classify;
use super::palette::Palette;

/// Computed rows per frame; each covers two panel rows
pub const SAMPLE_ROWS: u16 = (SCREEN_HEIGHT - 2 * BORDER) / 2;

/// Pixels per rendered row (inside the border)
pub const ROW_PIXELS: usize = (SCREEN_WIDTH - 2 * BORDER) as usize;

/// Minimum time between zoom steps
pub const ZOOM_INTERVAL_MS: u32 = 10;

pub const START_ITERATIONS: u16 = 64;
pub const MAX_ITERATIONS: u16 = 140;

const CENTER_RE: f64 = -0.743643887037151;
const CENTER_IM: f64 = 0.131825904205330;
const START_SCALE: f64 = 0.010;
const ZOOM_FACTOR: f64 = 0.985;

const MID_X: i32 = SCREEN_WIDTH as i32 / 2;
const MID_Y: i32 = SCREEN_HEIGHT as i32 / 2;

/// Zoom state and scan cursor
pub struct MandelbrotEngine {
    center_re: Fx,
    center_im: Fx,
    /// Plane units per pixel
    scale: Fx,
    zoom_factor: Fx,
    max_iterations: u16,
    /// Next sample row, `0..SAMPLE_ROWS`
    cursor: u16,
    last_zoom_ms: u32,
    zoom_count: u32,
    palette: Palette,
    row: [u16; ROW_PIXELS],
}

impl Default for MandelbrotEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MandelbrotEngine {
    pub fn new() -> Self {
        Self {
            center_re: Fx::from_f64(CENTER_RE),
            center_im: Fx::from_f64(CENTER_IM),
            scale: Fx::from_f64(START_SCALE),
            zoom_factor: Fx::from_f64(ZOOM_FACTOR),
            max_iterations: START_ITERATIONS,
            cursor: 0,
            last_zoom_ms: 0,
            zoom_count: 0,
            palette: Palette::new(),
            row: [0; ROW_PIXELS],
        }
    }

    /// Reset to the starting view and restart the scan at the top
    pub fn init<C: Clock>(&mut self, clock: &C) {
        self.center_re = Fx::from_f64(CENTER_RE);
        self.center_im = Fx::from_f64(CENTER_IM);
        self.scale = Fx::from_f64(START_SCALE);
        self.max_iterations = START_ITERATIONS;
        self.cursor = 0;
        self.zoom_count = 0;
        self.last_zoom_ms = clock.now_ms();
    }

    /// Render up to `lines_per_tick` sample rows (0 counts as 1)
    ///
    /// When the cursor passes the last row it wraps to the top. The view
    /// zooms on a wrap only if at least [`ZOOM_INTERVAL_MS`] have passed
    /// since the previous zoom.
    pub fn tick<S: PixelSink, C: Clock>(&mut self, sink: &mut S, clock: &C, lines_per_tick: u16) {
        let lines = lines_per_tick.max(1);

        for _ in 0..lines {
            self.render_row(self.cursor);

            let y0 = BORDER + 2 * self.cursor;
            sink.push_row(BORDER, y0, &self.row);
            sink.push_row(BORDER, y0 + 1, &self.row);

            self.cursor += 1;
            if self.cursor >= SAMPLE_ROWS {
                self.cursor = 0;
                let now = clock.now_ms();
                if elapsed_ms(self.last_zoom_ms, now) >= ZOOM_INTERVAL_MS {
                    self.zoom_step();
                    self.last_zoom_ms = now;
                }
            }
        }
    }

    /// Fill the row buffer for sample row `sy`, pre-swapped for the wire
    fn render_row(&mut self, sy: u16) {
        let dy = (BORDER + 2 * sy) as i32 - MID_Y;
        let ci = self.center_im + self.scale.scale_by(dy);

        for (i, px) in self.row.iter_mut().enumerate() {
            let dx = BORDER as i32 + i as i32 - MID_X;
            let cr = self.center_re + self.scale.scale_by(dx);
            let it = classify(cr, ci, self.max_iterations).iterations(self.max_iterations);
            *px = self.palette.color_for(it, self.max_iterations).swapped();
        }
    }

    /// Contract the view and allow one more iteration
    ///
    /// The scale never reaches zero; at one LSB only the iteration cap moves.
    fn zoom_step(&mut self) {
        let next = self.scale * self.zoom_factor;
        self.scale = if next.is_positive() { next } else { Fx::EPSILON };
        if self.max_iterations < MAX_ITERATIONS {
            self.max_iterations += 1;
        }
        self.zoom_count = self.zoom_count.wrapping_add(1);
    }

    pub fn scale(&self) -> Fx {
        self.scale
    }

    pub fn center(&self) -> (Fx, Fx) {
        (self.center_re, self.center_im)
    }

    pub fn max_iterations(&self) -> u16 {
        self.max_iterations
    }

    /// Next sample row to render
    pub fn scan_cursor(&self) -> u16 {
        self.cursor
    }

    /// Zoom steps taken since `init`
    pub fn zoom_count(&self) -> u32 {
        self.zoom_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb565;
    use crate::mock::{MockClock, MockPanel};
    use std::vec::Vec;

    fn engine(clock: &MockClock) -> MandelbrotEngine {
        let mut e = MandelbrotEngine::new();
        e.init(clock);
        e
    }

    #[test]
    fn test_geometry_constants() {
        assert_eq!(SAMPLE_ROWS, 119);
        assert_eq!(ROW_PIXELS, 318);
    }

    #[test]
    fn test_init_state() {
        let clock = MockClock::new(5000);
        let e = engine(&clock);
        assert_eq!(e.scan_cursor(), 0);
        assert_eq!(e.max_iterations(), START_ITERATIONS);
        assert_eq!(e.scale(), Fx::from_f64(0.010));
        assert_eq!(e.center(), (Fx::from_f64(CENTER_RE), Fx::from_f64(CENTER_IM)));
        assert_eq!(e.last_zoom_ms, 5000);
    }

    #[test]
    fn test_tick_writes_each_row_twice() {
        let clock = MockClock::new(0);
        let mut e = engine(&clock);
        let mut panel = MockPanel::new();

        e.tick(&mut panel, &clock, 3);

        assert_eq!(panel.window_rows, [1, 2, 3, 4, 5, 6]);
        assert_eq!(panel.pushed, 6 * ROW_PIXELS);
        assert_eq!(e.scan_cursor(), 3);
        for x in 1..=318 {
            assert_eq!(panel.pixel(x, 1), panel.pixel(x, 2));
        }
        // Border columns are never written
        assert_eq!(panel.pixel(0, 1), Rgb565::BLACK);
        assert_eq!(panel.pixel(319, 1), Rgb565::BLACK);
    }

    #[test]
    fn test_zero_lines_renders_one() {
        let clock = MockClock::new(0);
        let mut e = engine(&clock);
        let mut panel = MockPanel::new();

        e.tick(&mut panel, &clock, 0);

        assert_eq!(e.scan_cursor(), 1);
        assert_eq!(panel.window_rows, [1, 2]);
    }

    #[test]
    fn test_full_pass_covers_interior_in_order() {
        let clock = MockClock::new(0);
        let mut e = engine(&clock);
        let mut panel = MockPanel::new();

        for _ in 0..SAMPLE_ROWS {
            e.tick(&mut panel, &clock, 1);
        }

        let expected: Vec<u16> = (1..=238).collect();
        assert_eq!(panel.window_rows, expected);
        assert_eq!(e.scan_cursor(), 0);
    }

    #[test]
    fn test_wrap_without_elapsed_time_does_not_zoom() {
        let clock = MockClock::new(100);
        let mut e = engine(&clock);
        let mut panel = MockPanel::new();
        let scale = e.scale();

        e.tick(&mut panel, &clock, SAMPLE_ROWS);

        assert_eq!(e.scan_cursor(), 0);
        assert_eq!(e.zoom_count(), 0);
        assert_eq!(e.scale(), scale);
        assert_eq!(e.max_iterations(), START_ITERATIONS);
    }

    #[test]
    fn test_wrap_after_interval_zooms_once() {
        let clock = MockClock::new(100);
        let mut e = engine(&clock);
        let mut panel = MockPanel::new();
        let scale = e.scale();

        clock.advance(ZOOM_INTERVAL_MS);
        e.tick(&mut panel, &clock, SAMPLE_ROWS);

        assert_eq!(e.zoom_count(), 1);
        assert_eq!(e.scale(), scale * Fx::from_f64(ZOOM_FACTOR));
        assert!(e.scale() < scale);
        assert_eq!(e.max_iterations(), START_ITERATIONS + 1);
        assert_eq!(e.last_zoom_ms, 110);

        // Second pass at the same instant: no further zoom
        e.tick(&mut panel, &clock, SAMPLE_ROWS);
        assert_eq!(e.zoom_count(), 1);
    }

    #[test]
    fn test_zoom_gate_across_clock_wrap() {
        let clock = MockClock::new(u32::MAX - 4);
        let mut e = engine(&clock);
        let mut panel = MockPanel::new();

        clock.advance(ZOOM_INTERVAL_MS);
        e.tick(&mut panel, &clock, SAMPLE_ROWS);

        assert_eq!(e.zoom_count(), 1);
    }

    #[test]
    fn test_scale_decreases_and_iterations_cap() {
        let clock = MockClock::new(0);
        let mut e = engine(&clock);
        let mut prev = e.scale();

        for _ in 0..200 {
            e.zoom_step();
            assert!(e.scale() < prev);
            assert!(e.scale().is_positive());
            prev = e.scale();
        }

        assert_eq!(e.max_iterations(), MAX_ITERATIONS);
    }

    #[test]
    fn test_scale_floor_at_one_lsb() {
        let clock = MockClock::new(0);
        let mut e = engine(&clock);
        e.scale = Fx::EPSILON;
        e.max_iterations = 100;

        e.zoom_step();

        assert_eq!(e.scale(), Fx::EPSILON);
        assert_eq!(e.max_iterations(), 101);
    }

    #[test]
    fn test_init_resets_after_zooming() {
        let clock = MockClock::new(0);
        let mut e = engine(&clock);
        for _ in 0..10 {
            e.zoom_step();
        }
        e.cursor = 42;

        clock.advance(1000);
        e.init(&clock);

        assert_eq!(e.scale(), Fx::from_f64(0.010));
        assert_eq!(e.max_iterations(), START_ITERATIONS);
        assert_eq!(e.scan_cursor(), 0);
        assert_eq!(e.zoom_count(), 0);
        assert_eq!(e.last_zoom_ms, 1000);
    }
}
