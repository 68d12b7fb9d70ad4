//! Filled-circle rasterization by horizontal spans
//!
//! A circle of radius `r` is drawn as `2r + 1` one-row windows. The
//! half-chord for each vertical offset is looked up in a table computed
//! once per radius.

use crate::color::Rgb565;
use crate::traits::{PixelSink, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Largest radius the span buffer can hold
pub const MAX_RADIUS: i32 = 32;

const TABLE_LEN: usize = MAX_RADIUS as usize + 1;
const SPAN_LEN: usize = 2 * MAX_RADIUS as usize + 1;

/// Half-width table and span buffer for one radius at a time
#[derive(Clone)]
pub struct CircleSpans {
    /// `half_width[dy] = floor(sqrt(r² - dy²))`
    half_width: [u8; TABLE_LEN],
    /// Radius the table currently describes
    radius: Option<i32>,
    /// Solid-color pixels for one span, pre-swapped
    span: [u16; SPAN_LEN],
}

impl Default for CircleSpans {
    fn default() -> Self {
        Self::new()
    }
}

impl CircleSpans {
    /// Create an empty cache (no radius computed yet)
    pub const fn new() -> Self {
        Self {
            half_width: [0; TABLE_LEN],
            radius: None,
            span: [0; SPAN_LEN],
        }
    }

    /// Radius the table was last computed for
    pub fn radius(&self) -> Option<i32> {
        self.radius
    }

    /// Fill the half-width table for `radius`
    ///
    /// No-op when the table already describes this radius. Out-of-range
    /// values are clamped to `0..=MAX_RADIUS`.
    pub fn precompute(&mut self, radius: i32) {
        let r = radius.clamp(0, MAX_RADIUS);
        if self.radius == Some(r) {
            return;
        }
        self.radius = Some(r);

        let rr = r * r;
        for dy in 0..=r {
            let mut x = r;
            while x > 0 && x * x + dy * dy > rr {
                x -= 1;
            }
            self.half_width[dy as usize] = x as u8;
        }
    }

    /// Half-chord at vertical offset `dy` (sign ignored)
    ///
    /// Offsets beyond the computed radius have no chord and return 0.
    pub fn half_width(&self, dy: i32) -> i32 {
        let ay = dy.unsigned_abs() as usize;
        match self.radius {
            Some(r) if ay <= r as usize => self.half_width[ay] as i32,
            _ => 0,
        }
    }

    /// Draw a filled circle centered on `(cx, cy)`
    ///
    /// Rows above or below the panel are skipped and spans are clipped to
    /// the panel's columns; nothing is reported for the clipped parts.
    pub fn fill<S: PixelSink>(&mut self, sink: &mut S, cx: i32, cy: i32, radius: i32, color: Rgb565) {
        self.precompute(radius);
        let r = self.radius.unwrap_or(0);

        let pix = color.swapped();
        let width = (2 * r + 1) as usize;
        self.span[..width].iter_mut().for_each(|p| *p = pix);

        let max_x = SCREEN_WIDTH as i32 - 1;
        for dy in -r..=r {
            let y = cy + dy;
            if y < 0 || y >= SCREEN_HEIGHT as i32 {
                continue;
            }

            let dx = self.half_width[dy.unsigned_abs() as usize] as i32;
            let x0 = (cx - dx).max(0);
            let x1 = (cx + dx).min(max_x);
            let len = x1 - x0 + 1;
            if len <= 0 {
                continue;
            }

            sink.set_window(x0 as u16, y as u16, x1 as u16, y as u16);
            sink.push_pixels(&self.span[..len as usize]);
        }
    }
}

/// Draw the one-pixel frame around the panel edge
pub fn draw_border<S: PixelSink>(sink: &mut S, color: Rgb565) {
    let (w, h) = (SCREEN_WIDTH, SCREEN_HEIGHT);
    sink.fill_rect(0, 0, w, 1, color);
    sink.fill_rect(0, h - 1, w, 1, color);
    sink.fill_rect(0, 0, 1, h, color);
    sink.fill_rect(w - 1, 0, 1, h, color);
}
