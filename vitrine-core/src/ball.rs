//! Bouncing ball page
//!
//! A single filled circle moves by its velocity every tick and reflects off
//! the inside of the one-pixel border. Each frame erases the old footprint
//! with the background color and draws the new one, so only two circles'
//! worth of pixels cross the bus per tick.

use crate::color::Rgb565;
use crate::geometry::{draw_border, CircleSpans, MAX_RADIUS};
use crate::traits::{PixelSink, BORDER, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Largest velocity component accepted by [`BallSim::init`], in pixels per tick
pub const MAX_SPEED: i32 = SCREEN_WIDTH as i32;

/// Colors visited on corner hits, in order
pub const CORNER_COLORS: [Rgb565; 7] = [
    Rgb565::RED,
    Rgb565::GREEN,
    Rgb565::BLUE,
    Rgb565::YELLOW,
    Rgb565::MAGENTA,
    Rgb565::CYAN,
    Rgb565::WHITE,
];

/// Color following `current` in [`CORNER_COLORS`]
///
/// A color outside the cycle restarts it at the first entry.
pub fn next_corner_color(current: Rgb565) -> Rgb565 {
    match CORNER_COLORS.iter().position(|&c| c == current) {
        Some(i) => CORNER_COLORS[(i + 1) % CORNER_COLORS.len()],
        None => CORNER_COLORS[0],
    }
}

/// Which walls were struck during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallHits {
    /// Left or right wall
    pub x: bool,
    /// Top or bottom wall
    pub y: bool,
}

impl WallHits {
    /// Both axes at once
    pub fn is_corner(&self) -> bool {
        self.x && self.y
    }
}

/// Ball position, motion and colors
pub struct BallSim {
    cx: i32,
    cy: i32,
    vx: i32,
    vy: i32,
    radius: i32,
    color: Rgb565,
    background: Rgb565,
    border: Rgb565,
    last_hit: WallHits,
    spans: CircleSpans,
}

impl Default for BallSim {
    fn default() -> Self {
        Self::new()
    }
}

impl BallSim {
    /// Create an idle ball; call [`BallSim::init`] on page entry
    pub const fn new() -> Self {
        Self {
            cx: SCREEN_WIDTH as i32 / 2,
            cy: SCREEN_HEIGHT as i32 / 2,
            vx: 0,
            vy: 0,
            radius: 1,
            color: Rgb565::WHITE,
            background: Rgb565::BLACK,
            border: Rgb565::BLACK,
            last_hit: WallHits { x: false, y: false },
            spans: CircleSpans::new(),
        }
    }

    /// Reset the page: clear, draw the border, draw the ball at the center
    ///
    /// `radius` is clamped to `1..=MAX_RADIUS` and each velocity component
    /// to `±MAX_SPEED`.
    #[allow(clippy::too_many_arguments)]
    pub fn init<S: PixelSink>(
        &mut self,
        sink: &mut S,
        radius: i32,
        vx: i32,
        vy: i32,
        background: Rgb565,
        border: Rgb565,
        start_color: Rgb565,
    ) {
        self.radius = radius.clamp(1, MAX_RADIUS);
        self.vx = vx.clamp(-MAX_SPEED, MAX_SPEED);
        self.vy = vy.clamp(-MAX_SPEED, MAX_SPEED);
        self.background = background;
        self.border = border;
        self.color = start_color;
        self.last_hit = WallHits::default();

        self.spans.precompute(self.radius);

        self.cx = SCREEN_WIDTH as i32 / 2;
        self.cy = SCREEN_HEIGHT as i32 / 2;

        sink.fill_screen(background);
        draw_border(sink, border);
        self.spans.fill(sink, self.cx, self.cy, self.radius, self.color);
    }

    /// Advance one frame
    pub fn tick<S: PixelSink>(&mut self, sink: &mut S) {
        let (min_x, max_x) = self.bounds(SCREEN_WIDTH);
        let (min_y, max_y) = self.bounds(SCREEN_HEIGHT);

        let (old_x, old_y) = (self.cx, self.cy);

        self.cx += self.vx;
        self.cy += self.vy;

        let (cx, vx, hit_x) = reflect(self.cx, self.vx, min_x, max_x);
        let (cy, vy, hit_y) = reflect(self.cy, self.vy, min_y, max_y);
        self.cx = cx;
        self.vx = vx;
        self.cy = cy;
        self.vy = vy;
        self.last_hit = WallHits { x: hit_x, y: hit_y };

        if self.last_hit.is_corner() {
            self.color = next_corner_color(self.color);
        }

        self.spans.fill(sink, old_x, old_y, self.radius, self.background);
        self.spans.fill(sink, self.cx, self.cy, self.radius, self.color);
    }

    /// Allowed range for the center on an axis of length `dim`
    fn bounds(&self, dim: u16) -> (i32, i32) {
        let border = BORDER as i32;
        (border + self.radius, dim as i32 - 1 - border - self.radius)
    }

    pub fn center(&self) -> (i32, i32) {
        (self.cx, self.cy)
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.vx, self.vy)
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn color(&self) -> Rgb565 {
        self.color
    }

    /// Walls struck by the most recent tick
    pub fn last_hit(&self) -> WallHits {
        self.last_hit
    }
}

/// Clamp one axis into `[min, max]`, flipping velocity on contact
fn reflect(pos: i32, vel: i32, min: i32, max: i32) -> (i32, i32, bool) {
    if pos <= min {
        (min, -vel, true)
    } else if pos >= max {
        (max, -vel, true)
    } else {
        (pos, vel, false)
    }
}
