//! Configuration type definitions

use crate::color::Rgb565;
use crate::fractal::SAMPLE_ROWS;
use crate::geometry::MAX_RADIUS;
use crate::pages::debounce::DEFAULT_DEBOUNCE_MS;
use crate::pages::scheduler::{DEFAULT_CLOCK_REFRESH_MS, DEFAULT_FRAME_INTERVAL_MS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest accepted ball radius
pub const MAX_BALL_RADIUS: u8 = MAX_RADIUS as u8;

/// Largest accepted Mandelbrot rows per tick (one full pass)
pub const MAX_LINES_PER_TICK: u16 = SAMPLE_ROWS;

/// Accepted UTC offsets in hours
pub const TZ_OFFSET_RANGE: core::ops::RangeInclusive<i8> = -12..=14;

/// Bouncing ball page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BallConfig {
    /// Radius in pixels (1..=32)
    pub radius: u8,
    /// Pixels per tick, horizontal
    pub velocity_x: i8,
    /// Pixels per tick, vertical
    pub velocity_y: i8,
    /// Ball color on page entry
    pub start_color: Rgb565,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 12,
            velocity_x: 2,
            velocity_y: 2,
            start_color: Rgb565::CYAN,
        }
    }
}

/// Mandelbrot page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MandelbrotConfig {
    /// Sample rows rendered per frame tick
    pub lines_per_tick: u16,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self { lines_per_tick: 32 }
    }
}

/// Cadences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Animation frame period
    pub frame_interval_ms: u32,
    /// Clock page redraw period
    pub clock_refresh_ms: u32,
    /// Minimum time between reported presses of one button
    pub debounce_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            clock_refresh_ms: DEFAULT_CLOCK_REFRESH_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Wall clock and time sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    /// Fixed offset from UTC in hours
    pub tz_offset_hours: i8,
    /// Serial link baud rate for time sync
    pub sync_baud_rate: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tz_offset_hours: -5,
            sync_baud_rate: 115_200,
        }
    }
}

/// Panel hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayHwConfig {
    /// SPI clock in Hz
    pub spi_frequency_hz: u32,
    /// Turn the backlight on at boot
    pub backlight: bool,
}

impl Default for DisplayHwConfig {
    fn default() -> Self {
        Self {
            spi_frequency_hz: 62_500_000,
            backlight: true,
        }
    }
}

/// Page colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThemeConfig {
    pub background: Rgb565,
    /// Frame around every page
    pub border: Rgb565,
    /// Clock and quote text
    pub text: Rgb565,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: Rgb565::BLACK,
            border: Rgb565::RED,
            text: Rgb565::RED,
        }
    }
}

/// Complete widget configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WidgetConfig {
    pub ball: BallConfig,
    pub mandelbrot: MandelbrotConfig,
    pub timing: TimingConfig,
    pub clock: ClockConfig,
    pub display: DisplayHwConfig,
    pub theme: ThemeConfig,
}
