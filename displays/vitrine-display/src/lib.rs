//! Panel driver and screens for the display widget
//!
//! This crate provides:
//! - `St7789` driver implementing the core `PixelSink` transport over any
//!   `vitrine-hal` SPI bus and pins
//! - `Canvas`, an `embedded-graphics` draw target over any `PixelSink`
//! - Text screens for the clock and quote pages
//!
//! The animated pages draw straight through `PixelSink`; only the text
//! pages go through `embedded-graphics`.

#![cfg_attr(not(test), no_std)]

pub mod canvas;
pub mod screens;
pub mod st7789;

#[cfg(test)]
pub(crate) mod mock;

// Re-export key types
pub use canvas::Canvas;
pub use st7789::{Backlight, DisplayError, St7789};
