//! Board-agnostic core logic for the display widget firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Drawing transport and clock traits
//! - Q4.28 fixed-point arithmetic
//! - Circle span rasterization and the bouncing ball simulator
//! - Progressive Mandelbrot zoom renderer
//! - Page navigation, button debouncing and tick cadence
//! - Serial time sync and wall-clock formatting
//! - Quote table and word wrapping
//! - Configuration types and the TOML subset parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod ball;
pub mod color;
pub mod config;
pub mod fixed;
pub mod fractal;
pub mod geometry;
pub mod pages;
pub mod quotes;
pub mod time;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use color::Rgb565;
pub use fixed::Fx;
pub use traits::{Clock, PixelSink};
