//! Progressive Mandelbrot zoom
//!
//! The engine renders a handful of rows per tick at half vertical
//! resolution, doubling each computed row on the panel. When the scan
//! cursor wraps, the view contracts toward a fixed point on the main
//! spiral and the iteration cap grows.

pub mod engine;
pub mod escape;
pub mod palette;
pub mod scalar;

pub use engine::{MandelbrotEngine, ROW_PIXELS, SAMPLE_ROWS};
pub use escape::{classify, escape_time, in_cardioid_or_bulb, Classification};
pub use palette::Palette;
pub use scalar::Scalar;
