//! Hardware abstraction traits
//!
//! These traits define the interface between the animation engines
//! and the board: a pixel transport and a millisecond clock.

pub mod clock;
pub mod display;

pub use clock::{elapsed_ms, Clock};
pub use display::{PixelSink, BORDER, SCREEN_HEIGHT, SCREEN_WIDTH};
