//! Pixel transport trait for the RGB565 panel

use crate::color::Rgb565;

/// Panel width in pixels
pub const SCREEN_WIDTH: u16 = 320;

/// Panel height in pixels
pub const SCREEN_HEIGHT: u16 = 240;

/// Width of the frame drawn around the animation pages
pub const BORDER: u16 = 1;

/// Words pushed per call when streaming a solid color
const FILL_CHUNK: usize = 64;

/// Windowed pixel transport
///
/// Mirrors how the panel controller is fed: select a rectangular window,
/// then stream pixels into it row-major. Pixels passed to
/// [`PixelSink::push_pixels`] are already byte-swapped for the wire
/// (see [`Rgb565::swapped`]). Consecutive pushes continue in the same
/// window.
///
/// The engines treat drawing as fire-and-forget, so these methods do not
/// return errors. Implementations that can fail keep their own fault state.
pub trait PixelSink {
    /// Select the inclusive target region `(x0, y0)..=(x1, y1)`
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16);

    /// Append pre-swapped pixels to the current window
    fn push_pixels(&mut self, pixels: &[u16]);

    /// Fill the whole surface with one color
    fn fill_screen(&mut self, color: Rgb565);

    /// Write one row of pre-swapped pixels starting at `(x, y)`
    fn push_row(&mut self, x: u16, y: u16, pixels: &[u16]) {
        if pixels.is_empty() {
            return;
        }
        let x1 = x + pixels.len() as u16 - 1;
        self.set_window(x, y, x1, y);
        self.push_pixels(pixels);
    }

    /// Fill a `width` x `height` rectangle with a solid color
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb565) {
        if width == 0 || height == 0 {
            return;
        }
        self.set_window(x, y, x + width - 1, y + height - 1);

        let chunk = [color.swapped(); FILL_CHUNK];
        let mut remaining = width as usize * height as usize;
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK);
            self.push_pixels(&chunk[..n]);
            remaining -= n;
        }
    }
}
