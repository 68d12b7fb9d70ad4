//! `embedded-graphics` draw target over a [`PixelSink`]

use core::convert::Infallible;

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565 as EgRgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use vitrine_core::traits::{PixelSink, SCREEN_HEIGHT, SCREEN_WIDTH};
use vitrine_core::Rgb565;

/// Pixels buffered per push in `fill_contiguous`
const STREAM_CHUNK: usize = 64;

/// Convert a core color to an `embedded-graphics` color
pub fn to_eg(color: Rgb565) -> EgRgb565 {
    EgRgb565::from(RawU16::new(color.raw()))
}

/// Convert an `embedded-graphics` color to a core color
pub fn from_eg(color: EgRgb565) -> Rgb565 {
    Rgb565(color.into_storage())
}

/// Borrowing adapter that lets `embedded-graphics` draw on the panel
pub struct Canvas<'a, S: PixelSink> {
    sink: &'a mut S,
}

impl<'a, S: PixelSink> Canvas<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }

    /// Window coordinates of `area` if it lies fully on the panel
    fn window(&self, area: &Rectangle) -> Option<(u16, u16, u16, u16)> {
        if area.is_zero_sized() || area.intersection(&self.bounding_box()) != *area {
            return None;
        }
        let br = area.bottom_right()?;
        Some((
            area.top_left.x as u16,
            area.top_left.y as u16,
            br.x as u16,
            br.y as u16,
        ))
    }
}

impl<S: PixelSink> OriginDimensions for Canvas<'_, S> {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
    }
}

impl<S: PixelSink> DrawTarget for Canvas<'_, S> {
    type Color = EgRgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                let (x, y) = (point.x as u16, point.y as u16);
                self.sink.push_row(x, y, &[from_eg(color).swapped()]);
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let Some((x0, y0, x1, y1)) = self.window(area) else {
            // Partly off-panel: clip pixel by pixel
            let pixels = area
                .points()
                .zip(colors)
                .map(|(point, color)| Pixel(point, color));
            return self.draw_iter(pixels);
        };

        self.sink.set_window(x0, y0, x1, y1);
        let total = area.size.width as usize * area.size.height as usize;
        let mut buf = [0u16; STREAM_CHUNK];
        let mut len = 0;
        for color in colors.into_iter().take(total) {
            buf[len] = from_eg(color).swapped();
            len += 1;
            if len == STREAM_CHUNK {
                self.sink.push_pixels(&buf);
                len = 0;
            }
        }
        if len > 0 {
            self.sink.push_pixels(&buf[..len]);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if !area.is_zero_sized() {
            self.sink.fill_rect(
                area.top_left.x as u16,
                area.top_left.y as u16,
                area.size.width as u16,
                area.size.height as u16,
                from_eg(color),
            );
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.sink.fill_screen(from_eg(color));
        Ok(())
    }
}
