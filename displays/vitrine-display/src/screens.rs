//! Text pages: clock and quote
//!
//! All functions take any `embedded-graphics` target so they can be
//! exercised against a frame buffer on the host.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565 as EgRgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use vitrine_core::quotes;
use vitrine_core::time::{format_date, format_time, DateTime};
use vitrine_core::traits::{SCREEN_HEIGHT, SCREEN_WIDTH};
use vitrine_core::Rgb565;

use crate::canvas::to_eg;

/// Corner radius of the page frame
pub const FRAME_RADIUS: u32 = 4;

/// Characters per quote line (FONT_10X20 inside the frame)
pub const QUOTE_COLUMNS: usize = 28;

/// Vertical distance between quote lines
pub const QUOTE_LINE_HEIGHT: i32 = 22;

const CENTER_X: i32 = SCREEN_WIDTH as i32 / 2;
const CENTER_Y: i32 = SCREEN_HEIGHT as i32 / 2;
const TIME_Y: i32 = 100;
const DATE_Y: i32 = 140;

fn text_style(font: &'static MonoFont<'static>, text: Rgb565, bg: Rgb565) -> MonoTextStyle<'static, EgRgb565> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(to_eg(text))
        .background_color(to_eg(bg))
        .build()
}

fn centered<D>(target: &mut D, text: &str, y: i32, style: MonoTextStyle<'_, EgRgb565>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = EgRgb565>,
{
    let layout = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style(text, Point::new(CENTER_X, y), style, layout).draw(target)?;
    Ok(())
}

/// Clear to `bg` and draw the rounded 1-pixel frame in `border`
pub fn draw_frame<D>(target: &mut D, bg: Rgb565, border: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = EgRgb565>,
{
    target.clear(to_eg(bg))?;

    let style = PrimitiveStyleBuilder::new()
        .stroke_color(to_eg(border))
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    RoundedRectangle::with_equal_corners(
        Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)),
        Size::new(FRAME_RADIUS, FRAME_RADIUS),
    )
    .into_styled(style)
    .draw(target)
}

/// Draw time and date; glyph cells are painted with `bg` so a refresh
/// overwrites the previous second without clearing
pub fn draw_clock<D>(target: &mut D, now: &DateTime, text: Rgb565, bg: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = EgRgb565>,
{
    let style = text_style(&FONT_10X20, text, bg);
    centered(target, &format_time(now), TIME_Y, style)?;
    centered(target, &format_date(now), DATE_Y, style)
}

/// Shown on the clock page until the host has sent the time
pub fn draw_clock_pending<D>(target: &mut D, text: Rgb565, bg: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = EgRgb565>,
{
    centered(target, "--:--:--", TIME_Y, text_style(&FONT_10X20, text, bg))?;
    centered(target, "send \"T <unix time>\" over serial", DATE_Y, text_style(&FONT_6X10, text, bg))
}

/// Word-wrapped quote, vertically centered
pub fn draw_quote<D>(target: &mut D, quote: &str, text: Rgb565, bg: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = EgRgb565>,
{
    let lines = quotes::wrap(quote, QUOTE_COLUMNS);
    let style = text_style(&FONT_10X20, text, bg);
    let first = CENTER_Y - (lines.len() as i32 - 1) * QUOTE_LINE_HEIGHT / 2;

    for (i, line) in lines.iter().enumerate() {
        centered(target, line, first + i as i32 * QUOTE_LINE_HEIGHT, style)?;
    }
    Ok(())
}
