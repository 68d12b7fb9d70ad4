//! Minimal TOML parser for widget configuration
//!
//! Handles only the subset the widget needs, not the full TOML language.
//!
//! Supported features:
//! - [section] headers
//! - Key = value pairs (string, integer, boolean)
//! - Comments (# ...), whole-line and trailing
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings, escapes
//! - Dotted keys and nested sections

use crate::color::Rgb565;

use super::types::{
    WidgetConfig, MAX_BALL_RADIUS, MAX_LINES_PER_TICK, TZ_OFFSET_RANGE,
};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Key not recognised in its section
    UnknownKey,
    /// Line is neither a header nor `key = value`
    InvalidLine,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Ball,
    Mandelbrot,
    Timing,
    Clock,
    Display,
    Theme,
}

/// Parse TOML configuration into a [`WidgetConfig`]
///
/// Keys that are not present keep their default values.
pub fn parse_config(input: &str) -> Result<WidgetConfig, ParseError> {
    let mut config = WidgetConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = strip_comment(line);
            if !header.ends_with(']') {
                return Err(ParseError::InvalidSection);
            }
            section = parse_section_header(&header[1..header.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "ball" => Ok(Section::Ball),
        "mandelbrot" => Ok(Section::Mandelbrot),
        "timing" => Ok(Section::Timing),
        "clock" => Ok(Section::Clock),
        "display" => Ok(Section::Display),
        "theme" => Ok(Section::Theme),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Drop a trailing `# comment` that is not inside a string
fn strip_comment(text: &str) -> &str {
    let mut in_string = false;
    for (i, c) in text.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return text[..i].trim(),
            _ => {}
        }
    }
    text
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ParseError::InvalidValue)
    }
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    strip_underscores(value)
        .parse()
        .map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Colors are strings: `"#rrggbb"` or `"0xNNNN"`
fn parse_color(value: &str) -> Result<Rgb565, ParseError> {
    Rgb565::parse_hex(parse_string(value)?).ok_or(ParseError::InvalidValue)
}

fn parse_positive(value: &str) -> Result<u32, ParseError> {
    match parse_int(value)? {
        0 => Err(ParseError::InvalidValue),
        v => Ok(v),
    }
}

/// TOML allows `_` between digits (`62_500_000`)
///
/// Text too long for any supported integer comes back empty so the parse
/// fails.
fn strip_underscores(value: &str) -> heapless::String<24> {
    let mut out = heapless::String::new();
    for c in value.chars().filter(|&c| c != '_') {
        if out.push(c).is_err() {
            out.clear();
            break;
        }
    }
    out
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut WidgetConfig,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Ball, "radius") => {
            let r: u8 = parse_int(value)?;
            if r == 0 || r > MAX_BALL_RADIUS {
                return Err(ParseError::InvalidValue);
            }
            config.ball.radius = r;
        }
        (Section::Ball, "velocity_x") => config.ball.velocity_x = parse_int(value)?,
        (Section::Ball, "velocity_y") => config.ball.velocity_y = parse_int(value)?,
        (Section::Ball, "start_color") => config.ball.start_color = parse_color(value)?,

        (Section::Mandelbrot, "lines_per_tick") => {
            let n: u16 = parse_int(value)?;
            if n == 0 || n > MAX_LINES_PER_TICK {
                return Err(ParseError::InvalidValue);
            }
            config.mandelbrot.lines_per_tick = n;
        }

        (Section::Timing, "frame_interval_ms") => {
            config.timing.frame_interval_ms = parse_positive(value)?
        }
        (Section::Timing, "clock_refresh_ms") => {
            config.timing.clock_refresh_ms = parse_positive(value)?
        }
        (Section::Timing, "debounce_ms") => config.timing.debounce_ms = parse_int(value)?,

        (Section::Clock, "tz_offset_hours") => {
            let tz: i8 = parse_int(value)?;
            if !TZ_OFFSET_RANGE.contains(&tz) {
                return Err(ParseError::InvalidValue);
            }
            config.clock.tz_offset_hours = tz;
        }
        (Section::Clock, "sync_baud_rate") => config.clock.sync_baud_rate = parse_positive(value)?,

        (Section::Display, "spi_frequency_hz") => {
            config.display.spi_frequency_hz = parse_positive(value)?
        }
        (Section::Display, "backlight") => config.display.backlight = parse_bool(value)?,

        (Section::Theme, "background") => config.theme.background = parse_color(value)?,
        (Section::Theme, "border") => config.theme.border = parse_color(value)?,
        (Section::Theme, "text") => config.theme.text = parse_color(value)?,

        _ => return Err(ParseError::UnknownKey),
    }

    Ok(())
}
