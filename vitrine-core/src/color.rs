//! RGB565 color values
//!
//! Colors are kept in native 16-bit order everywhere in the core. The panel
//! wants the high byte first on the wire, so pixel buffers handed to a
//! [`PixelSink`](crate::traits::PixelSink) hold [`Rgb565::swapped`] words.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Packed 5-6-5 color in native byte order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const MAGENTA: Self = Self(0xF81F);
    pub const CYAN: Self = Self(0x07FF);
    pub const WHITE: Self = Self(0xFFFF);

    /// Pack 8-bit channels, dropping the low bits of each
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3))
    }

    /// Raw native value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Byte-swapped value, ready for the panel's transfer buffer
    pub const fn swapped(self) -> u16 {
        self.0.swap_bytes()
    }

    /// Parse `#rrggbb` or a raw `0xNNNN` RGB565 literal
    pub fn parse_hex(text: &str) -> Option<Self> {
        let text = text.trim();

        if let Some(hex) = text.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return None;
            }
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Self::from_rgb(r, g, b));
        }

        let hex = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))?;
        if hex.is_empty() || hex.len() > 4 {
            return None;
        }
        u16::from_str_radix(hex, 16).ok().map(Self)
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}
