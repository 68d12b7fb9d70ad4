//! Iteration count to color mapping

use crate::color::Rgb565;

pub const PALETTE_LEN: usize = 256;

/// 256-entry gradient, index 0 black
#[derive(Clone)]
pub struct Palette {
    entries: [Rgb565; PALETTE_LEN],
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    pub const fn new() -> Self {
        let mut entries = [Rgb565::BLACK; PALETTE_LEN];
        let mut i = 1;
        while i < PALETTE_LEN {
            let v = i as u8;
            let g = ((i * 5) ^ (i << 1)) as u8;
            entries[i] = Rgb565::from_rgb(v, g, 255 - v);
            i += 1;
        }
        Self { entries }
    }

    pub fn entry(&self, index: u8) -> Rgb565 {
        self.entries[index as usize]
    }

    /// Color for a point that took `iterations` of at most `max_iter`
    ///
    /// Points that never escaped are black.
    pub fn color_for(&self, iterations: u16, max_iter: u16) -> Rgb565 {
        if max_iter == 0 || iterations >= max_iter {
            return Rgb565::BLACK;
        }
        let index = iterations as u32 * 255 / max_iter as u32;
        self.entries[index as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_is_black() {
        assert_eq!(Palette::new().entry(0), Rgb565::BLACK);
    }

    #[test]
    fn test_entry_formula() {
        let p = Palette::new();
        // i = 1: r 1, g (5 ^ 2) = 7, b 254
        assert_eq!(p.entry(1), Rgb565::from_rgb(1, 7, 254));
        // i = 255: g = (1275 ^ 510) truncated to 8 bits
        let g = ((255usize * 5) ^ (255usize << 1)) as u8;
        assert_eq!(p.entry(255), Rgb565::from_rgb(255, g, 0));
    }

    #[test]
    fn test_captive_points_are_black() {
        let p = Palette::new();
        assert_eq!(p.color_for(64, 64), Rgb565::BLACK);
        assert_eq!(p.color_for(200, 140), Rgb565::BLACK);
        assert_eq!(p.color_for(0, 0), Rgb565::BLACK);
    }

    #[test]
    fn test_index_scales_with_cap() {
        let p = Palette::new();
        assert_eq!(p.color_for(32, 64), p.entry(127));
        assert_eq!(p.color_for(63, 64), p.entry(251));
        assert_eq!(p.color_for(0, 64), Rgb565::BLACK);
        assert_eq!(p.color_for(70, 140), p.entry(127));
    }
}
