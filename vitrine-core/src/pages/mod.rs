//! Page navigation and tick cadence
//!
//! Four buttons select four pages. Pressing a button always re-enters its
//! page, so pressing the active page's button restarts it.

pub mod debounce;
pub mod scheduler;

pub use debounce::Debouncer;
pub use scheduler::{Due, PageScheduler};

/// Screen pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    /// Date and time, refreshed once a second
    Clock,
    /// A random quote, drawn once on entry
    Quote,
    /// Bouncing ball animation
    Ball,
    /// Progressive Mandelbrot zoom
    Mandelbrot,
}

impl Page {
    /// Page selected by `button`
    pub const fn for_button(button: Button) -> Self {
        match button {
            Button::A => Page::Clock,
            Button::B => Page::Quote,
            Button::X => Page::Ball,
            Button::Y => Page::Mandelbrot,
        }
    }

    /// Whether the page redraws on the frame cadence
    pub const fn is_animated(&self) -> bool {
        matches!(self, Page::Ball | Page::Mandelbrot)
    }
}

/// Front-panel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    A,
    B,
    X,
    Y,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::A, Button::B, Button::X, Button::Y];

    /// Position in [`Button::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}
