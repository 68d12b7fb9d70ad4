//! RP2040-specific HAL for the display widget firmware
//!
//! This crate provides RP2040 implementations of the shared `vitrine-hal`
//! traits, plus the board pinout:
//!
//! - GPIO input/output wrappers over `embassy-rp`
//! - Blocking transmit-only SPI master for the panel
//! - Pin assignments for the Pico Display Pack 2.0 and conflict checking

#![no_std]

pub mod gpio;
pub mod pins;
pub mod spi;

pub use gpio::{RpInput, RpOutput};
pub use pins::{Pinout, PinError, PICO_DISPLAY_2};
pub use spi::RpSpi;

// Re-export shared traits from vitrine-hal for convenience
pub use vitrine_hal::{InputPin, OutputPin, SpiBus, SpiConfig};
