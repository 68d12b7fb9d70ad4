//! Vitrine Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. The display driver and the button reader are
//! written against these traits so they can be exercised on the host with
//! mock pins and buses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (vitrine-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ vitrine-hal   │◄──────│ vitrine-      │
//! │ (traits)      │       │ display       │
//! └───────────────┘       └───────────────┘
//!         ▲
//!         │
//! ┌───────────────┐
//! │ vitrine-hal-  │
//! │    rp2040     │
//! └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`spi::SpiBus`] - Write-only SPI master used by the panel

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use spi::{SpiBus, SpiConfig};
