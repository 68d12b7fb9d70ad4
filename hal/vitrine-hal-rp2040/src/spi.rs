//! Blocking SPI master implementing [`vitrine_hal::SpiBus`]

use embassy_rp::spi::{self, Blocking, Instance, Spi};
use vitrine_hal::spi::{Phase, Polarity};
use vitrine_hal::{SpiBus, SpiConfig};

/// Transmit-only SPI driven with blocking writes
///
/// Writes return after the last byte has left the FIFO, so chip select can
/// be released straight after.
pub struct RpSpi<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
}

impl<'d, T: Instance> RpSpi<'d, T> {
    pub fn new(spi: Spi<'d, T, Blocking>) -> Self {
        Self { spi }
    }
}

impl<T: Instance> SpiBus for RpSpi<'_, T> {
    type Error = spi::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.spi.blocking_write(data)
    }
}

/// Translate a chip-agnostic [`SpiConfig`] into the embassy-rp form
pub fn rp_config(config: &SpiConfig) -> spi::Config {
    let (polarity, phase): (Polarity, Phase) = config.mode.into();

    let mut rp = spi::Config::default();
    rp.frequency = config.frequency;
    rp.polarity = match polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    rp.phase = match phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    rp
}
