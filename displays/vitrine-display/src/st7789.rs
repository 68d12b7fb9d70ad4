//! ST7789 TFT driver
//!
//! Driver for 320x240 ST7789 panels over a write-only 4-wire SPI bus
//! (clock, data, chip select, data/command select). Only what the widget
//! needs is implemented: init, windowed RAM writes, backlight.

use embedded_hal::delay::DelayNs;
use vitrine_core::traits::{PixelSink, SCREEN_HEIGHT, SCREEN_WIDTH};
use vitrine_core::Rgb565;
use vitrine_hal::{OutputPin, SpiBus};

/// ST7789 commands
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVON: u8 = 0x21;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// MADCTL: column order flipped, rows and columns exchanged (landscape)
const MADCTL_LANDSCAPE: u8 = 0x60;

/// COLMOD: 65K colors, 16 bits per pixel
const COLMOD_RGB565: u8 = 0x55;

/// Pixels converted to bytes per SPI write
const CHUNK_PIXELS: usize = 64;

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI transfer failed
    Communication,
    /// Drawing attempted before `init`
    NotInitialized,
}

/// ST7789 driver
///
/// Drawing methods come from [`PixelSink`] and cannot fail from the
/// caller's side. A failed transfer is remembered and counted; check
/// [`St7789::fault`] to find out about it.
pub struct St7789<SPI, DC, CS> {
    spi: SPI,
    dc: DC,
    cs: CS,
    initialized: bool,
    last_error: Option<DisplayError>,
    failed_transfers: u32,
}

impl<SPI, DC, CS> St7789<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    /// Create a new driver; the panel is untouched until [`St7789::init`]
    pub fn new(spi: SPI, dc: DC, mut cs: CS) -> Self {
        cs.set_high();
        Self {
            spi,
            dc,
            cs,
            initialized: false,
            last_error: None,
            failed_transfers: 0,
        }
    }

    /// Reset and configure the panel, then switch it on
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DisplayError> {
        self.command(cmd::SWRESET, &[])?;
        delay.delay_ms(150);

        self.command(cmd::SLPOUT, &[])?;
        delay.delay_ms(120);

        self.command(cmd::COLMOD, &[COLMOD_RGB565])?;
        self.command(cmd::MADCTL, &[MADCTL_LANDSCAPE])?;
        // The panel's liquid crystal is normally-black; inversion gives true colors
        self.command(cmd::INVON, &[])?;
        self.command(cmd::NORON, &[])?;
        delay.delay_ms(10);

        self.command(cmd::DISPON, &[])?;
        delay.delay_ms(10);

        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Last transfer error and the number of failed transfers so far
    pub fn fault(&self) -> Option<(DisplayError, u32)> {
        self.last_error.map(|e| (e, self.failed_transfers))
    }

    /// Forget the recorded fault (the failure count is kept)
    pub fn clear_fault(&mut self) {
        self.last_error = None;
    }

    /// Give back the bus and pins
    pub fn release(self) -> (SPI, DC, CS) {
        (self.spi, self.dc, self.cs)
    }

    /// Send a command byte followed by its parameters
    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.cs.set_low();
        self.dc.set_low();
        let mut result = self.spi.write(&[command]);
        if result.is_ok() && !params.is_empty() {
            self.dc.set_high();
            result = self.spi.write(params);
        }
        self.cs.set_high();
        result.map_err(|_| DisplayError::Communication)
    }

    /// Stream pre-swapped pixels as RAM data
    fn write_pixels(&mut self, pixels: &[u16]) -> Result<(), DisplayError> {
        let mut bytes = [0u8; CHUNK_PIXELS * 2];

        self.cs.set_low();
        self.dc.set_high();
        let mut result = Ok(());
        for chunk in pixels.chunks(CHUNK_PIXELS) {
            for (dst, &px) in bytes.chunks_exact_mut(2).zip(chunk) {
                // Swapped words go out little-endian: high color byte first
                dst.copy_from_slice(&px.to_le_bytes());
            }
            result = self.spi.write(&bytes[..chunk.len() * 2]);
            if result.is_err() {
                break;
            }
        }
        self.cs.set_high();
        result.map_err(|_| DisplayError::Communication)
    }

    fn set_address_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.command(cmd::CASET, &[x0h, x0l, x1h, x1l])?;
        self.command(cmd::RASET, &[y0h, y0l, y1h, y1l])?;
        self.command(cmd::RAMWR, &[])
    }

    fn record(&mut self, result: Result<(), DisplayError>) {
        if let Err(e) = result {
            self.failed_transfers = self.failed_transfers.wrapping_add(1);
            if self.last_error.is_none() {
                #[cfg(feature = "defmt")]
                defmt::warn!("Display transfer failed: {}", e);
            }
            self.last_error = Some(e);
        }
    }

    fn check_ready(&mut self) -> bool {
        if !self.initialized {
            self.record(Err(DisplayError::NotInitialized));
        }
        self.initialized
    }
}

impl<SPI, DC, CS> PixelSink for St7789<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) {
        if self.check_ready() {
            let result = self.set_address_window(x0, y0, x1, y1);
            self.record(result);
        }
    }

    fn push_pixels(&mut self, pixels: &[u16]) {
        if self.check_ready() {
            let result = self.write_pixels(pixels);
            self.record(result);
        }
    }

    fn fill_screen(&mut self, color: Rgb565) {
        self.fill_rect(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT, color);
    }
}

/// Backlight enable line
pub struct Backlight<P> {
    pin: P,
}

impl<P: OutputPin> Backlight<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn set(&mut self, on: bool) {
        self.pin.set_state(on);
    }

    pub fn is_on(&self) -> bool {
        self.pin.is_set_high()
    }
}
