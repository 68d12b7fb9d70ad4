//! Board pin assignments
//!
//! Peripherals are claimed by field name in the firmware (`p.PIN_12`), so
//! these numbers are the single place that documents the wiring. The
//! firmware checks them once at boot.

use heapless::FnvIndexSet;

/// Number of GPIO pins on RP2040
pub const GPIO_COUNT: u8 = 30;

/// Error when validating a pinout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin assigned to two functions
    AlreadyTaken(u8),
}

/// GPIO numbers for every function the widget uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pinout {
    /// Buttons A, B, X, Y (active low)
    pub buttons: [u8; 4],
    /// SPI0 clock
    pub spi_sck: u8,
    /// SPI0 data out
    pub spi_mosi: u8,
    /// Panel chip select
    pub lcd_cs: u8,
    /// Panel data/command select
    pub lcd_dc: u8,
    /// Panel backlight enable
    pub lcd_backlight: u8,
    /// UART0 TX (time sync replies)
    pub uart_tx: u8,
    /// UART0 RX (time sync commands)
    pub uart_rx: u8,
}

/// Pimoroni Pico Display Pack 2.0 on a Raspberry Pi Pico
pub const PICO_DISPLAY_2: Pinout = Pinout {
    buttons: [12, 13, 14, 15],
    spi_sck: 18,
    spi_mosi: 19,
    lcd_cs: 17,
    lcd_dc: 16,
    lcd_backlight: 20,
    uart_tx: 0,
    uart_rx: 1,
};

impl Pinout {
    /// Check every pin is in range and used once
    pub fn validate(&self) -> Result<(), PinError> {
        let mut alloc = GpioAllocator::new();
        for pin in self.buttons {
            alloc.allocate(pin)?;
        }
        for pin in [
            self.spi_sck,
            self.spi_mosi,
            self.lcd_cs,
            self.lcd_dc,
            self.lcd_backlight,
            self.uart_tx,
            self.uart_rx,
        ] {
            alloc.allocate(pin)?;
        }
        Ok(())
    }
}

/// Tracks which GPIO pins are in use to catch conflicts
pub struct GpioAllocator {
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Mark `pin` as used
    pub fn allocate(&mut self, pin: u8) -> Result<(), PinError> {
        if pin >= GPIO_COUNT {
            return Err(PinError::InvalidPin(pin));
        }
        match self.allocated.insert(pin) {
            Ok(true) => Ok(()),
            Ok(false) => Err(PinError::AlreadyTaken(pin)),
            // Capacity exceeds GPIO_COUNT, so this cannot happen
            Err(_) => Err(PinError::InvalidPin(pin)),
        }
    }

    pub fn is_allocated(&self, pin: u8) -> bool {
        self.allocated.contains(&pin)
    }

    pub fn allocated_count(&self) -> usize {
        self.allocated.len()
    }
}
