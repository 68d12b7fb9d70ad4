//! Vitrine - Desk Display Widget Firmware
//!
//! Main firmware binary for an RP2040 with a 320x240 ST7789 panel and
//! four buttons. A selects the clock, B a quote, X the bouncing ball and
//! Y the Mandelbrot zoom. The host sets the clock over UART0.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::Spi;
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUart, Config as UartConfig};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use vitrine_display::{Backlight, St7789};
use vitrine_hal_rp2040::spi::rp_config;
use vitrine_hal_rp2040::{RpInput, RpOutput, RpSpi, SpiConfig, PICO_DISPLAY_2};

use crate::controller::Widget;

mod channels;
mod config;
mod controller;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 128]> = StaticCell::new();

static WIDGET: StaticCell<Widget> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Vitrine firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // The peripherals below are claimed by field name; keep them in step
    if let Err(e) = PICO_DISPLAY_2.validate() {
        error!("Pinout invalid: {}", e);
    }

    // Panel on SPI0: SCK=GPIO18, MOSI=GPIO19, CS=GPIO17, DC=GPIO16, BL=GPIO20
    let spi_config = SpiConfig {
        frequency: config.display.spi_frequency_hz,
        ..Default::default()
    };
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, rp_config(&spi_config));
    let dc = RpOutput::new(Output::new(p.PIN_16, Level::Low));
    let cs = RpOutput::new(Output::new(p.PIN_17, Level::High));
    let backlight = Backlight::new(RpOutput::new(Output::new(p.PIN_20, Level::Low)));

    let mut panel = St7789::new(RpSpi::new(spi), dc, cs);
    match panel.init(&mut Delay) {
        Ok(()) => info!("Display initialized at {} Hz", spi_config.frequency),
        // Keep running; later transfer faults are logged by the controller
        Err(e) => error!("Display init failed: {}", e),
    }

    // Buttons A, B, X, Y: active low
    let buttons = [
        RpInput::new(Input::new(p.PIN_12, Pull::Up)),
        RpInput::new(Input::new(p.PIN_13, Pull::Up)),
        RpInput::new(Input::new(p.PIN_14, Pull::Up)),
        RpInput::new(Input::new(p.PIN_15, Pull::Up)),
    ];

    // Time sync on UART0: TX=GPIO0, RX=GPIO1
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config.clock.sync_baud_rate;

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 128]);
    let uart = BufferedUart::new(p.UART0, p.PIN_0, p.PIN_1, Irqs, tx_buf, rx_buf, uart_config);
    let (tx, rx) = uart.split();
    info!("UART initialized at {} baud", config.clock.sync_baud_rate);

    // Ticks must come at least as often as the fastest cadence
    let tick_ms = config
        .timing
        .frame_interval_ms
        .min(config.timing.clock_refresh_ms);
    let debounce_ms = config.timing.debounce_ms;

    let widget = WIDGET.init(Widget::new(panel, backlight, config));

    // Task constructors fail only if the task is already running
    spawner.spawn(tasks::tick_task(tick_ms).unwrap());
    spawner.spawn(tasks::buttons_task(buttons, debounce_ms).unwrap());
    spawner.spawn(tasks::time_sync_task(rx, tx).unwrap());
    spawner.spawn(tasks::controller_task(widget).unwrap());

    info!("All tasks spawned, firmware running");
}
