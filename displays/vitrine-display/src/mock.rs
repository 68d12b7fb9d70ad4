//! Test doubles: a recording SPI bus with its pins, a delay and a frame
//! buffer

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use vitrine_core::traits::{PixelSink, SCREEN_HEIGHT, SCREEN_WIDTH};
use vitrine_core::Rgb565;
use vitrine_hal::{OutputPin, SpiBus};

#[derive(Default)]
struct Bus {
    /// Every byte written, tagged with the D/C level (true = data)
    bytes: Vec<(bool, u8)>,
    writes: usize,
    dc: bool,
    cs: bool,
    fail: bool,
}

/// Shared view of the SPI traffic and pin levels
#[derive(Clone, Default)]
pub struct BusLog {
    bus: Rc<RefCell<Bus>>,
}

impl BusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spi(&self) -> MockSpi {
        MockSpi {
            bus: self.bus.clone(),
        }
    }

    pub fn dc_pin(&self) -> MockPin {
        MockPin {
            bus: self.bus.clone(),
            is_cs: false,
        }
    }

    pub fn cs_pin(&self) -> MockPin {
        MockPin {
            bus: self.bus.clone(),
            is_cs: true,
        }
    }

    pub fn fail_writes(&self, fail: bool) {
        self.bus.borrow_mut().fail = fail;
    }

    pub fn clear(&self) {
        let mut bus = self.bus.borrow_mut();
        bus.bytes.clear();
        bus.writes = 0;
    }

    pub fn cs_high(&self) -> bool {
        self.bus.borrow().cs
    }

    pub fn writes(&self) -> usize {
        self.bus.borrow().writes
    }

    /// Command bytes in order
    pub fn commands(&self) -> Vec<u8> {
        self.bus
            .borrow()
            .bytes
            .iter()
            .filter(|(data, _)| !data)
            .map(|&(_, b)| b)
            .collect()
    }

    /// Data bytes following the last occurrence of `command`
    pub fn data_after(&self, command: u8) -> Vec<u8> {
        let bus = self.bus.borrow();
        let start = bus
            .bytes
            .iter()
            .rposition(|&(data, b)| !data && b == command)
            .map_or(bus.bytes.len(), |i| i + 1);
        bus.bytes[start..]
            .iter()
            .take_while(|(data, _)| *data)
            .map(|&(_, b)| b)
            .collect()
    }
}

pub struct MockSpi {
    bus: Rc<RefCell<Bus>>,
}

impl SpiBus for MockSpi {
    type Error = ();

    fn write(&mut self, data: &[u8]) -> Result<(), ()> {
        let mut bus = self.bus.borrow_mut();
        if bus.fail {
            return Err(());
        }
        assert!(!bus.cs, "write with chip select released");
        let dc = bus.dc;
        bus.bytes.extend(data.iter().map(|&b| (dc, b)));
        bus.writes += 1;
        Ok(())
    }
}

pub struct MockPin {
    bus: Rc<RefCell<Bus>>,
    is_cs: bool,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.set_level(true);
    }

    fn set_low(&mut self) {
        self.set_level(false);
    }

    fn is_set_high(&self) -> bool {
        let bus = self.bus.borrow();
        if self.is_cs {
            bus.cs
        } else {
            bus.dc
        }
    }
}

impl MockPin {
    fn set_level(&mut self, high: bool) {
        let mut bus = self.bus.borrow_mut();
        if self.is_cs {
            bus.cs = high;
        } else {
            bus.dc = high;
        }
    }
}

#[derive(Default)]
pub struct MockDelay {
    pub total_ms: u32,
    ns: u64,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ns += ns as u64;
        self.total_ms = (self.ns / 1_000_000) as u32;
    }
}

const W: usize = SCREEN_WIDTH as usize;
const H: usize = SCREEN_HEIGHT as usize;

/// Frame buffer behaving like the panel's windowed RAM
pub struct MockFrame {
    frame: Vec<u16>,
    window: (u16, u16, u16, u16),
    cursor: (u16, u16),
    pub windows: usize,
}

impl MockFrame {
    pub fn new() -> Self {
        Self {
            frame: std::vec![0; W * H],
            window: (0, 0, 0, 0),
            cursor: (0, 0),
            windows: 0,
        }
    }

    pub fn pixel(&self, x: u16, y: u16) -> Rgb565 {
        Rgb565(self.frame[y as usize * W + x as usize])
    }

    /// Pixels of `color` inside rows `y0..y1`
    pub fn count_in_rows(&self, color: Rgb565, y0: u16, y1: u16) -> usize {
        self.frame[y0 as usize * W..y1 as usize * W]
            .iter()
            .filter(|&&p| p == color.raw())
            .count()
    }
}

impl PixelSink for MockFrame {
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) {
        assert!(x0 <= x1 && y0 <= y1, "inverted window");
        assert!((x1 as usize) < W && (y1 as usize) < H, "window off panel");
        self.window = (x0, y0, x1, y1);
        self.cursor = (x0, y0);
        self.windows += 1;
    }

    fn push_pixels(&mut self, pixels: &[u16]) {
        let (x0, _, x1, y1) = self.window;
        for &p in pixels {
            let (x, y) = self.cursor;
            if y > y1 {
                break;
            }
            self.frame[y as usize * W + x as usize] = p.swap_bytes();
            self.cursor = if x == x1 { (x0, y + 1) } else { (x + 1, y) };
        }
    }

    fn fill_screen(&mut self, color: Rgb565) {
        self.frame.iter_mut().for_each(|p| *p = color.raw());
    }
}
