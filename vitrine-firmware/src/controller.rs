//! Widget controller
//!
//! Owns the panel, both animation engines, the page scheduler and the
//! wall clock. All drawing happens here, on the controller task.

use defmt::*;
use embassy_rp::peripherals::SPI0;
use embassy_time::Instant;

use vitrine_core::ball::BallSim;
use vitrine_core::config::WidgetConfig;
use vitrine_core::fractal::MandelbrotEngine;
use vitrine_core::pages::{Button, Due, Page, PageScheduler};
use vitrine_core::quotes;
use vitrine_core::time::WallClock;
use vitrine_core::traits::Clock;
use vitrine_display::{screens, Backlight, Canvas, St7789};
use vitrine_hal_rp2040::{RpOutput, RpSpi};

/// The panel as wired on the board
pub type Panel = St7789<RpSpi<'static, SPI0>, RpOutput<'static>, RpOutput<'static>>;

/// Millisecond clock over the embassy time driver
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

pub struct Widget {
    panel: Panel,
    backlight: Backlight<RpOutput<'static>>,
    config: WidgetConfig,
    scheduler: PageScheduler,
    ball: BallSim,
    fractal: MandelbrotEngine,
    wall: WallClock,
    clock: EmbassyClock,
    display_faulted: bool,
}

impl Widget {
    pub fn new(panel: Panel, backlight: Backlight<RpOutput<'static>>, config: WidgetConfig) -> Self {
        Self {
            panel,
            backlight,
            scheduler: PageScheduler::new(
                config.timing.frame_interval_ms,
                config.timing.clock_refresh_ms,
            ),
            config,
            ball: BallSim::new(),
            fractal: MandelbrotEngine::new(),
            wall: WallClock::new(),
            clock: EmbassyClock,
            display_faulted: false,
        }
    }

    /// Switch the backlight on (if configured) and show the first page
    pub fn start(&mut self) {
        self.backlight.set(self.config.display.backlight);
        let now = self.clock.now_ms();
        self.scheduler.enter(Page::Clock, now);
        self.draw_page(Page::Clock);
    }

    /// Every press re-enters its page, restarting it from scratch
    pub fn press(&mut self, button: Button) {
        let page = self.scheduler.press(button, self.clock.now_ms());
        info!("Page: {}", page);
        self.draw_page(page);
    }

    /// Run whatever is due at `now_ms`
    pub fn tick(&mut self, now_ms: u32) {
        match self.scheduler.poll(now_ms) {
            Some(Due::ClockRefresh) => self.draw_clock(),
            Some(Due::Frame(Page::Ball)) => {
                self.ball.tick(&mut self.panel);
                if self.ball.last_hit().is_corner() {
                    debug!("Corner hit, color {=u16:#06x}", self.ball.color().raw());
                }
            }
            Some(Due::Frame(Page::Mandelbrot)) => {
                let zooms = self.fractal.zoom_count();
                self.fractal
                    .tick(&mut self.panel, &self.clock, self.config.mandelbrot.lines_per_tick);
                if self.fractal.zoom_count() != zooms {
                    debug!(
                        "Zoom {}: scale {=i32} (Q4.28), {} iterations",
                        self.fractal.zoom_count(),
                        self.fractal.scale().to_bits(),
                        self.fractal.max_iterations()
                    );
                }
            }
            Some(Due::Frame(_)) | None => {}
        }
    }

    /// Take a new UTC time from the host
    pub fn sync(&mut self, epoch_secs: u64) {
        self.wall.set_epoch(epoch_secs, Instant::now().as_millis());
        info!("Wall clock set to {}", epoch_secs);
        if self.scheduler.page() == Page::Clock {
            // Replaces the "waiting" hint as well as the time
            self.draw_page(Page::Clock);
        }
    }

    /// Log display faults once per run of failing events
    pub fn check_display(&mut self) {
        match self.panel.fault() {
            Some((e, count)) => {
                if !self.display_faulted {
                    warn!("Display fault: {} ({} failed transfers)", e, count);
                    self.display_faulted = true;
                }
                self.panel.clear_fault();
            }
            None if self.display_faulted => {
                info!("Display transfers working again");
                self.display_faulted = false;
            }
            None => {}
        }
    }

    fn draw_page(&mut self, page: Page) {
        let theme = self.config.theme;
        match page {
            Page::Clock => {
                screens::draw_frame(&mut Canvas::new(&mut self.panel), theme.background, theme.border).ok();
                self.draw_clock();
            }
            Page::Quote => {
                let quote = quotes::pick(Instant::now().as_ticks() as u32);
                let mut canvas = Canvas::new(&mut self.panel);
                screens::draw_frame(&mut canvas, theme.background, theme.border).ok();
                screens::draw_quote(&mut canvas, quote, theme.text, theme.background).ok();
            }
            Page::Ball => {
                let ball = self.config.ball;
                self.ball.init(
                    &mut self.panel,
                    ball.radius as i32,
                    ball.velocity_x as i32,
                    ball.velocity_y as i32,
                    theme.background,
                    theme.border,
                    ball.start_color,
                );
            }
            Page::Mandelbrot => {
                screens::draw_frame(&mut Canvas::new(&mut self.panel), theme.background, theme.border).ok();
                self.fractal.init(&self.clock);
            }
        }
    }

    fn draw_clock(&mut self) {
        let theme = self.config.theme;
        let now = Instant::now().as_millis();
        let mut canvas = Canvas::new(&mut self.panel);

        match self.wall.local_datetime(now, self.config.clock.tz_offset_hours) {
            Some(dt) => screens::draw_clock(&mut canvas, &dt, theme.text, theme.background).ok(),
            None => screens::draw_clock_pending(&mut canvas, theme.text, theme.background).ok(),
        };
    }
}
