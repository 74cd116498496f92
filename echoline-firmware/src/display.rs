//! SSD1306 display backend
//!
//! Driver for the 128x32 SSD1306 OLED over blocking I2C. Drawing goes to
//! the driver's RAM frame buffer through embedded-graphics; only `flush`
//! touches the bus.

use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::Point as GfxPoint;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use echoline_display::{DisplayBackend, DisplayError, Point};

/// Display dimensions
const WIDTH: u16 = 128;
const HEIGHT: u16 = 32;

type Interface = I2CInterface<I2c<'static, I2C0, Blocking>>;
type Driver = Ssd1306<Interface, DisplaySize128x32, BufferedGraphicsMode<DisplaySize128x32>>;

/// SSD1306 OLED backend
pub struct OledDisplay {
    driver: Driver,
    ready: bool,
}

impl OledDisplay {
    /// Create a new backend; the panel stays dark until [`init`](Self::init)
    pub fn new(i2c: I2c<'static, I2C0, Blocking>) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let driver = Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            driver,
            ready: false,
        }
    }

    /// Send the controller initialisation sequence
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.driver.init().map_err(|_| DisplayError::Communication)?;
        self.ready = true;
        Ok(())
    }
}

fn gfx_point(p: Point) -> GfxPoint {
    GfxPoint::new(p.x as i32, p.y as i32)
}

impl DisplayBackend for OledDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.driver.clear_buffer();
        Ok(())
    }

    fn draw_text(&mut self, origin: Point, scale: u8, text: &str) -> Result<(), DisplayError> {
        let font = if scale > 1 { &FONT_10X20 } else { &FONT_6X10 };
        let style = MonoTextStyle::new(font, BinaryColor::On);

        Text::with_baseline(text, gfx_point(origin), style, Baseline::Top)
            .draw(&mut self.driver)
            .map_err(|_| DisplayError::Communication)?;
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), DisplayError> {
        if from.x >= WIDTH || to.x >= WIDTH || from.y >= HEIGHT || to.y >= HEIGHT {
            return Err(DisplayError::InvalidCoordinates);
        }

        Line::new(gfx_point(from), gfx_point(to))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.driver)
            .map_err(|_| DisplayError::Communication)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.ready {
            return Err(DisplayError::NotInitialized);
        }
        self.driver.flush().map_err(|_| DisplayError::Communication)
    }

    fn pixel_dimensions(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }
}
