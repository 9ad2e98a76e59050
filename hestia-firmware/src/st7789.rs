//! Blocking ST7789 panel driver
//!
//! Minimal command set for a 240x320 portrait panel over SPI. Pixels are
//! written straight to display RAM; there is no framebuffer and no flush,
//! so the renderer's diff policy is the only thing limiting bus traffic.

use embassy_rp::gpio::Output;
use embassy_rp::spi::{Blocking, Instance, Spi};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;

use hestia_display::DisplayError;

/// Panel dimensions (portrait, no rotation)
pub const WIDTH: u32 = 240;
pub const HEIGHT: u32 = 320;

// ST7789 commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVON: u8 = 0x21;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

/// ST7789 over blocking SPI with DC/CS/RST control pins
pub struct St7789<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
    dc: Output<'d>,
    cs: Output<'d>,
    rst: Output<'d>,
}

impl<'d, T: Instance> St7789<'d, T> {
    pub fn new(
        spi: Spi<'d, T, Blocking>,
        dc: Output<'d>,
        cs: Output<'d>,
        rst: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs, rst }
    }

    /// Hardware reset and init sequence
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        self.rst.set_low();
        delay.delay_ms(50);
        self.rst.set_high();
        delay.delay_ms(150);

        self.write_command(SWRESET)?;
        delay.delay_ms(150);

        self.write_command(SLPOUT)?;
        delay.delay_ms(10);

        // RGB565
        self.write_command(COLMOD)?;
        self.write_data(&[0x55])?;

        // Portrait, no mirroring
        self.write_command(MADCTL)?;
        self.write_data(&[0x00])?;

        // Panel ships inverted
        self.write_command(INVON)?;
        delay.delay_ms(10);

        self.write_command(NORON)?;
        delay.delay_ms(10);

        self.write_command(DISPON)?;
        delay.delay_ms(10);

        // Black out whatever the panel RAM woke up with
        let full = Rectangle::new(Point::zero(), Size::new(WIDTH, HEIGHT));
        self.fill_solid(&full, Rgb565::BLACK)
    }

    fn write_command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.cs.set_low();
        self.dc.set_low();
        let result = self.spi.blocking_write(&[cmd]);
        self.cs.set_high();
        result.map_err(|_| DisplayError::Communication)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.cs.set_low();
        self.dc.set_high();
        let result = self.spi.blocking_write(data);
        self.cs.set_high();
        result.map_err(|_| DisplayError::Communication)
    }

    /// Set the drawing window, inclusive coordinates
    fn set_window(&mut self, x: u16, y: u16, w: u16, h: u16) -> Result<(), DisplayError> {
        if w == 0 || h == 0 || (x + w) as u32 > WIDTH || (y + h) as u32 > HEIGHT {
            return Err(DisplayError::InvalidCoordinates);
        }
        let x1 = x + w - 1;
        let y1 = y + h - 1;

        self.write_command(CASET)?;
        self.write_data(&[(x >> 8) as u8, x as u8, (x1 >> 8) as u8, x1 as u8])?;

        self.write_command(RASET)?;
        self.write_data(&[(y >> 8) as u8, y as u8, (y1 >> 8) as u8, y1 as u8])?;

        self.write_command(RAMWR)
    }

    /// Stream one color into the current window, `count` pixels long
    fn write_pixels(&mut self, color: Rgb565, mut count: u32) -> Result<(), DisplayError> {
        let raw = RawU16::from(color).into_inner().to_be_bytes();
        let mut chunk = [0u8; 64];
        for pair in chunk.chunks_exact_mut(2) {
            pair.copy_from_slice(&raw);
        }

        self.cs.set_low();
        self.dc.set_high();
        while count > 0 {
            let pixels = count.min(32);
            let result = self.spi.blocking_write(&chunk[..(pixels * 2) as usize]);
            if result.is_err() {
                self.cs.set_high();
                return Err(DisplayError::Communication);
            }
            count -= pixels;
        }
        self.cs.set_high();
        Ok(())
    }
}

impl<T: Instance> OriginDimensions for St7789<'_, T> {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl<T: Instance> DrawTarget for St7789<'_, T> {
    type Color = Rgb565;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Clip instead of erroring; text runs straddle widget edges
            if point.x < 0 || point.y < 0 || point.x >= WIDTH as i32 || point.y >= HEIGHT as i32 {
                continue;
            }
            self.set_window(point.x as u16, point.y as u16, 1, 1)?;
            let raw = RawU16::from(color).into_inner().to_be_bytes();
            self.write_data(&raw)?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size == Size::zero() {
            return Ok(());
        }
        self.set_window(
            area.top_left.x as u16,
            area.top_left.y as u16,
            area.size.width as u16,
            area.size.height as u16,
        )?;
        self.write_pixels(color, area.size.width * area.size.height)
    }
}
