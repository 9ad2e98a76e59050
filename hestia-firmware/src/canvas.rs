//! embedded-graphics canvas adapter
//!
//! Implements the renderer's `Canvas` boundary on top of any
//! `DrawTarget<Color = Rgb565>`, using embedded-graphics primitives and
//! the 6x10 mono font for all text.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use hestia_display::{Canvas, DisplayError, Region};

/// Canvas over an embedded-graphics draw target
pub struct EgCanvas<D> {
    target: D,
}

impl<D> EgCanvas<D> {
    pub fn new(target: D) -> Self {
        Self { target }
    }
}

fn rect(region: Region) -> Rectangle {
    Rectangle::new(
        Point::new(region.x, region.y),
        Size::new(region.w, region.h),
    )
}

impl<D: DrawTarget<Color = Rgb565>> Canvas for EgCanvas<D> {
    fn fill_rect(&mut self, region: Region, color: Rgb565) -> Result<(), DisplayError> {
        rect(region)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_rect(&mut self, region: Region, color: Rgb565) -> Result<(), DisplayError> {
        rect(region)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_circle(
        &mut self,
        cx: i32,
        cy: i32,
        r: u32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        Circle::with_center(Point::new(cx, cy), 2 * r + 1)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_circle(
        &mut self,
        cx: i32,
        cy: i32,
        r: u32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        Circle::with_center(Point::new(cx, cy), 2 * r + 1)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<(), DisplayError> {
        // Opaque background so overwriting erases the previous glyphs
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(fg)
            .background_color(bg)
            .build();
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }

    fn text_size(&self, text: &str) -> (u32, u32) {
        let cell = FONT_6X10.character_size;
        let advance = cell.width + FONT_6X10.character_spacing;
        (advance * text.len() as u32, cell.height)
    }
}
