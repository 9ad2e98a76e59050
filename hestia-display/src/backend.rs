//! Display backend trait
//!
//! Defines the drawing interface the renderer needs from a panel.

use embedded_graphics::pixelcolor::Rgb565;

use crate::layout::Region;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Region or point outside the panel
    InvalidCoordinates,
}

/// Display backend trait
///
/// Provides a hardware-agnostic drawing interface in fixed pixel space.
/// Implementations write straight to the panel - there is no buffering
/// and no flush step, so every call is immediately visible.
///
/// Text is drawn with an explicit background color so overwriting a value
/// erases the previous glyphs without a separate clear.
pub trait Canvas {
    /// Fill a rectangle
    fn fill_rect(&mut self, region: Region, color: Rgb565) -> Result<(), DisplayError>;

    /// Draw a one-pixel rectangle outline
    fn draw_rect(&mut self, region: Region, color: Rgb565) -> Result<(), DisplayError>;

    /// Draw a one-pixel line between two points
    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Draw a one-pixel circle outline around a center point
    fn draw_circle(&mut self, cx: i32, cy: i32, r: u32, color: Rgb565)
        -> Result<(), DisplayError>;

    /// Fill a circle around a center point
    fn fill_circle(&mut self, cx: i32, cy: i32, r: u32, color: Rgb565)
        -> Result<(), DisplayError>;

    /// Draw text with an opaque background, top-left anchored
    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Measure the bounding box of a text run in pixels
    fn text_size(&self, text: &str) -> (u32, u32);
}
