//! Status screen renderer
//!
//! Maps the per-cycle snapshot onto the panel. Static chrome is drawn
//! once; after that every widget repaints only when its backing value
//! moved past the noise threshold, against the cache kept here. The
//! statistics overlay is the exception: its three lines churn every
//! second anyway, so it repaints unconditionally inside its background
//! box.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use hestia_core::config::ColorScale;
use hestia_core::state::StatusSnapshot;

use crate::backend::{Canvas, DisplayError};
use crate::color::{temp_color, DARK_GREY};
use crate::format::{duration_text, duty_text, temp_text, zone_text};
use crate::layout::PanelLayout;

/// Temperature change below which a zone is not repainted (°C, inclusive)
pub const TEMP_EPSILON_C: f32 = 0.1;

/// Vertical pitch of the overlay text lines
const STATS_LINE_H: i32 = 13;

/// Incremental renderer with per-widget value cache
///
/// The cached temperatures start undefined, so the first cycle paints
/// everything. The circulator cache starts `false` because the static
/// chrome already shows the released state.
pub struct StatusScreen {
    layout: PanelLayout,
    scale: ColorScale,
    stove_c: Option<f32>,
    tank_c: [Option<f32>; 3],
    circulator_on: bool,
}

impl StatusScreen {
    pub fn new(layout: PanelLayout, scale: ColorScale) -> Self {
        Self {
            layout,
            scale,
            stove_c: None,
            tank_c: [None; 3],
            circulator_on: false,
        }
    }

    /// Draw the chrome that never changes: outlines, captions, plumbing
    /// lines, and the released circulator indicator.
    pub fn draw_static<C: Canvas>(&self, canvas: &mut C) -> Result<(), DisplayError> {
        let l = &self.layout;

        // Stove: body, door, chimney, caption
        canvas.draw_rect(l.stove, Rgb565::WHITE)?;
        canvas.draw_rect(l.door, Rgb565::WHITE)?;
        canvas.fill_rect(l.chimney, Rgb565::WHITE)?;
        canvas.draw_text(l.stove.x, l.stove.y - 12, "Stove", Rgb565::WHITE, Rgb565::BLACK)?;

        // Tank: body, caption
        canvas.draw_rect(l.tank, Rgb565::WHITE)?;
        canvas.draw_text(l.tank.x, l.tank.y - 12, "Buffer tank", Rgb565::WHITE, Rgb565::BLACK)?;

        // Flow and return lines
        canvas.draw_line(l.line_x0, l.line_mid_y, l.line_x1, l.line_mid_y, Rgb565::WHITE)?;
        canvas.draw_line(l.line_x0, l.line_bottom_y, l.line_x1, l.line_bottom_y, Rgb565::WHITE)?;

        // Circulator, released
        canvas.draw_circle(l.pump_cx, l.pump_cy, l.pump_r, Rgb565::WHITE)?;
        self.paint_pump(canvas, false)?;

        // Statistics overlay frame
        canvas.draw_rect(l.stats, DARK_GREY)?;

        Ok(())
    }

    /// Repaint every widget whose value went stale this cycle
    pub fn render<C: Canvas>(
        &mut self,
        canvas: &mut C,
        snapshot: &StatusSnapshot,
    ) -> Result<(), DisplayError> {
        self.update_stove(canvas, snapshot.temperatures.stove_c)?;

        let zones = [
            ("Top", snapshot.temperatures.tank_top_c),
            ("Mid", snapshot.temperatures.tank_middle_c),
            ("Bot", snapshot.temperatures.tank_bottom_c),
        ];
        for (index, (label, t_c)) in zones.into_iter().enumerate() {
            self.update_tank_zone(canvas, index, label, t_c)?;
        }

        self.update_circulator(canvas, snapshot.circulator_on)?;
        self.draw_stats(canvas, snapshot)?;
        Ok(())
    }

    fn update_stove<C: Canvas>(&mut self, canvas: &mut C, t_c: f32) -> Result<(), DisplayError> {
        if !stale(self.stove_c, t_c) {
            return Ok(());
        }
        let l = &self.layout;
        let color = temp_color(t_c, &self.scale);

        canvas.fill_rect(l.stove.interior(), color)?;
        // The door sits on top of the body fill
        canvas.draw_rect(l.door, Rgb565::WHITE)?;
        canvas.draw_text(
            l.stove.x + 8,
            l.stove.y + 8,
            &temp_text(t_c),
            Rgb565::WHITE,
            color,
        )?;

        self.stove_c = Some(t_c);
        Ok(())
    }

    fn update_tank_zone<C: Canvas>(
        &mut self,
        canvas: &mut C,
        index: usize,
        label: &str,
        t_c: f32,
    ) -> Result<(), DisplayError> {
        if !stale(self.tank_c[index], t_c) {
            return Ok(());
        }
        let zone = self.layout.tank_zone(index);
        let color = temp_color(t_c, &self.scale);

        canvas.fill_rect(zone.interior(), color)?;
        canvas.draw_text(zone.x + 6, zone.y + 6, &zone_text(label, t_c), Rgb565::WHITE, color)?;

        self.tank_c[index] = Some(t_c);
        Ok(())
    }

    fn update_circulator<C: Canvas>(&mut self, canvas: &mut C, on: bool) -> Result<(), DisplayError> {
        if on == self.circulator_on {
            return Ok(());
        }
        self.paint_pump(canvas, on)?;
        self.circulator_on = on;
        Ok(())
    }

    fn paint_pump<C: Canvas>(&self, canvas: &mut C, on: bool) -> Result<(), DisplayError> {
        let l = &self.layout;
        let (fill, fg, label) = if on {
            (Rgb565::GREEN, Rgb565::BLACK, "ON")
        } else {
            (DARK_GREY, Rgb565::WHITE, "OFF")
        };

        canvas.fill_circle(l.pump_cx, l.pump_cy, l.pump_r - 1, fill)?;
        let (w, h) = canvas.text_size(label);
        canvas.draw_text(
            l.pump_cx - w as i32 / 2,
            l.pump_cy - h as i32 / 2,
            label,
            fg,
            fill,
        )
    }

    /// Overlay lines churn every second; repaint them all, no diffing
    fn draw_stats<C: Canvas>(
        &self,
        canvas: &mut C,
        snapshot: &StatusSnapshot,
    ) -> Result<(), DisplayError> {
        let stats = self.layout.stats;
        canvas.fill_rect(stats.interior(), Rgb565::BLACK)?;

        let lines = [
            ("up  ", duration_text(snapshot.uptime_s)),
            ("on  ", duration_text(snapshot.total_on_ms / 1000)),
            ("duty", duty_text(snapshot.duty_pct)),
        ];
        let (head_w, _) = canvas.text_size("duty ");
        for (row, (head, value)) in lines.iter().enumerate() {
            let y = stats.y + 4 + row as i32 * STATS_LINE_H;
            canvas.draw_text(stats.x + 4, y, head, DARK_GREY, Rgb565::BLACK)?;
            canvas.draw_text(stats.x + 4 + head_w as i32, y, value, Rgb565::WHITE, Rgb565::BLACK)?;
        }
        Ok(())
    }
}

/// Whether a cached value no longer represents the new one
///
/// The tolerance boundary is inclusive; an undefined cache or a NaN on
/// either side always repaints (NaN is what a probe fault looks like
/// after conversion, and it must stay visible).
fn stale(cached: Option<f32>, next: f32) -> bool {
    match cached {
        None => true,
        Some(prev) if prev.is_nan() || next.is_nan() => true,
        Some(prev) => (prev - next).abs() >= TEMP_EPSILON_C,
    }
}
