//! Temperature-to-color mapping
//!
//! A clamped, piecewise-linear gradient through a fixed table of color
//! stops. The domain comes from [`ColorScale`]; anything outside it maps
//! to the edge stop, so a disconnected probe shows saturated instead of
//! breaking the scale.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use hestia_core::config::{ColorScale, GradientVariant};

/// Indicator grey for released circulator and overlay chrome
pub const DARK_GREY: Rgb565 = Rgb565::new(8, 16, 8);

/// Cold-to-hot stop tables, 8-bit RGB
const TWO_STOP: &[(u8, u8, u8)] = &[
    (0, 0, 255),   // blue
    (255, 255, 0), // yellow
    (255, 0, 0),   // red
];

const FOUR_STOP: &[(u8, u8, u8)] = &[
    (0, 0, 255),   // blue
    (0, 255, 255), // cyan
    (0, 255, 0),   // green
    (255, 255, 0), // yellow
    (255, 0, 0),   // red
];

/// Piecewise-linear gradient over a fixed stop table
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    stops: &'static [(u8, u8, u8)],
}

impl Gradient {
    pub const fn for_variant(variant: GradientVariant) -> Self {
        match variant {
            GradientVariant::TwoStop => Self { stops: TWO_STOP },
            GradientVariant::FourStop => Self { stops: FOUR_STOP },
        }
    }

    /// Color at normalized position `k`
    ///
    /// `k` clamps to [0, 1]; NaN lands on the cold edge.
    pub fn color_at(&self, k: f32) -> Rgb565 {
        let k = if k > 1.0 {
            1.0
        } else if k >= 0.0 {
            k
        } else {
            0.0
        };

        let position = k * (self.stops.len() - 1) as f32;
        let segment = (position as usize).min(self.stops.len() - 2);
        let frac = position - segment as f32;

        let (r0, g0, b0) = self.stops[segment];
        let (r1, g1, b1) = self.stops[segment + 1];
        rgb565(lerp(r0, r1, frac), lerp(g0, g1, frac), lerp(b0, b1, frac))
    }
}

/// Map a temperature through the configured scale
pub fn temp_color(t_c: f32, scale: &ColorScale) -> Rgb565 {
    let gradient = Gradient::for_variant(scale.gradient);
    let span = scale.max_c - scale.min_c;
    let k = if span > 0.0 { (t_c - scale.min_c) / span } else { 0.0 };
    gradient.color_at(k)
}

fn lerp(a: u8, b: u8, frac: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * frac + 0.5) as u8
}

/// Pack 8-bit RGB into the panel's native RGB565
const fn rgb565(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(variant: GradientVariant) -> ColorScale {
        ColorScale {
            min_c: 10.0,
            max_c: 100.0,
            gradient: variant,
        }
    }

    #[test]
    fn domain_edges_clamp_idempotently() {
        for variant in [GradientVariant::TwoStop, GradientVariant::FourStop] {
            let s = scale(variant);
            assert_eq!(temp_color(10.0, &s), temp_color(-40.0, &s));
            assert_eq!(temp_color(100.0, &s), temp_color(400.0, &s));
        }
    }

    #[test]
    fn endpoints_hit_the_edge_stops() {
        let s = scale(GradientVariant::FourStop);
        assert_eq!(temp_color(10.0, &s), Rgb565::BLUE);
        assert_eq!(temp_color(100.0, &s), Rgb565::RED);

        let s = scale(GradientVariant::TwoStop);
        assert_eq!(temp_color(10.0, &s), Rgb565::BLUE);
        assert_eq!(temp_color(55.0, &s), Rgb565::YELLOW);
        assert_eq!(temp_color(100.0, &s), Rgb565::RED);
    }

    #[test]
    fn four_stop_passes_through_its_interior_stops() {
        let g = Gradient::for_variant(GradientVariant::FourStop);
        assert_eq!(g.color_at(0.25), Rgb565::CYAN);
        assert_eq!(g.color_at(0.5), Rgb565::GREEN);
        assert_eq!(g.color_at(0.75), Rgb565::YELLOW);
    }

    #[test]
    fn gradient_is_continuous_at_the_breakpoints() {
        let g = Gradient::for_variant(GradientVariant::FourStop);
        for breakpoint in [0.25f32, 0.5, 0.75] {
            let below = g.color_at(breakpoint - 0.001);
            let above = g.color_at(breakpoint + 0.001);
            assert!(channel_distance(below, above) <= 1, "at k={breakpoint}");
        }
    }

    #[test]
    fn nan_maps_to_the_cold_edge() {
        let s = scale(GradientVariant::FourStop);
        assert_eq!(temp_color(f32::NAN, &s), temp_color(s.min_c, &s));
    }

    fn channel_distance(a: Rgb565, b: Rgb565) -> u8 {
        let dr = a.r().abs_diff(b.r());
        let dg = a.g().abs_diff(b.g());
        let db = a.b().abs_diff(b.b());
        dr.max(dg).max(db)
    }
}
