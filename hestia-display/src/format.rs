//! Bounded text formatting
//!
//! Every on-screen string is built into a fixed-capacity
//! `heapless::String`; formats are exact and stable so the diff renderer
//! can overwrite glyphs in place with an opaque background.

use core::fmt::Write;

use heapless::String;

/// Capacity covering the longest on-screen line
pub const LABEL_LEN: usize = 20;

/// One formatted screen line
pub type Label = String<LABEL_LEN>;

/// Temperature with one decimal digit, e.g. ` 47.3 C`
pub fn temp_text(t_c: f32) -> Label {
    let mut s = Label::new();
    let _ = write!(s, "{t_c:5.1} C");
    s
}

/// Labelled zone temperature, e.g. `Mid:  47.3 C`
pub fn zone_text(label: &str, t_c: f32) -> Label {
    let mut s = Label::new();
    let _ = write!(s, "{label}: {t_c:5.1} C");
    s
}

/// Zero-padded minutes:seconds, e.g. `07:42`
pub fn duration_text(total_seconds: u64) -> Label {
    let mut s = Label::new();
    let _ = write!(s, "{:02}:{:02}", total_seconds / 60, total_seconds % 60);
    s
}

/// Right-aligned duty-cycle percentage, e.g. ` 75%`
pub fn duty_text(pct: u8) -> Label {
    let mut s = Label::new();
    let _ = write!(s, "{pct:3}%");
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_keeps_one_decimal() {
        assert_eq!(temp_text(47.26), " 47.3 C");
        assert_eq!(temp_text(8.0), "  8.0 C");
        assert_eq!(temp_text(-12.5), "-12.5 C");
        assert_eq!(temp_text(104.6), "104.6 C");
    }

    #[test]
    fn zone_line_carries_its_label() {
        assert_eq!(zone_text("Top", 61.0), "Top:  61.0 C");
        assert_eq!(zone_text("Bot", 23.4), "Bot:  23.4 C");
    }

    #[test]
    fn durations_are_zero_padded() {
        assert_eq!(duration_text(0), "00:00");
        assert_eq!(duration_text(65), "01:05");
        assert_eq!(duration_text(600), "10:00");
        // Minutes keep counting past the hour
        assert_eq!(duration_text(6000), "100:00");
    }

    #[test]
    fn duty_percentage_is_right_aligned() {
        assert_eq!(duty_text(0), "  0%");
        assert_eq!(duty_text(75), " 75%");
        assert_eq!(duty_text(100), "100%");
    }

    #[test]
    fn extreme_sensor_values_stay_within_capacity() {
        // A disconnected probe reads far outside the plausible range;
        // the label must still fit its buffer
        let label = zone_text("Mid", -273.1);
        assert_eq!(label, "Mid: -273.1 C");
        assert!(label.len() <= LABEL_LEN);
    }
}
