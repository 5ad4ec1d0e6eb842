use ratatui::style::Color;

use crate::color;

/// Luminance at or above which a background counts as light.
pub const LIGHT_THRESHOLD: f64 = 140.0;

/// Luminance assumed for missing or unparseable colors.
const UNKNOWN_LUMINANCE: f64 = 255.0;

/// Whether a background color reads as light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    /// Foreground color that stays legible on a background of this shade.
    pub fn foreground(self) -> Color {
        match self {
            Shade::Light => Color::Black,
            Shade::Dark => Color::White,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Shade::Light => "light",
            Shade::Dark => "dark",
        }
    }
}

/// Relative luminance in 0..=255 of a hex or `rgb()` color string.
///
/// `None` and anything that fails to parse yield 255 so callers fall back to
/// dark text.
pub fn luminance(input: Option<&str>) -> f64 {
    input
        .and_then(color::parse_color)
        .map(|(r, g, b)| 0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64)
        .unwrap_or(UNKNOWN_LUMINANCE)
}

pub fn classify(input: Option<&str>) -> Shade {
    if luminance(input) < LIGHT_THRESHOLD {
        Shade::Dark
    } else {
        Shade::Light
    }
}

/// Shorthand for `classify(color).foreground()`.
pub fn foreground_for(input: Option<&str>) -> Color {
    classify(input).foreground()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_and_white() {
        assert_eq!(classify(Some("#000000")), Shade::Dark);
        assert_eq!(classify(Some("#ffffff")), Shade::Light);
    }

    #[test]
    fn missing_color_is_light() {
        assert_eq!(classify(None), Shade::Light);
        assert_eq!(luminance(None), 255.0);
    }

    #[test]
    fn garbage_is_light() {
        assert_eq!(classify(Some("")), Shade::Light);
        assert_eq!(classify(Some("not a color")), Shade::Light);
        assert_eq!(luminance(Some("#12345")), 255.0);
    }

    #[test]
    fn short_hex_matches_long_hex() {
        assert_eq!(classify(Some("#abc")), classify(Some("#aabbcc")));
        assert_eq!(luminance(Some("#abc")), luminance(Some("#aabbcc")));
    }

    #[test]
    fn rgb_function_input() {
        assert_eq!(classify(Some("rgb(0, 0, 0)")), Shade::Dark);
        assert_eq!(classify(Some("rgba(255, 255, 255, 0.4)")), Shade::Light);
    }

    #[test]
    fn threshold_boundary() {
        // Pure green weighs 0.7152 * 255 = 182.4 and reads light,
        // pure red weighs 0.2126 * 255 = 54.2 and reads dark.
        assert_eq!(classify(Some("#00ff00")), Shade::Light);
        assert_eq!(classify(Some("#ff0000")), Shade::Dark);
        // The default brand orange sits above the threshold.
        assert!(luminance(Some("#FF9000")) >= LIGHT_THRESHOLD);
    }

    #[test]
    fn foreground_contrasts_background() {
        assert_eq!(foreground_for(Some("#000000")), Color::White);
        assert_eq!(foreground_for(Some("#ffffff")), Color::Black);
        assert_eq!(foreground_for(None), Color::Black);
    }

    #[test]
    fn shade_labels() {
        assert_eq!(Shade::Light.as_str(), "light");
        assert_eq!(Shade::Dark.as_str(), "dark");
    }
}
