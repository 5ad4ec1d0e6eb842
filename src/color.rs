// ---------------------------------------------------------------------------
// HslColor
// ---------------------------------------------------------------------------

/// A color represented in the HSL (Hue, Saturation, Lightness) color space.
///
/// - `h`: hue in degrees, 0.0..360.0
/// - `s`: saturation as a percentage, 0.0..100.0
/// - `l`: lightness as a percentage, 0.0..100.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HslColor {
    /// Create a new `HslColor`. Hue wraps, saturation and lightness clamp.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Convert this HSL color to an (r, g, b) tuple with each channel in 0..255.
    ///
    /// Piecewise `k = (n + h/30) mod 12` form, rounded per channel.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let l = self.l / 100.0;
        let a = self.s * l.min(1.0 - l) / 100.0;

        let channel = |n: f64| -> u8 {
            let k = (n + self.h / 30.0).rem_euclid(12.0);
            let c = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (255.0 * c).round().clamp(0.0, 255.0) as u8
        };

        (channel(0.0), channel(8.0), channel(4.0))
    }

    /// Convert this HSL color to a hex string like `#rrggbb`.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb();
        rgb_to_hex(r, g, b)
    }

    /// Inverse of [`HslColor::to_rgb`], up to byte rounding.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let [r, g, b] = [r, g, b].map(|c| c as f64 / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;
        let lightness = (max + min) / 2.0;
        if chroma == 0.0 {
            return Self::new(0.0, 0.0, lightness * 100.0);
        }

        let saturation = chroma / (1.0 - (2.0 * lightness - 1.0).abs());
        // Position within the six 60 degree hue sectors.
        let sector = if max == r {
            ((g - b) / chroma).rem_euclid(6.0)
        } else if max == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };

        Self::new(sector * 60.0, saturation * 100.0, lightness * 100.0)
    }

    /// Parse a hex color string (`#ff00aa`, `ff00aa` or `#f0a`) into an `HslColor`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        parse_hex(hex).map(|(r, g, b)| Self::from_rgb(r, g, b))
    }
}

// ---------------------------------------------------------------------------
// Hex helpers
// ---------------------------------------------------------------------------

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Normalize free-form user input into a 7-character `#RRGGBB` string.
///
/// Non-hex characters are dropped, extra digits are truncated and missing ones
/// are padded with `0`. Digit case is preserved.
pub fn format_hex(input: &str) -> String {
    let mut digits: String = input
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .take(6)
        .collect();
    while digits.len() < 6 {
        digits.push('0');
    }
    format!("#{}", digits)
}

/// Canonical `#RRGGBB` form of any color [`parse_color`] accepts.
///
/// A string already in that form is returned as is, keeping its case.
pub fn normalize(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let canonical = trimmed.len() == 7
        && trimmed.starts_with('#')
        && trimmed[1..].chars().all(|c| c.is_ascii_hexdigit());
    if canonical {
        return Some(trimmed.to_string());
    }
    parse_color(trimmed).map(|(r, g, b)| rgb_to_hex(r, g, b))
}

/// Parse a 3- or 6-digit hex color (leading `#` optional) into (r, g, b).
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => hex.to_string(),
        _ => return None,
    };
    let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Parse an `rgb(r, g, b)` or `rgba(r, g, b, a)` string, taking the first
/// three numeric tokens as channels.
pub fn parse_rgb_function(input: &str) -> Option<(u8, u8, u8)> {
    let s = input.trim().to_ascii_lowercase();
    let body = s
        .strip_prefix("rgba")
        .or_else(|| s.strip_prefix("rgb"))?
        .trim_start()
        .strip_prefix('(')?;

    let mut channels = body
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|tok| !tok.is_empty())
        .filter_map(|tok| tok.parse::<f64>().ok())
        .map(|v| v.round().clamp(0.0, 255.0) as u8);

    let r = channels.next()?;
    let g = channels.next()?;
    let b = channels.next()?;
    Some((r, g, b))
}

/// Parse any color string the menu API may hand us: hex first, then `rgb()`.
pub fn parse_color(input: &str) -> Option<(u8, u8, u8)> {
    parse_hex(input).or_else(|| parse_rgb_function(input))
}

/// Map a color string to a ratatui color, falling back when it does not parse.
pub fn to_ratatui(input: &str, fallback: ratatui::style::Color) -> ratatui::style::Color {
    parse_color(input)
        .map(|(r, g, b)| ratatui::style::Color::Rgb(r, g, b))
        .unwrap_or(fallback)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primaries() {
        assert_eq!(HslColor::new(0.0, 100.0, 50.0).to_hex(), "#ff0000");
        assert_eq!(HslColor::new(120.0, 100.0, 50.0).to_hex(), "#00ff00");
        assert_eq!(HslColor::new(240.0, 100.0, 50.0).to_hex(), "#0000ff");
    }

    #[test]
    fn hsl_white_and_black() {
        assert_eq!(HslColor::new(0.0, 0.0, 100.0).to_rgb(), (255, 255, 255));
        assert_eq!(HslColor::new(0.0, 0.0, 0.0).to_rgb(), (0, 0, 0));
        assert_eq!(HslColor::new(120.0, 100.0, 0.0).to_hex(), "#000000");
    }

    #[test]
    fn hsl_gray() {
        let (r, g, b) = HslColor::new(0.0, 0.0, 50.0).to_rgb();
        assert_eq!((r, g, b), (128, 128, 128));
    }

    #[test]
    fn hsl_known_values() {
        // hsl(30, 100%, 50%) is a pure orange
        assert_eq!(HslColor::new(30.0, 100.0, 50.0).to_hex(), "#ff8000");
        // hsl(200, 50%, 25%)
        assert_eq!(HslColor::new(200.0, 50.0, 25.0).to_hex(), "#204a60");
    }

    #[test]
    fn hex_round_trip_within_rounding() {
        for h in (0..360).step_by(15) {
            for s in (0..=100).step_by(20) {
                for l in (0..=100).step_by(10) {
                    let c = HslColor::new(h as f64, s as f64, l as f64);
                    let direct = c.to_rgb();
                    let parsed = parse_hex(&c.to_hex()).unwrap();
                    assert!((direct.0 as i16 - parsed.0 as i16).abs() <= 1);
                    assert!((direct.1 as i16 - parsed.1 as i16).abs() <= 1);
                    assert!((direct.2 as i16 - parsed.2 as i16).abs() <= 1);
                }
            }
        }
    }

    #[test]
    fn from_rgb_recovers_hue_and_lightness() {
        let c = HslColor::from_hex("#00ff00").unwrap();
        assert!((c.h - 120.0).abs() < 1.0);
        assert!((c.s - 100.0).abs() < 1.0);
        assert!((c.l - 50.0).abs() < 1.0);
    }

    #[test]
    fn from_rgb_covers_each_hue_sector() {
        let magenta = HslColor::from_rgb(255, 0, 128);
        assert!((magenta.h - 329.9).abs() < 0.2);
        assert!((magenta.s - 100.0).abs() < 1e-9);
        let gray = HslColor::from_rgb(51, 51, 51);
        assert_eq!((gray.h, gray.s), (0.0, 0.0));
        assert!((gray.l - 20.0).abs() < 1e-9);
        let orange = HslColor::from_hex("#FF6B35").unwrap();
        assert_eq!(orange.to_hex(), "#ff6b35");
        let blue = HslColor::from_rgb(32, 74, 96);
        assert!((blue.h - 200.6).abs() < 0.2);
    }

    #[test]
    fn hsl_clamping() {
        let c = HslColor::new(400.0, 150.0, -10.0);
        assert!((c.h - 40.0).abs() < 0.01);
        assert!((c.s - 100.0).abs() < 0.01);
        assert!((c.l - 0.0).abs() < 0.01);
    }

    #[test]
    fn format_hex_keeps_valid_input() {
        assert_eq!(format_hex("#FF6B35"), "#FF6B35");
        assert_eq!(format_hex("#ff9000"), "#ff9000");
    }

    #[test]
    fn format_hex_strips_truncates_and_pads() {
        assert_eq!(format_hex("zz12xy34"), "#123400");
        assert_eq!(format_hex("#abcdef99"), "#abcdef");
        assert_eq!(format_hex(""), "#000000");
        assert_eq!(format_hex("##f"), "#f00000");
    }

    #[test]
    fn parse_hex_short_form_is_doubled() {
        assert_eq!(parse_hex("#abc"), parse_hex("#aabbcc"));
        assert_eq!(parse_hex("fff"), Some((255, 255, 255)));
    }

    #[test]
    fn parse_hex_invalid() {
        assert!(parse_hex("xyz").is_none());
        assert!(parse_hex("#ff").is_none());
        assert!(parse_hex("").is_none());
        assert!(parse_hex("#gg0000").is_none());
    }

    #[test]
    fn parse_rgb_function_variants() {
        assert_eq!(parse_rgb_function("rgb(10, 20, 30)"), Some((10, 20, 30)));
        assert_eq!(
            parse_rgb_function("rgba(255,128,0,0.5)"),
            Some((255, 128, 0))
        );
        assert_eq!(parse_rgb_function("RGB( 1 2 3 )"), Some((1, 2, 3)));
        assert!(parse_rgb_function("rgb(1, 2)").is_none());
        assert!(parse_rgb_function("hsl(1, 2, 3)").is_none());
    }

    #[test]
    fn normalize_expands_to_six_digits() {
        assert_eq!(normalize("#FF6B35").as_deref(), Some("#FF6B35"));
        assert_eq!(normalize("#abc").as_deref(), Some("#aabbcc"));
        assert_eq!(normalize("ff6b35").as_deref(), Some("#ff6b35"));
        assert_eq!(normalize("rgba(1, 2, 3, 0.5)").as_deref(), Some("#010203"));
        assert_eq!(normalize("bogus"), None);
    }

    #[test]
    fn to_ratatui_falls_back() {
        use ratatui::style::Color;
        assert_eq!(to_ratatui("#ff0000", Color::Reset), Color::Rgb(255, 0, 0));
        assert_eq!(to_ratatui("nope", Color::Reset), Color::Reset);
    }
}
