//! Color parsing and conversion functions
//!
//! Accepts `#rgb` / `#rrggbb` hex, `rgb(r, g, b)`, or `hsl(h, s%, l%)` and
//! converts between the three notations with the standard max/min chroma math.

use regex::Regex;
use serde::Serialize;

/// A color with all three notations rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorOutput {
    pub hex: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Hue in degrees (0-360).
    pub h: u16,
    /// Saturation percentage (0-100).
    pub s: u8,
    /// Lightness percentage (0-100).
    pub l: u8,
    pub rgb_css: String,
    pub hsl_css: String,
}

/// Convert an RGB triple to HSL (hue 0-360, saturation/lightness 0-100).
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (u16, u8, u8) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return (0, 0, (l * 100.0).round() as u8);
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let h = (h * 60.0).round().rem_euclid(360.0) as u16;
    (h, (s * 100.0).round() as u8, (l * 100.0).round() as u8)
}

/// Convert an HSL triple (hue 0-360, saturation/lightness 0-100) to RGB.
pub fn hsl_to_rgb(h: u16, s: u8, l: u8) -> (u8, u8, u8) {
    let h = h as f64 % 360.0;
    let s = s as f64 / 100.0;
    let l = l as f64 / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

fn from_rgb(r: u8, g: u8, b: u8) -> ColorOutput {
    let (h, s, l) = rgb_to_hsl(r, g, b);

    ColorOutput {
        hex: format!("#{r:02x}{g:02x}{b:02x}"),
        r,
        g,
        b,
        h,
        s,
        l,
        rgb_css: format!("rgb({r}, {g}, {b})"),
        hsl_css: format!("hsl({h}, {s}%, {l}%)"),
    }
}

fn parse_hex(input: &str) -> Result<ColorOutput, String> {
    let digits = input.trim_start_matches('#');

    // All-ASCII check first: the channel slicing below indexes by byte.
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex digits: {digits}"));
    }

    let expanded = match digits.len() {
        3 => digits
            .chars()
            .flat_map(|c| [c, c])
            .collect::<String>(),
        6 => digits.to_string(),
        n => return Err(format!("Hex color must have 3 or 6 digits, found {n}")),
    };

    let parse_channel = |slice: &str| {
        u8::from_str_radix(slice, 16).map_err(|_| format!("Invalid hex digits: {slice}"))
    };

    Ok(from_rgb(
        parse_channel(&expanded[0..2])?,
        parse_channel(&expanded[2..4])?,
        parse_channel(&expanded[4..6])?,
    ))
}

/// Parse any supported notation into a fully converted [`ColorOutput`].
pub fn parse_color(input: &str) -> Result<ColorOutput, String> {
    let input = input.trim();

    if input.starts_with('#') {
        return parse_hex(input);
    }

    let rgb_re = Regex::new(r"(?i)^rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)$").unwrap();
    if let Some(caps) = rgb_re.captures(input) {
        let channel = |idx: usize| -> Result<u8, String> {
            caps[idx]
                .parse::<u8>()
                .map_err(|_| format!("RGB component out of range (0-255): {}", &caps[idx]))
        };
        return Ok(from_rgb(channel(1)?, channel(2)?, channel(3)?));
    }

    let hsl_re =
        Regex::new(r"(?i)^hsl\(\s*(\d+)\s*,\s*(\d+)%\s*,\s*(\d+)%\s*\)$").unwrap();
    if let Some(caps) = hsl_re.captures(input) {
        let h: u16 = caps[1]
            .parse()
            .map_err(|_| format!("Hue out of range (0-360): {}", &caps[1]))?;
        if h > 360 {
            return Err(format!("Hue out of range (0-360): {h}"));
        }
        let percent = |idx: usize| -> Result<u8, String> {
            let value: u8 = caps[idx]
                .parse()
                .map_err(|_| format!("Percentage out of range (0-100): {}", &caps[idx]))?;
            if value > 100 {
                return Err(format!("Percentage out of range (0-100): {value}"));
            }
            Ok(value)
        };
        let (r, g, b) = hsl_to_rgb(h, percent(2)?, percent(3)?);
        return Ok(from_rgb(r, g, b));
    }

    Err(format!(
        "Unrecognized color: '{input}'. Expected #rrggbb, rgb(r, g, b), or hsl(h, s%, l%)"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_long_hex() {
        let color = parse_color("#ff8000").unwrap();

        assert_eq!((color.r, color.g, color.b), (255, 128, 0));
        assert_eq!(color.rgb_css, "rgb(255, 128, 0)");
    }

    #[test]
    fn test_parse_color_short_hex_expands() {
        let color = parse_color("#f80").unwrap();

        assert_eq!((color.r, color.g, color.b), (255, 136, 0));
    }

    #[test]
    fn test_parse_color_rgb_notation() {
        let color = parse_color("rgb(18, 52, 86)").unwrap();

        assert_eq!(color.hex, "#123456");
    }

    #[test]
    fn test_parse_color_hsl_notation() {
        let color = parse_color("hsl(0, 100%, 50%)").unwrap();

        assert_eq!((color.r, color.g, color.b), (255, 0, 0));
        assert_eq!(color.hex, "#ff0000");
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0), (0, 100, 50));
        assert_eq!(rgb_to_hsl(0, 255, 0), (120, 100, 50));
        assert_eq!(rgb_to_hsl(0, 0, 255), (240, 100, 50));
    }

    #[test]
    fn test_rgb_to_hsl_greys_have_zero_saturation() {
        assert_eq!(rgb_to_hsl(0, 0, 0), (0, 0, 0));
        assert_eq!(rgb_to_hsl(255, 255, 255), (0, 0, 100));
        assert_eq!(rgb_to_hsl(128, 128, 128), (0, 0, 50));
    }

    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(0, 100, 50), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120, 100, 50), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240, 100, 50), (0, 0, 255));
    }

    #[test]
    fn test_hsl_round_trip_on_primaries() {
        for (h, s, l) in [(0, 100, 50), (120, 100, 50), (300, 100, 25)] {
            let (r, g, b) = hsl_to_rgb(h, s, l);
            assert_eq!(rgb_to_hsl(r, g, b), (h, s, l));
        }
    }

    #[test]
    fn test_parse_color_bad_hex_length() {
        assert!(parse_color("#ffff").is_err());
    }

    #[test]
    fn test_parse_color_bad_hex_digits() {
        assert!(parse_color("#gghhii").is_err());
    }

    #[test]
    fn test_parse_color_multibyte_hex_is_error_not_panic() {
        // Multibyte input can hit the 3- or 6-byte lengths the parser
        // expects; it must come back as an input error.
        for input in ["#日本", "#€", "#ааа"] {
            let result = parse_color(input);
            assert!(result.is_err(), "{input} should be rejected");
            assert!(result.unwrap_err().contains("Invalid hex digits"));
        }
    }

    #[test]
    fn test_parse_color_rgb_out_of_range() {
        let result = parse_color("rgb(300, 0, 0)");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("out of range"));
    }

    #[test]
    fn test_parse_color_hsl_out_of_range() {
        assert!(parse_color("hsl(400, 50%, 50%)").is_err());
        assert!(parse_color("hsl(100, 150%, 50%)").is_err());
    }

    #[test]
    fn test_parse_color_unrecognized() {
        let result = parse_color("bluish");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized color"));
    }

    #[test]
    fn test_parse_color_case_insensitive_and_padded() {
        assert!(parse_color("  RGB(1, 2, 3)  ").is_ok());
        assert!(parse_color("HSL(10, 20%, 30%)").is_ok());
    }
}
