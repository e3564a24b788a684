//! Hex color validation, WCAG luminance/contrast math, and hover derivation.
//!
//! Every function here is total: malformed input falls back to a safe value
//! instead of failing, because these feed a live preview that must keep
//! rendering mid-edit.

use log::warn;

/// Substitute for any color that fails validation.
pub const FALLBACK: &str = "#000000";

/// Parses a hex color into its normalized `#rrggbb` form.
///
/// Accepts input with or without the leading `#`. Returns `None` unless the
/// result is exactly `#` plus six hex digits.
pub fn parse(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let candidate = if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    };
    if candidate.len() == 7 && candidate[1..].chars().all(|c| c.is_ascii_hexdigit()) {
        Some(candidate.to_ascii_lowercase())
    } else {
        None
    }
}

/// Normalizes a raw color string, coercing anything invalid to [`FALLBACK`].
pub fn normalize(raw: &str) -> String {
    match parse(raw) {
        Some(hex) => hex,
        None => {
            warn!("invalid hex color {raw:?}, using {FALLBACK}");
            FALLBACK.to_string()
        }
    }
}

fn channels(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

fn encode(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.1, in `[0.0, 1.0]`.
///
/// `None` if the color does not parse.
pub fn relative_luminance(hex: &str) -> Option<f64> {
    let (r, g, b) = channels(hex)?;
    Some(0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b))
}

/// WCAG 2.1 contrast ratio between two colors, in `[1.0, 21.0]`.
///
/// Symmetric in its arguments. Malformed input yields the worst-case ratio
/// of 1.0 so a bad color shows up as a failing check rather than a crash.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    match (relative_luminance(a), relative_luminance(b)) {
        (Some(la), Some(lb)) => {
            let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
            (lighter + 0.05) / (darker + 0.05)
        }
        _ => 1.0,
    }
}

/// Picks pure white or pure black, whichever reads better on `background`.
pub fn best_readable_text(background: &str) -> &'static str {
    let light = contrast_ratio("#ffffff", background);
    let dark = contrast_ratio("#000000", background);
    if light > dark {
        "#ffffff"
    } else {
        "#000000"
    }
}

/// Derives a hover color by shifting the HSV value channel by 0.15.
///
/// Hue and saturation are untouched. Malformed input comes back unchanged.
pub fn derive_hover(base: &str, darken: bool) -> String {
    let Some((r, g, b)) = channels(base) else {
        return base.to_string();
    };
    let (h, s, v) = rgb_to_hsv(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    );
    let v = if darken {
        (v - 0.15).max(0.0)
    } else {
        (v + 0.15).min(1.0)
    };
    let (r, g, b) = hsv_to_rgb(h, s, v);
    encode(
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
    )
}

/// Quick perceptual lightness check used when choosing replacement text.
///
/// Uses the simple 0.299/0.587/0.114 weighting, not WCAG luminance; the
/// 0.7 threshold marks colors light enough to need dark text.
pub fn is_light(hex: &str) -> bool {
    match channels(hex) {
        Some((r, g, b)) => {
            let luminance =
                (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
            luminance > 0.7
        }
        None => false,
    }
}

// Channels in [0, 1], hue as a fraction of a turn.
fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let d = max - min;

    let h = if d == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / d).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    let s = if max == 0.0 { 0.0 } else { d / max };

    (h, s, max)
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = h * 6.0;
    let c = v * s;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_accepts_bare_digits_and_lowercases() {
        assert_eq!(normalize("A1B2C3"), "#a1b2c3");
        assert_eq!(normalize("#FFffFF"), "#ffffff");
        assert_eq!(normalize("  #abcdef  "), "#abcdef");
    }

    #[test]
    fn normalize_coerces_garbage_to_black() {
        assert_eq!(normalize(""), "#000000");
        assert_eq!(normalize("#fff"), "#000000");
        assert_eq!(normalize("#12345g"), "#000000");
        assert_eq!(normalize("not a color"), "#000000");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["#AbCdEf", "123456", "", "#zzzzzz", "#1234567"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn contrast_is_symmetric() {
        let forward = contrast_ratio("#eeeeee", "#222222");
        let backward = contrast_ratio("#222222", "#eeeeee");
        assert!((forward - backward).abs() < 1e-12);
    }

    #[test]
    fn contrast_of_a_color_with_itself_is_one() {
        assert!((contrast_ratio("#3182ce", "#3182ce") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn contrast_extremes() {
        let max = contrast_ratio("#ffffff", "#000000");
        assert!((max - 21.0).abs() < 0.01);
    }

    #[test]
    fn contrast_of_malformed_input_is_worst_case() {
        assert_eq!(contrast_ratio("nope", "#ffffff"), 1.0);
        assert_eq!(contrast_ratio("#ffffff", ""), 1.0);
    }

    #[test]
    fn light_text_on_dark_container_clears_aa() {
        let ratio = contrast_ratio("#eeeeee", "#444444");
        assert!(ratio > 8.0 && ratio < 9.0, "got {ratio}");
        assert!(ratio >= 4.5);
    }

    #[test]
    fn best_readable_text_picks_poles() {
        assert_eq!(best_readable_text("#000000"), "#ffffff");
        assert_eq!(best_readable_text("#ffffff"), "#000000");
        assert_eq!(best_readable_text("#f59e0b"), "#000000");
    }

    #[test]
    fn hover_darkens_white() {
        let hover = derive_hover("#ffffff", true);
        assert_eq!(hover, "#d8d8d8");
        assert_ne!(hover, "#ffffff");
    }

    #[test]
    fn hover_lightens_when_asked() {
        assert_eq!(derive_hover("#000000", false), "#262626");
    }

    #[test]
    fn hover_clamps_at_black() {
        assert_eq!(derive_hover("#0a0a0a", true), "#000000");
    }

    #[test]
    fn hover_preserves_hue_and_saturation() {
        // Pure red stays pure red, only darker.
        assert_eq!(derive_hover("#ff0000", true), "#d80000");
    }

    #[test]
    fn hover_on_malformed_input_is_identity() {
        assert_eq!(derive_hover("garbage", true), "garbage");
    }

    #[test]
    fn is_light_threshold() {
        assert!(is_light("#ffffff"));
        assert!(is_light("#f9fafb"));
        assert!(!is_light("#222222"));
        assert!(!is_light("not-a-color"));
    }
}
