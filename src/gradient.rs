//! Gradient synthesis: CSS directives for the header gradient line, and
//! pixel-level sampling for preview strips.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::color;

/// Which of the four gradient modes a theme uses.
///
/// Serialized lowercase to match the theme document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Preset,
    Custom,
    Solid,
    None,
}

impl Default for GradientKind {
    fn default() -> Self {
        Self::Preset
    }
}

/// A fully-resolved gradient specification, projected out of a theme's
/// flat gradient fields.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientSpec {
    None,
    Solid(String),
    Preset(String),
    Custom(Vec<String>),
}

const NO_GRADIENT: &str = "background-image: none;";

/// Builds the `background-image` directive for a gradient spec.
///
/// Unknown preset names and custom lists with no usable colors degrade to
/// the no-gradient directive rather than producing broken CSS.
pub fn to_css(spec: &GradientSpec) -> String {
    match spec {
        GradientSpec::None => NO_GRADIENT.to_string(),
        GradientSpec::Solid(color) => {
            format!("background-image: linear-gradient(to right, {color}, {color});")
        }
        GradientSpec::Preset(name) => match catalog::gradient_preset(name) {
            Some(stops) => {
                format!(
                    "background-image: linear-gradient(to right, {});",
                    stops.join(", ")
                )
            }
            None => NO_GRADIENT.to_string(),
        },
        GradientSpec::Custom(colors) => {
            let stops: Vec<&str> = colors
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .collect();
            if stops.is_empty() {
                NO_GRADIENT.to_string()
            } else {
                format!(
                    "background-image: linear-gradient(to right, {});",
                    stops.join(", ")
                )
            }
        }
    }
}

/// Linear interpolation between two colors, per channel.
///
/// `t` is clamped to `[0, 1]`; channels are clamped and truncated the same
/// way the preview renderer expects (`blend("#000000", "#ffffff", 0.5)` is
/// `#7f7f7f`, not `#808080`). Colors that fail to parse blend as black.
pub fn blend(a: &str, b: &str, t: f64) -> String {
    let (r1, g1, b1) = components_or_black(a);
    let (r2, g2, b2) = components_or_black(b);
    let t = t.clamp(0.0, 1.0);

    let mix = |from: u8, to: u8| -> u8 {
        (f64::from(from) + (f64::from(to) - f64::from(from)) * t).clamp(0.0, 255.0) as u8
    };

    format!("#{:02x}{:02x}{:02x}", mix(r1, r2), mix(g1, g2), mix(b1, b2))
}

fn components_or_black(raw: &str) -> (u8, u8, u8) {
    let hex = color::parse(raw).unwrap_or_else(|| color::FALLBACK.to_string());
    let digits = &hex[1..];
    // parse() guarantees six hex digits here.
    let r = u8::from_str_radix(&digits[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&digits[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&digits[4..6], 16).unwrap_or(0);
    (r, g, b)
}

/// Result of sampling a gradient for an on-screen preview strip.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientPreview {
    /// Nothing usable to draw; the surface should show a placeholder.
    NoValidColors,
    /// One valid color: a uniform fill, no interpolation.
    Uniform(String),
    /// One `(pixel column, color)` pair per column across the strip.
    Samples(Vec<(u32, String)>),
}

/// Samples a multi-stop gradient across `width` pixel columns.
///
/// The strip is divided into `len - 1` equal segments; each column blends
/// the two colors anchoring its segment. Invalid entries are dropped before
/// sampling.
pub fn preview(colors: &[String], width: u32) -> GradientPreview {
    let valid: Vec<String> = colors.iter().filter_map(|c| color::parse(c)).collect();

    match valid.len() {
        0 => GradientPreview::NoValidColors,
        1 => GradientPreview::Uniform(valid[0].clone()),
        _ => {
            let segments = valid.len() - 1;
            let segment_width = f64::from(width) / segments as f64;
            let mut samples = Vec::with_capacity(width as usize);

            for i in 0..segments {
                let start = (i as f64 * segment_width) as u32;
                let end = if i == segments - 1 {
                    width
                } else {
                    ((i + 1) as f64 * segment_width) as u32
                };
                for x in start..end {
                    let progress = if segment_width > 0.0 {
                        (f64::from(x) - i as f64 * segment_width) / segment_width
                    } else {
                        0.0
                    };
                    samples.push((x, blend(&valid[i], &valid[i + 1], progress)));
                }
            }
            GradientPreview::Samples(samples)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_disables_background_image() {
        assert_eq!(to_css(&GradientSpec::None), "background-image: none;");
    }

    #[test]
    fn solid_renders_as_flat_two_stop_gradient() {
        assert_eq!(
            to_css(&GradientSpec::Solid("#06bb8e".to_string())),
            "background-image: linear-gradient(to right, #06bb8e, #06bb8e);"
        );
    }

    #[test]
    fn rainbow_preset_uses_all_nine_stops_in_order() {
        let css = to_css(&GradientSpec::Preset("rainbow".to_string()));
        assert_eq!(
            css,
            "background-image: linear-gradient(to right, #87ceeb, #0000ff, #800080, \
             #8b0000, #ff0000, #ffa500, #ffff00, #90ee90, #006400);"
        );
    }

    #[test]
    fn unknown_preset_degrades_to_none() {
        let css = to_css(&GradientSpec::Preset("plaid".to_string()));
        assert_eq!(css, "background-image: none;");
    }

    #[test]
    fn custom_filters_blank_entries() {
        let spec = GradientSpec::Custom(vec![
            "#ff0000".to_string(),
            "  ".to_string(),
            "#0000ff".to_string(),
        ]);
        assert_eq!(
            to_css(&spec),
            "background-image: linear-gradient(to right, #ff0000, #0000ff);"
        );
    }

    #[test]
    fn custom_with_only_blanks_degrades_to_none() {
        let spec = GradientSpec::Custom(vec![String::new(), " ".to_string()]);
        assert_eq!(to_css(&spec), "background-image: none;");
    }

    #[test]
    fn blend_midpoint_truncates() {
        assert_eq!(blend("#000000", "#ffffff", 0.5), "#7f7f7f");
    }

    #[test]
    fn blend_clamps_t() {
        assert_eq!(blend("#102030", "#405060", -1.0), "#102030");
        assert_eq!(blend("#102030", "#405060", 2.0), "#405060");
    }

    #[test]
    fn blend_treats_malformed_input_as_black() {
        assert_eq!(blend("oops", "oops", 0.5), "#000000");
    }

    #[test]
    fn preview_with_no_usable_colors_signals_explicitly() {
        let colors = vec![String::new(), "bad".to_string()];
        assert_eq!(preview(&colors, 100), GradientPreview::NoValidColors);
    }

    #[test]
    fn preview_single_color_is_uniform() {
        let colors = vec!["#AABBCC".to_string()];
        assert_eq!(
            preview(&colors, 100),
            GradientPreview::Uniform("#aabbcc".to_string())
        );
    }

    #[test]
    fn preview_covers_every_column() {
        let colors = vec!["#000000".to_string(), "#ffffff".to_string()];
        match preview(&colors, 10) {
            GradientPreview::Samples(samples) => {
                assert_eq!(samples.len(), 10);
                assert_eq!(samples[0], (0, "#000000".to_string()));
                assert_eq!(samples[9].0, 9);
            }
            other => panic!("expected samples, got {other:?}"),
        }
    }

    #[test]
    fn preview_three_stops_still_covers_width() {
        let colors = vec![
            "#ff0000".to_string(),
            "#00ff00".to_string(),
            "#0000ff".to_string(),
        ];
        match preview(&colors, 9) {
            GradientPreview::Samples(samples) => {
                assert_eq!(samples.len(), 9);
                let columns: Vec<u32> = samples.iter().map(|(x, _)| *x).collect();
                assert_eq!(columns, (0..9).collect::<Vec<_>>());
            }
            other => panic!("expected samples, got {other:?}"),
        }
    }
}
