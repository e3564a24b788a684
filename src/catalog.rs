//! Static preset data: named gradient stop lists and full theme presets.
//!
//! Pure data, no computation. Presets are the one-step starting points the
//! editing surface offers before fine-tuning.

use crate::gradient::GradientKind;
use crate::theme::{InteractionColors, Theme, VisualScheme};

/// Looks up a named gradient preset's stop list.
pub fn gradient_preset(name: &str) -> Option<&'static [&'static str]> {
    let stops: &'static [&'static str] = match name {
        "rainbow" => &[
            "#87ceeb", "#0000ff", "#800080", "#8b0000", "#ff0000", "#ffa500", "#ffff00",
            "#90ee90", "#006400",
        ],
        "fire" => &["#ff4500", "#ff6347", "#ff8c00", "#ffd700", "#ffff00"],
        "ocean" => &["#000080", "#0000cd", "#1e90ff", "#00bfff", "#87ceeb"],
        "sunset" => &["#ff4500", "#ff6347", "#ff69b4", "#dda0dd", "#9370db"],
        "forest" => &["#228b22", "#32cd32", "#90ee90", "#98fb98", "#f0fff0"],
        "cyber" => &["#00ffff", "#0080ff", "#8000ff", "#ff00ff", "#ff0080"],
        "grayscale" => &["#000000", "#404040", "#808080", "#c0c0c0", "#ffffff"],
        "warm" => &["#8b0000", "#dc143c", "#ff6347", "#ffa500", "#ffd700"],
        "cool" => &["#000080", "#4169e1", "#6495ed", "#87ceeb", "#b0e0e6"],
        "neon" => &["#ff1493", "#00ff00", "#1e90ff", "#ffd700", "#ff69b4"],
        _ => return None,
    };
    Some(stops)
}

/// All gradient preset names, in presentation order.
pub const fn gradient_preset_names() -> &'static [&'static str] {
    &[
        "rainbow",
        "fire",
        "ocean",
        "sunset",
        "forest",
        "cyber",
        "grayscale",
        "warm",
        "cool",
        "neon",
    ]
}

/// All theme preset names, in presentation order.
pub const fn theme_preset_names() -> &'static [&'static str] {
    &[
        "Default Dark",
        "Corporate Blue",
        "Forest Green",
        "Purple Haze",
        "Light Professional",
        "Prism Infosec",
    ]
}

/// Builds a full theme from a named preset.
///
/// Returns `None` if the name is not recognized.
pub fn theme_preset(name: &str) -> Option<Theme> {
    let (visual_scheme, interaction_colors) = match name {
        "Default Dark" => (
            VisualScheme {
                header_primary: "#06bb8e".into(),
                header_text: "#ffffff".into(),
                page_background: "#222222".into(),
                container_background: "#444444".into(),
                container_light: "#555555".into(),
                sidebar_bg: "#2d3748".into(),
                sidebar_text: "#e2e8f0".into(),
                sidebar_header_bg: "#4a5568".into(),
                sidebar_header_text: "#ffffff".into(),
                detection_bg: "#7f1d1d".into(),
                detection_text: "#ffffff".into(),
                detection_header_bg: "#dc2626".into(),
                detection_header_text: "#ffffff".into(),
                contingency_bg: "#064e3b".into(),
                contingency_text: "#ffffff".into(),
                contingency_header_bg: "#059669".into(),
                contingency_header_text: "#ffffff".into(),
                warning_bg: "#7f1d1d".into(),
                warning_text: "#ffffff".into(),
                text_primary: "#eeeeee".into(),
                text_secondary: "#9ca3af".into(),
                h1_color: "#ffffff".into(),
                h2_color: "#ffffff".into(),
                h3_color: "#ffffff".into(),
                h4_color: "#e5e7eb".into(),
                h5_color: "#d1d5db".into(),
                h6_color: "#9ca3af".into(),
                border_color: "#666666".into(),
                accent_border: "#4a5568".into(),
                header_gradient_type: GradientKind::Preset,
                header_gradient_preset: "rainbow".into(),
                header_gradient_solid_color: "#06bb8e".into(),
                table_header_bg: "#3182ce".into(),
                table_header_text: "#ffffff".into(),
                table_row_bg: "#374151".into(),
                table_row_alt: "#4b5563".into(),
                table_text: "#e5e7eb".into(),
                table_border: "#6b7280".into(),
                input_bg: "#374151".into(),
                input_border: "#6b7280".into(),
                input_text: "#f3f4f6".into(),
                input_placeholder: "#9ca3af".into(),
                input_focus_border: "#60a5fa".into(),
                form_label: "#d1d5db".into(),
                ..VisualScheme::default()
            },
            InteractionColors {
                primary: "#3182ce".into(),
                primary_hover: "#2c5282".into(),
                secondary: "#059669".into(),
                secondary_hover: "#047857".into(),
                accent: "#c20066".into(),
                accent_hover: "#a0004d".into(),
                danger: "#dc2626".into(),
                danger_hover: "#b91c1c".into(),
                warning: "#f59e0b".into(),
                warning_hover: "#d97706".into(),
            },
        ),
        "Corporate Blue" => (
            VisualScheme {
                header_primary: "#1e3a8a".into(),
                header_text: "#ffffff".into(),
                page_background: "#0f172a".into(),
                container_background: "#1e293b".into(),
                container_light: "#334155".into(),
                sidebar_bg: "#1e293b".into(),
                sidebar_text: "#f1f5f9".into(),
                sidebar_header_bg: "#334155".into(),
                sidebar_header_text: "#ffffff".into(),
                detection_bg: "#7f1d1d".into(),
                detection_text: "#ffffff".into(),
                detection_header_bg: "#dc2626".into(),
                detection_header_text: "#ffffff".into(),
                contingency_bg: "#064e3b".into(),
                contingency_text: "#ffffff".into(),
                contingency_header_bg: "#059669".into(),
                contingency_header_text: "#ffffff".into(),
                warning_bg: "#7f1d1d".into(),
                warning_text: "#ffffff".into(),
                text_primary: "#f1f5f9".into(),
                text_secondary: "#94a3b8".into(),
                h1_color: "#ffffff".into(),
                h2_color: "#e2e8f0".into(),
                h3_color: "#cbd5e1".into(),
                h4_color: "#94a3b8".into(),
                h5_color: "#64748b".into(),
                h6_color: "#475569".into(),
                border_color: "#475569".into(),
                accent_border: "#64748b".into(),
                header_gradient_type: GradientKind::Preset,
                header_gradient_preset: "ocean".into(),
                header_gradient_solid_color: "#1e3a8a".into(),
                table_header_bg: "#1e40af".into(),
                table_header_text: "#ffffff".into(),
                table_row_bg: "#334155".into(),
                table_row_alt: "#475569".into(),
                table_text: "#e2e8f0".into(),
                table_border: "#64748b".into(),
                input_bg: "#334155".into(),
                input_border: "#64748b".into(),
                input_text: "#f1f5f9".into(),
                input_placeholder: "#94a3b8".into(),
                input_focus_border: "#3b82f6".into(),
                form_label: "#cbd5e1".into(),
                ..VisualScheme::default()
            },
            InteractionColors {
                primary: "#3b82f6".into(),
                primary_hover: "#2563eb".into(),
                secondary: "#06b6d4".into(),
                secondary_hover: "#0891b2".into(),
                accent: "#f59e0b".into(),
                accent_hover: "#d97706".into(),
                danger: "#f87171".into(),
                danger_hover: "#ef4444".into(),
                warning: "#fbbf24".into(),
                warning_hover: "#f59e0b".into(),
            },
        ),
        "Forest Green" => (
            VisualScheme {
                header_primary: "#166534".into(),
                header_text: "#ffffff".into(),
                page_background: "#0c1810".into(),
                container_background: "#1f2937".into(),
                container_light: "#374151".into(),
                sidebar_bg: "#1f2937".into(),
                sidebar_text: "#f9fafb".into(),
                sidebar_header_bg: "#374151".into(),
                sidebar_header_text: "#ffffff".into(),
                detection_bg: "#7f1d1d".into(),
                detection_text: "#ffffff".into(),
                detection_header_bg: "#dc2626".into(),
                detection_header_text: "#ffffff".into(),
                contingency_bg: "#064e3b".into(),
                contingency_text: "#ffffff".into(),
                contingency_header_bg: "#059669".into(),
                contingency_header_text: "#ffffff".into(),
                warning_bg: "#7f1d1d".into(),
                warning_text: "#ffffff".into(),
                text_primary: "#f9fafb".into(),
                text_secondary: "#9ca3af".into(),
                h1_color: "#ffffff".into(),
                h2_color: "#f3f4f6".into(),
                h3_color: "#e5e7eb".into(),
                h4_color: "#d1d5db".into(),
                h5_color: "#9ca3af".into(),
                h6_color: "#6b7280".into(),
                border_color: "#4b5563".into(),
                accent_border: "#6b7280".into(),
                header_gradient_type: GradientKind::Preset,
                header_gradient_preset: "forest".into(),
                header_gradient_solid_color: "#166534".into(),
                table_header_bg: "#059669".into(),
                table_header_text: "#ffffff".into(),
                table_row_bg: "#374151".into(),
                table_row_alt: "#4b5563".into(),
                table_text: "#e5e7eb".into(),
                table_border: "#6b7280".into(),
                input_bg: "#374151".into(),
                input_border: "#6b7280".into(),
                input_text: "#f9fafb".into(),
                input_placeholder: "#9ca3af".into(),
                input_focus_border: "#10b981".into(),
                form_label: "#d1d5db".into(),
                ..VisualScheme::default()
            },
            InteractionColors {
                primary: "#22c55e".into(),
                primary_hover: "#16a34a".into(),
                secondary: "#f97316".into(),
                secondary_hover: "#ea580c".into(),
                accent: "#eab308".into(),
                accent_hover: "#ca8a04".into(),
                danger: "#f87171".into(),
                danger_hover: "#ef4444".into(),
                warning: "#fbbf24".into(),
                warning_hover: "#f59e0b".into(),
            },
        ),
        "Purple Haze" => (
            VisualScheme {
                header_primary: "#7c2d12".into(),
                header_text: "#ffffff".into(),
                page_background: "#1c1917".into(),
                container_background: "#292524".into(),
                container_light: "#44403c".into(),
                sidebar_bg: "#292524".into(),
                sidebar_text: "#fafaf9".into(),
                sidebar_header_bg: "#44403c".into(),
                sidebar_header_text: "#ffffff".into(),
                detection_bg: "#7f1d1d".into(),
                detection_text: "#ffffff".into(),
                detection_header_bg: "#dc2626".into(),
                detection_header_text: "#ffffff".into(),
                contingency_bg: "#064e3b".into(),
                contingency_text: "#ffffff".into(),
                contingency_header_bg: "#059669".into(),
                contingency_header_text: "#ffffff".into(),
                warning_bg: "#7f1d1d".into(),
                warning_text: "#ffffff".into(),
                text_primary: "#fafaf9".into(),
                text_secondary: "#a8a29e".into(),
                h1_color: "#ffffff".into(),
                h2_color: "#f5f5f4".into(),
                h3_color: "#e7e5e4".into(),
                h4_color: "#d6d3d1".into(),
                h5_color: "#a8a29e".into(),
                h6_color: "#78716c".into(),
                border_color: "#57534e".into(),
                accent_border: "#78716c".into(),
                header_gradient_type: GradientKind::Preset,
                header_gradient_preset: "sunset".into(),
                header_gradient_solid_color: "#7c2d12".into(),
                table_header_bg: "#92400e".into(),
                table_header_text: "#ffffff".into(),
                table_row_bg: "#44403c".into(),
                table_row_alt: "#57534e".into(),
                table_text: "#e7e5e4".into(),
                table_border: "#78716c".into(),
                input_bg: "#44403c".into(),
                input_border: "#78716c".into(),
                input_text: "#fafaf9".into(),
                input_placeholder: "#a8a29e".into(),
                input_focus_border: "#f59e0b".into(),
                form_label: "#d6d3d1".into(),
                ..VisualScheme::default()
            },
            InteractionColors {
                primary: "#a855f7".into(),
                primary_hover: "#9333ea".into(),
                secondary: "#f59e0b".into(),
                secondary_hover: "#d97706".into(),
                accent: "#ec4899".into(),
                accent_hover: "#db2777".into(),
                danger: "#f87171".into(),
                danger_hover: "#ef4444".into(),
                warning: "#fbbf24".into(),
                warning_hover: "#f59e0b".into(),
            },
        ),
        "Light Professional" => (
            VisualScheme {
                header_primary: "#2563eb".into(),
                header_text: "#ffffff".into(),
                page_background: "#f8fafc".into(),
                container_background: "#ffffff".into(),
                container_light: "#f1f5f9".into(),
                sidebar_bg: "#ffffff".into(),
                sidebar_text: "#334155".into(),
                sidebar_header_bg: "#e2e8f0".into(),
                sidebar_header_text: "#1e293b".into(),
                detection_bg: "#dc2626".into(),
                detection_text: "#ffffff".into(),
                detection_header_bg: "#b91c1c".into(),
                detection_header_text: "#ffffff".into(),
                contingency_bg: "#059669".into(),
                contingency_text: "#ffffff".into(),
                contingency_header_bg: "#047857".into(),
                contingency_header_text: "#ffffff".into(),
                warning_bg: "#dc2626".into(),
                warning_text: "#ffffff".into(),
                text_primary: "#1e293b".into(),
                text_secondary: "#64748b".into(),
                h1_color: "#0f172a".into(),
                h2_color: "#1e293b".into(),
                h3_color: "#334155".into(),
                h4_color: "#475569".into(),
                h5_color: "#64748b".into(),
                h6_color: "#94a3b8".into(),
                border_color: "#cbd5e1".into(),
                accent_border: "#94a3b8".into(),
                header_gradient_type: GradientKind::Solid,
                header_gradient_preset: "rainbow".into(),
                header_gradient_solid_color: "#2563eb".into(),
                table_header_bg: "#3b82f6".into(),
                table_header_text: "#ffffff".into(),
                table_row_bg: "#ffffff".into(),
                table_row_alt: "#f8fafc".into(),
                table_text: "#1e293b".into(),
                table_border: "#e2e8f0".into(),
                input_bg: "#ffffff".into(),
                input_border: "#d1d5db".into(),
                input_text: "#1e293b".into(),
                input_placeholder: "#9ca3af".into(),
                input_focus_border: "#3b82f6".into(),
                form_label: "#374151".into(),
                ..VisualScheme::default()
            },
            InteractionColors {
                primary: "#1e40af".into(),
                primary_hover: "#1e3a8a".into(),
                secondary: "#047857".into(),
                secondary_hover: "#065f46".into(),
                accent: "#7c2d12".into(),
                accent_hover: "#92400e".into(),
                danger: "#dc2626".into(),
                danger_hover: "#b91c1c".into(),
                warning: "#d97706".into(),
                warning_hover: "#b45309".into(),
            },
        ),
        "Prism Infosec" => (
            VisualScheme {
                header_primary: "#02ffe0".into(),
                header_text: "#1e164d".into(),
                page_background: "#ccfff9".into(),
                container_background: "#ffffff".into(),
                container_light: "#f0fffe".into(),
                sidebar_bg: "#ffffff".into(),
                sidebar_text: "#1e164d".into(),
                sidebar_header_bg: "#80d6d3".into(),
                sidebar_header_text: "#1e164d".into(),
                detection_bg: "#dc2626".into(),
                detection_text: "#ffffff".into(),
                detection_header_bg: "#b91c1c".into(),
                detection_header_text: "#ffffff".into(),
                contingency_bg: "#059669".into(),
                contingency_text: "#ffffff".into(),
                contingency_header_bg: "#047857".into(),
                contingency_header_text: "#ffffff".into(),
                warning_bg: "#dc2626".into(),
                warning_text: "#ffffff".into(),
                text_primary: "#1e164d".into(),
                text_secondary: "#2a1f5f".into(),
                h1_color: "#1e164d".into(),
                h2_color: "#2a235f".into(),
                h3_color: "#363071".into(),
                h4_color: "#423d83".into(),
                h5_color: "#4e4a95".into(),
                h6_color: "#5a57a7".into(),
                border_color: "#80d6d3".into(),
                accent_border: "#02ffe0".into(),
                header_gradient_type: GradientKind::Preset,
                header_gradient_preset: "cyber".into(),
                header_gradient_solid_color: "#02ffe0".into(),
                table_header_bg: "#02ffe0".into(),
                table_header_text: "#1e164d".into(),
                table_row_bg: "#ffffff".into(),
                table_row_alt: "#f0fffe".into(),
                table_text: "#1e164d".into(),
                table_border: "#80d6d3".into(),
                input_bg: "#ffffff".into(),
                input_border: "#80d6d3".into(),
                input_text: "#1e164d".into(),
                input_placeholder: "#4a4a8a".into(),
                input_focus_border: "#02ffe0".into(),
                form_label: "#1e164d".into(),
                ..VisualScheme::default()
            },
            InteractionColors {
                primary: "#0891b2".into(),
                primary_hover: "#0e7490".into(),
                secondary: "#7c3aed".into(),
                secondary_hover: "#6d28d9".into(),
                accent: "#db2777".into(),
                accent_hover: "#be185d".into(),
                danger: "#dc2626".into(),
                danger_hover: "#b91c1c".into(),
                warning: "#d97706".into(),
                warning_hover: "#b45309".into(),
            },
        ),
        _ => return None,
    };

    Some(Theme {
        name: name.to_string(),
        visual_scheme,
        interaction_colors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn every_gradient_preset_resolves_with_valid_stops() {
        for name in gradient_preset_names() {
            let stops = gradient_preset(name).unwrap_or_else(|| panic!("missing preset {name}"));
            assert!(stops.len() >= 2, "{name} has too few stops");
            assert!(stops.len() <= 9, "{name} has too many stops");
            for stop in stops {
                assert_eq!(color::normalize(stop), *stop, "bad stop in {name}");
            }
        }
    }

    #[test]
    fn unknown_gradient_preset_is_none() {
        assert!(gradient_preset("lava-lamp").is_none());
    }

    #[test]
    fn every_theme_preset_resolves() {
        for name in theme_preset_names() {
            let theme = theme_preset(name).unwrap_or_else(|| panic!("missing preset {name}"));
            assert_eq!(theme.name, *name);
        }
    }

    #[test]
    fn unknown_theme_preset_is_none() {
        assert!(theme_preset("Vaporwave").is_none());
    }

    #[test]
    fn default_dark_preset_values() {
        let theme = theme_preset("Default Dark").unwrap();
        assert_eq!(theme.visual_scheme.header_primary, "#06bb8e");
        assert_eq!(theme.visual_scheme.table_row_bg, "#374151");
        assert_eq!(theme.visual_scheme.header_gradient_preset, "rainbow");
        assert_eq!(theme.interaction_colors.accent, "#c20066");
    }

    #[test]
    fn preset_colors_are_already_normalized() {
        for name in theme_preset_names() {
            let theme = theme_preset(name).unwrap();
            let json = theme.to_json().unwrap();
            let reloaded = Theme::from_json(&json).unwrap();
            // Sanitizing on load must be a no-op for catalog data.
            assert_eq!(reloaded, theme);
        }
    }
}
