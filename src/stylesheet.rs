//! Assembles the final themed stylesheet: a best-effort literal color
//! substitution over the existing CSS, followed by a generated override
//! block that wins over the original rules via `!important`.
//!
//! The substitution pass only knows three legacy color tokens. That is
//! deliberate: anything broader would need real CSS parsing, and the
//! override block already covers every themed surface.

use std::sync::OnceLock;

use log::warn;
use regex::Regex;

use crate::gradient::{self, GradientKind};
use crate::theme::{Theme, VisualScheme};

// Legacy short-hex tokens still present in the stock stylesheet.
const LEGACY_TOKENS: [&str; 3] = ["#222", "#444", "#fff"];

fn legacy_patterns() -> &'static [(&'static str, Regex)] {
    static PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        LEGACY_TOKENS
            .iter()
            .filter_map(|token| {
                // A trailing hex digit means the token is a prefix of some
                // longer color, not the token itself.
                let pattern = format!("(?i){}([^0-9a-fA-F]|$)", regex::escape(token));
                match Regex::new(&pattern) {
                    Ok(re) => Some((*token, re)),
                    Err(error) => {
                        warn!("skipping legacy token {token}: {error}");
                        None
                    }
                }
            })
            .collect()
    })
}

fn legacy_replacement<'a>(token: &str, scheme: &'a VisualScheme) -> &'a str {
    match token {
        "#222" => &scheme.page_background,
        "#444" => &scheme.container_background,
        _ => &scheme.text_primary,
    }
}

/// Rewrites the known legacy color tokens to their themed counterparts.
///
/// Exact-token, case-insensitive, best effort. Tokens that already match
/// the theme color are left alone.
pub fn substitute_legacy_colors(css: &str, scheme: &VisualScheme) -> String {
    let mut result = css.to_string();
    for (token, pattern) in legacy_patterns() {
        let replacement = legacy_replacement(token, scheme);
        if token.eq_ignore_ascii_case(replacement) {
            continue;
        }
        result = pattern
            .replace_all(&result, format!("{replacement}${{1}}"))
            .into_owned();
    }
    result
}

/// Human-readable one-line summary of the theme's gradient settings.
pub fn gradient_description(theme: &Theme) -> String {
    let scheme = &theme.visual_scheme;
    match scheme.header_gradient_type {
        GradientKind::None => "Type: None - No gradient applied".to_string(),
        GradientKind::Solid => format!(
            "Type: Solid Color - {}",
            scheme.header_gradient_solid_color
        ),
        GradientKind::Preset => format!(
            "Type: Preset - {}",
            title_case(&scheme.header_gradient_preset)
        ),
        GradientKind::Custom => {
            let valid: Vec<&str> = scheme
                .header_gradient_colors
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .collect();
            if valid.is_empty() {
                "Type: Custom - No colors defined".to_string()
            } else if valid.len() > 5 {
                format!(
                    "Type: Custom - {} (and {} more)",
                    valid[..5].join(", "),
                    valid.len() - 5
                )
            } else {
                format!("Type: Custom - {}", valid.join(", "))
            }
        }
    }
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Produces the complete themed stylesheet.
///
/// Output layout is fixed: header comment, then the (substituted) existing
/// stylesheet if one was supplied, then the override block. The selector
/// catalog in the override block is what the surrounding renderer expects;
/// it must not be reordered or renamed.
pub fn generate(theme: &Theme, existing_css: Option<&str>) -> String {
    let substituted = existing_css
        .map(|css| substitute_legacy_colors(css, &theme.visual_scheme))
        .unwrap_or_default();

    let header = header_comment(theme);
    let overrides = override_block(theme);

    format!("{header}{substituted}\n\n{overrides}")
}

fn header_comment(theme: &Theme) -> String {
    let s = &theme.visual_scheme;
    format!(
        "/*\n\
         \x20* Sim-Adversary Game Engine - Custom Visual Theme\n\
         \x20* Generated by restyle\n\
         \x20* Theme: {name}\n\
         \x20*\n\
         \x20* SIDEBAR THEME:\n\
         \x20* Panel BG: {sidebar_bg}\n\
         \x20* Panel Text: {sidebar_text}\n\
         \x20* Header BG: {sidebar_header_bg}\n\
         \x20* Header Text: {sidebar_header_text}\n\
         \x20*\n\
         \x20* ALERT/DIALOG THEME:\n\
         \x20* Detection BG: {detection_bg}\n\
         \x20* Detection Text: {detection_text}\n\
         \x20* Contingency BG: {contingency_bg}\n\
         \x20* Contingency Text: {contingency_text}\n\
         \x20* Warning BG: {warning_bg}\n\
         \x20* Warning Text: {warning_text}\n\
         \x20*/\n\n",
        name = theme.name,
        sidebar_bg = s.sidebar_bg,
        sidebar_text = s.sidebar_text,
        sidebar_header_bg = s.sidebar_header_bg,
        sidebar_header_text = s.sidebar_header_text,
        detection_bg = s.detection_bg,
        detection_text = s.detection_text,
        contingency_bg = s.contingency_bg,
        contingency_text = s.contingency_text,
        warning_bg = s.warning_bg,
        warning_text = s.warning_text,
    )
}

fn override_block(theme: &Theme) -> String {
    let gradient_css = gradient::to_css(&theme.gradient_spec());
    let primary = &theme.interaction_colors.primary;
    let primary_hover = &theme.interaction_colors.primary_hover;

    let VisualScheme {
        header_primary,
        header_text,
        page_background,
        container_background,
        container_light,
        sidebar_bg,
        sidebar_text,
        sidebar_header_bg,
        sidebar_header_text,
        detection_bg,
        detection_text,
        detection_header_bg,
        detection_header_text,
        contingency_bg,
        contingency_text,
        contingency_header_bg,
        contingency_header_text,
        warning_bg,
        warning_text,
        text_primary,
        text_secondary,
        h1_color,
        h2_color,
        h3_color,
        h4_color,
        h5_color,
        h6_color,
        border_color,
        table_header_bg,
        table_header_text,
        table_row_bg,
        table_row_alt,
        table_text,
        table_border,
        input_bg,
        input_border,
        input_text,
        input_focus_border,
        form_label,
        ..
    } = &theme.visual_scheme;

    format!(
        r#"/* --- THEME OVERRIDES (GENERATED) --- */

/* Body and General Layout */
body {{
    background-color: {page_background} !important;
    color: {text_primary} !important;
}}

/* Header */
header {{
    background-color: {header_primary} !important;
    color: {header_text} !important;
    {gradient_css}
}}

/* Header Text (H1-H6) */
h1 {{ color: {h1_color} !important; }}
h2 {{ color: {h2_color} !important; }}
h3 {{ color: {h3_color} !important; }}
h4 {{ color: {h4_color} !important; }}
h5 {{ color: {h5_color} !important; }}
h6 {{ color: {h6_color} !important; }}

/* Containers and Panels */
#stepContainer, .form-container, .game-info-panel, .stats-section, .path-section, .event-modal {{
    background: {container_background} !important;
    color: {text_primary} !important;
    border-color: {border_color} !important;
}}

/* === SIDEBAR OVERRIDES === */
.sidebar-section, #inventory, #timer {{
    background: {sidebar_bg} !important;
    color: {sidebar_text} !important;
    border: 1px solid {border_color} !important;
}}
.sidebar-header, #inventory h3 {{
    background: {sidebar_header_bg} !important;
    color: {sidebar_header_text} !important;
    border-bottom: 1px solid {border_color} !important;
}}
.sidebar-section .stat-label, .sidebar-section .config-label,
.sidebar-section .stat-value, .sidebar-section .config-value,
#inventory-list li {{
    color: {sidebar_text} !important;
    background: transparent !important;
    border-left: none !important;
}}
#inventory-list li {{
    border-bottom: 1px solid {border_color} !important;
}}
#inventory-list li:last-child {{
     border-bottom: none !important;
}}
.sidebar-section .stat-item:hover, #inventory-list li:hover {{
    background-color: {container_light} !important;
}}
.sidebar-header *, #inventory h3 * {{
    color: {sidebar_header_text} !important;
}}
/* === END SIDEBAR OVERRIDES === */

/* === DETECTION & ALERT DIALOG OVERRIDES === */
.detection-dialog, .failure-dialog.exhausted {{
    background: {detection_bg} !important;
    color: {detection_text} !important;
    border-color: {detection_bg} !important;
}}

.detection-header, .failure-dialog h3 {{
    background: {detection_header_bg} !important;
    color: {detection_header_text} !important;
}}

.detection-content, .detection-warning, .failure-dialog p, .failure-dialog span {{
    color: {detection_text} !important;
}}

/* Force all text elements in detection dialogs to use white text */
.detection-dialog .contingency-count,
.detection-dialog .contingency-remaining,
.detection-dialog .cost-label,
.detection-dialog .cost-value,
.detection-dialog .contingency-count.high,
.detection-dialog .contingency-count.medium,
.detection-dialog .contingency-count.low {{
    color: {detection_text} !important;
}}

.detection-dialog .count-icon,
.detection-dialog .btn-icon {{
    filter: brightness(0) invert(1) !important; /* Makes icons white */
}}

/* Ensure detection warning text is readable */
.detection-dialog .detection-warning * {{
    color: {detection_text} !important;
}}

.detection-dialog .detection-header,
.detection-dialog .detection-header *,
.detection-dialog h3,
.detection-dialog .header-icon + div,
.detection-dialog .detection-header div {{
    color: {detection_header_text} !important;
}}

/* Force button text in detection dialogs to be white */
.detection-dialog .contingency-btn,
.detection-dialog .contingency-btn *,
.detection-dialog .alternative-btn,
.detection-dialog .alternative-btn *,
.detection-dialog .btn-text,
.detection-dialog .btn-cost,
.detection-dialog button {{
    color: {detection_text} !important;
}}

/* Ensure any remaining text elements are white */
.detection-dialog .detection-actions *,
.detection-dialog .detection-content strong,
.detection-dialog span,
.detection-dialog div {{
    color: {detection_text} !important;
}}

.contingency-dialog, .success-dialog {{
    background: {contingency_bg} !important;
    color: {contingency_text} !important;
    border-color: {contingency_bg} !important;
}}

.contingency-header, .success-header {{
    background: {contingency_header_bg} !important;
    color: {contingency_header_text} !important;
}}

.contingency-content, .contingency-message, .success-content {{
    color: {contingency_text} !important;
}}

.warning-banner {{
    background: {warning_bg} !important;
    color: {warning_text} !important;
    border-left-color: {warning_bg} !important;
}}

.warning-banner h4, .warning-banner p, .warning-banner strong {{
    color: {warning_text} !important;
}}

/* Override any failure dialog text colors to ensure readability */
.failure-dialog.exhausted *, .failure-dialog.normal *,
.detection-dialog *, .contingency-dialog *, .success-dialog * {{
    color: inherit !important;
}}

.failure-dialog.exhausted .stats-box,
.detection-warning, .contingency-message {{
    background: rgba(0, 0, 0, 0.2) !important;
    border-color: rgba(255, 255, 255, 0.1) !important;
}}
/* === END DETECTION & ALERT DIALOG OVERRIDES === */

/* Table Styling */
.stats-header, .past-paths-table th, .decision-path-table th, .game-summary-table th, .events-table th, .path-header,.event-analysis-section, .event-analysis-section h4, .events-section, .events-overview , .events-overview p, .event-timeline-table, .event-timeline-table th   {{
    background: {table_header_bg} !important;
    color: {table_header_text} !important;
    border-color: {table_border} !important;
}}
.past-paths-table td, .decision-path-table td, .game-summary-table td, .events-table td, .event-timeline-table td {{
    background-color: {table_row_bg} !important;
    color: {table_text} !important;
    border-color: {table_border} !important;
}}
.past-paths-table tr:nth-child(even) td, .decision-path-table tr:nth-child(even) td, .game-summary-table tr:nth-child(even) td, .event-timeline-table tr:nth-child(even) {{
    background-color: {table_row_alt} !important;
}}
.past-paths-table *, .decision-path-table *, .game-summary-table * {{
     color: {table_text} !important;
}}

/* Form Styling */
input, .input-field, textarea, select {{
    background-color: {input_bg} !important;
    color: {input_text} !important;
    border: 1px solid {input_border} !important;
}}
input:focus, .input-field:focus, textarea:focus, select:focus {{
    border-color: {input_focus_border} !important;
    outline: none !important;
}}
label, .form-label, .detection-dialog, .detection-header, .detection-content, .detection-warning  {{
    color: {form_label} !important;
}}

.choice-btn.active {{
    background-color: {primary} !important;
    border-color: {primary} !important;
}}

.choice-btn.active:hover {{
    background-color: {primary_hover} !important;
    border-color: {primary_hover} !important;
}}

/* General Text Elements */
p, div, span, li, a {{
    color: inherit !important;
}}
.text-secondary {{
    color: {text_secondary} !important;
}}
/* --- END THEME OVERRIDES --- */
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Theme, VisualRole};

    #[test]
    fn generation_without_input_is_still_complete() {
        let theme = Theme::default();
        let css = generate(&theme, None);
        assert!(!css.is_empty());
        assert!(css.contains("Theme: Default Dark"));
        assert!(css.contains("/* --- THEME OVERRIDES (GENERATED) --- */"));
        assert!(css.contains("/* --- END THEME OVERRIDES --- */"));
    }

    #[test]
    fn output_is_a_superset_of_the_input() {
        let theme = Theme::default();
        let input = ".custom-rule { margin: 4px; }";
        let css = generate(&theme, Some(input));
        assert!(css.contains(input));
        assert!(css.contains("/* --- THEME OVERRIDES (GENERATED) --- */"));
    }

    #[test]
    fn body_rule_uses_theme_colors_with_important() {
        let theme = Theme::default().with_visual(VisualRole::PageBackground, "#101010");
        let css = generate(&theme, None);
        assert!(css.contains("background-color: #101010 !important;"));
    }

    #[test]
    fn header_rule_embeds_gradient_directive() {
        let theme = Theme::default();
        let css = generate(&theme, None);
        assert!(css.contains(
            "background-image: linear-gradient(to right, #87ceeb, #0000ff, #800080, \
             #8b0000, #ff0000, #ffa500, #ffff00, #90ee90, #006400);"
        ));
    }

    #[test]
    fn legacy_tokens_are_substituted() {
        let theme = Theme::default()
            .with_visual(VisualRole::PageBackground, "#101010")
            .with_visual(VisualRole::ContainerBackground, "#202020")
            .with_visual(VisualRole::TextPrimary, "#e0e0e0");
        let input = "body { background: #222; }\n.card { background: #444; color: #FFF; }";
        let out = substitute_legacy_colors(input, &theme.visual_scheme);
        assert!(out.contains("background: #101010;"));
        assert!(out.contains("background: #202020;"));
        assert!(out.contains("color: #e0e0e0;"));
    }

    #[test]
    fn substitution_leaves_longer_hex_values_alone() {
        let theme = Theme::default().with_visual(VisualRole::PageBackground, "#101010");
        let input = ".a { color: #222222; } .b { color: #222; }";
        let out = substitute_legacy_colors(input, &theme.visual_scheme);
        assert!(out.contains("#222222"));
        assert!(out.contains("#101010;"));
    }

    #[test]
    fn substitution_skips_tokens_already_matching_the_theme() {
        let mut theme = Theme::default();
        theme.visual_scheme.page_background = "#222".to_string();
        let input = "body { background: #222; }";
        let out = substitute_legacy_colors(input, &theme.visual_scheme);
        assert_eq!(out, input);
    }

    #[test]
    fn substitution_handles_token_at_end_of_text() {
        let theme = Theme::default().with_visual(VisualRole::TextPrimary, "#e0e0e0");
        let out = substitute_legacy_colors("color: #fff", &theme.visual_scheme);
        assert_eq!(out, "color: #e0e0e0");
    }

    #[test]
    fn gradient_descriptions() {
        let theme = Theme::default();
        assert_eq!(gradient_description(&theme), "Type: Preset - Rainbow");
        assert_eq!(
            gradient_description(&theme.with_gradient_kind(GradientKind::None)),
            "Type: None - No gradient applied"
        );
        assert_eq!(
            gradient_description(&theme.with_gradient_kind(GradientKind::Solid)),
            "Type: Solid Color - #06bb8e"
        );
        let custom = theme.with_gradient_kind(GradientKind::Custom);
        let description = gradient_description(&custom);
        assert!(description.starts_with("Type: Custom - #87ceeb"));
        assert!(description.ends_with("(and 4 more)"));
    }

    #[test]
    fn choice_button_uses_interaction_colors() {
        let theme = Theme::default();
        let css = generate(&theme, None);
        assert!(css.contains("background-color: #3182ce !important;"));
        assert!(css.contains("background-color: #2c5282 !important;"));
    }
}
