//! The theme data model: role-keyed color mappings, immutable mutation
//! helpers, and the JSON document format.
//!
//! A `Theme` is treated as a value. Every editing operation returns a new
//! `Theme` instead of mutating in place, so a preview, an audit, and an
//! undo stack can all hold consistent snapshots.

use serde::{Deserialize, Serialize};

use crate::color;
use crate::error::RestyleError;
use crate::gradient::{GradientKind, GradientSpec};

/// Custom gradients keep between 2 and 9 stops; edits that would leave the
/// range are ignored.
pub const MIN_GRADIENT_STOPS: usize = 2;
pub const MAX_GRADIENT_STOPS: usize = 9;

fn default_theme_name() -> String {
    "Default Dark".to_string()
}

/// A complete named theme: the visual scheme plus interaction colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_theme_name")]
    pub name: String,
    // Required: a document without a visual scheme is foreign or corrupt.
    pub visual_scheme: VisualScheme,
    #[serde(default)]
    pub interaction_colors: InteractionColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            visual_scheme: VisualScheme::default(),
            interaction_colors: InteractionColors::default(),
        }
    }
}

/// The fixed set of semantic surface colors, plus the header gradient
/// configuration. Field names are the persisted JSON keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualScheme {
    pub header_primary: String,
    pub header_text: String,

    pub page_background: String,
    pub container_background: String,
    pub container_light: String,

    pub sidebar_bg: String,
    pub sidebar_text: String,
    pub sidebar_header_bg: String,
    pub sidebar_header_text: String,

    pub detection_bg: String,
    pub detection_text: String,
    pub detection_header_bg: String,
    pub detection_header_text: String,
    pub contingency_bg: String,
    pub contingency_text: String,
    pub contingency_header_bg: String,
    pub contingency_header_text: String,
    pub warning_bg: String,
    pub warning_text: String,

    pub text_primary: String,
    pub text_secondary: String,

    pub h1_color: String,
    pub h2_color: String,
    pub h3_color: String,
    pub h4_color: String,
    pub h5_color: String,
    pub h6_color: String,

    pub border_color: String,
    pub accent_border: String,

    pub header_gradient_type: GradientKind,
    pub header_gradient_preset: String,
    pub header_gradient_colors: Vec<String>,
    pub header_gradient_solid_color: String,

    pub table_header_bg: String,
    pub table_header_text: String,
    pub table_row_bg: String,
    pub table_row_alt: String,
    pub table_text: String,
    pub table_border: String,

    pub input_bg: String,
    pub input_border: String,
    pub input_text: String,
    pub input_placeholder: String,
    pub input_focus_border: String,
    pub form_label: String,
}

/// The nine-stop list the custom gradient starts from.
pub fn default_custom_stops() -> Vec<String> {
    [
        "#87ceeb", "#0000ff", "#800080", "#8b0000", "#ff0000", "#ffa500", "#ffff00", "#90ee90",
        "#006400",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

impl Default for VisualScheme {
    fn default() -> Self {
        Self {
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
            header_gradient_colors: default_custom_stops(),
            header_gradient_solid_color: "#06bb8e".into(),

            table_header_bg: "#3182ce".into(),
            table_header_text: "#ffffff".into(),
            table_row_bg: "#f9fafb".into(),
            table_row_alt: "#f3f4f6".into(),
            table_text: "#1f2937".into(),
            table_border: "#e5e7eb".into(),

            input_bg: "#ffffff".into(),
            input_border: "#d1d5db".into(),
            input_text: "#1f2937".into(),
            input_placeholder: "#9ca3af".into(),
            input_focus_border: "#3b82f6".into(),
            form_label: "#374151".into(),
        }
    }
}

/// Brand colors for buttons and interactive elements. Each base color has a
/// derived hover companion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionColors {
    pub primary: String,
    pub primary_hover: String,
    pub secondary: String,
    pub secondary_hover: String,
    pub accent: String,
    pub accent_hover: String,
    pub danger: String,
    pub danger_hover: String,
    pub warning: String,
    pub warning_hover: String,
}

impl Default for InteractionColors {
    fn default() -> Self {
        Self {
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
        }
    }
}

/// Every directly-editable color slot in the visual scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualRole {
    HeaderPrimary,
    HeaderText,
    PageBackground,
    ContainerBackground,
    ContainerLight,
    SidebarBg,
    SidebarText,
    SidebarHeaderBg,
    SidebarHeaderText,
    DetectionBg,
    DetectionText,
    DetectionHeaderBg,
    DetectionHeaderText,
    ContingencyBg,
    ContingencyText,
    ContingencyHeaderBg,
    ContingencyHeaderText,
    WarningBg,
    WarningText,
    TextPrimary,
    TextSecondary,
    H1Color,
    H2Color,
    H3Color,
    H4Color,
    H5Color,
    H6Color,
    BorderColor,
    AccentBorder,
    GradientSolidColor,
    TableHeaderBg,
    TableHeaderText,
    TableRowBg,
    TableRowAlt,
    TableText,
    TableBorder,
    InputBg,
    InputBorder,
    InputText,
    InputPlaceholder,
    InputFocusBorder,
    FormLabel,
}

impl VisualRole {
    pub const ALL: [VisualRole; 42] = [
        Self::HeaderPrimary,
        Self::HeaderText,
        Self::PageBackground,
        Self::ContainerBackground,
        Self::ContainerLight,
        Self::SidebarBg,
        Self::SidebarText,
        Self::SidebarHeaderBg,
        Self::SidebarHeaderText,
        Self::DetectionBg,
        Self::DetectionText,
        Self::DetectionHeaderBg,
        Self::DetectionHeaderText,
        Self::ContingencyBg,
        Self::ContingencyText,
        Self::ContingencyHeaderBg,
        Self::ContingencyHeaderText,
        Self::WarningBg,
        Self::WarningText,
        Self::TextPrimary,
        Self::TextSecondary,
        Self::H1Color,
        Self::H2Color,
        Self::H3Color,
        Self::H4Color,
        Self::H5Color,
        Self::H6Color,
        Self::BorderColor,
        Self::AccentBorder,
        Self::GradientSolidColor,
        Self::TableHeaderBg,
        Self::TableHeaderText,
        Self::TableRowBg,
        Self::TableRowAlt,
        Self::TableText,
        Self::TableBorder,
        Self::InputBg,
        Self::InputBorder,
        Self::InputText,
        Self::InputPlaceholder,
        Self::InputFocusBorder,
        Self::FormLabel,
    ];

    /// The JSON key for this role.
    pub fn key(self) -> &'static str {
        match self {
            Self::HeaderPrimary => "header_primary",
            Self::HeaderText => "header_text",
            Self::PageBackground => "page_background",
            Self::ContainerBackground => "container_background",
            Self::ContainerLight => "container_light",
            Self::SidebarBg => "sidebar_bg",
            Self::SidebarText => "sidebar_text",
            Self::SidebarHeaderBg => "sidebar_header_bg",
            Self::SidebarHeaderText => "sidebar_header_text",
            Self::DetectionBg => "detection_bg",
            Self::DetectionText => "detection_text",
            Self::DetectionHeaderBg => "detection_header_bg",
            Self::DetectionHeaderText => "detection_header_text",
            Self::ContingencyBg => "contingency_bg",
            Self::ContingencyText => "contingency_text",
            Self::ContingencyHeaderBg => "contingency_header_bg",
            Self::ContingencyHeaderText => "contingency_header_text",
            Self::WarningBg => "warning_bg",
            Self::WarningText => "warning_text",
            Self::TextPrimary => "text_primary",
            Self::TextSecondary => "text_secondary",
            Self::H1Color => "h1_color",
            Self::H2Color => "h2_color",
            Self::H3Color => "h3_color",
            Self::H4Color => "h4_color",
            Self::H5Color => "h5_color",
            Self::H6Color => "h6_color",
            Self::BorderColor => "border_color",
            Self::AccentBorder => "accent_border",
            Self::GradientSolidColor => "header_gradient_solid_color",
            Self::TableHeaderBg => "table_header_bg",
            Self::TableHeaderText => "table_header_text",
            Self::TableRowBg => "table_row_bg",
            Self::TableRowAlt => "table_row_alt",
            Self::TableText => "table_text",
            Self::TableBorder => "table_border",
            Self::InputBg => "input_bg",
            Self::InputBorder => "input_border",
            Self::InputText => "input_text",
            Self::InputPlaceholder => "input_placeholder",
            Self::InputFocusBorder => "input_focus_border",
            Self::FormLabel => "form_label",
        }
    }

    /// Human label shown by pickers and audit reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::HeaderPrimary => "Header Background",
            Self::HeaderText => "Header Text",
            Self::PageBackground => "Main Page Background",
            Self::ContainerBackground => "Card/Form Backgrounds",
            Self::ContainerLight => "Light Container Elements",
            Self::SidebarBg => "Sidebar Panel BG",
            Self::SidebarText => "Sidebar Panel Text",
            Self::SidebarHeaderBg => "Sidebar Header BG",
            Self::SidebarHeaderText => "Sidebar Header Text",
            Self::DetectionBg => "Detection Dialog BG",
            Self::DetectionText => "Detection Dialog Text",
            Self::DetectionHeaderBg => "Detection Header BG",
            Self::DetectionHeaderText => "Detection Header Text",
            Self::ContingencyBg => "Contingency Dialog BG",
            Self::ContingencyText => "Contingency Dialog Text",
            Self::ContingencyHeaderBg => "Contingency Header BG",
            Self::ContingencyHeaderText => "Contingency Header Text",
            Self::WarningBg => "Warning Banner BG",
            Self::WarningText => "Warning Banner Text",
            Self::TextPrimary => "Primary Text Color",
            Self::TextSecondary => "Secondary/Muted Text",
            Self::H1Color => "H1 Header Text",
            Self::H2Color => "H2 Header Text",
            Self::H3Color => "H3 Header Text",
            Self::H4Color => "H4 Header Text",
            Self::H5Color => "H5 Header Text",
            Self::H6Color => "H6 Header Text",
            Self::BorderColor => "General Borders",
            Self::AccentBorder => "Sidebar/Section Borders",
            Self::GradientSolidColor => "Header Gradient Solid Color",
            Self::TableHeaderBg => "Table Header Background",
            Self::TableHeaderText => "Table Header Text",
            Self::TableRowBg => "Table Row Background",
            Self::TableRowAlt => "Alternate Table Row Background",
            Self::TableText => "Table Text Color",
            Self::TableBorder => "Table Borders",
            Self::InputBg => "Input Field Background",
            Self::InputBorder => "Input Field Border",
            Self::InputText => "Input Field Text",
            Self::InputPlaceholder => "Input Placeholder Text",
            Self::InputFocusBorder => "Input Focus Border",
            Self::FormLabel => "Form Label Text",
        }
    }
}

/// Base interaction color slots. Hover companions are derived, never set
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionRole {
    Primary,
    Secondary,
    Accent,
    Danger,
    Warning,
}

impl InteractionRole {
    pub const ALL: [InteractionRole; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Danger,
        Self::Warning,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Danger => "danger",
            Self::Warning => "warning",
        }
    }
}

impl VisualScheme {
    pub fn get(&self, role: VisualRole) -> &str {
        match role {
            VisualRole::HeaderPrimary => &self.header_primary,
            VisualRole::HeaderText => &self.header_text,
            VisualRole::PageBackground => &self.page_background,
            VisualRole::ContainerBackground => &self.container_background,
            VisualRole::ContainerLight => &self.container_light,
            VisualRole::SidebarBg => &self.sidebar_bg,
            VisualRole::SidebarText => &self.sidebar_text,
            VisualRole::SidebarHeaderBg => &self.sidebar_header_bg,
            VisualRole::SidebarHeaderText => &self.sidebar_header_text,
            VisualRole::DetectionBg => &self.detection_bg,
            VisualRole::DetectionText => &self.detection_text,
            VisualRole::DetectionHeaderBg => &self.detection_header_bg,
            VisualRole::DetectionHeaderText => &self.detection_header_text,
            VisualRole::ContingencyBg => &self.contingency_bg,
            VisualRole::ContingencyText => &self.contingency_text,
            VisualRole::ContingencyHeaderBg => &self.contingency_header_bg,
            VisualRole::ContingencyHeaderText => &self.contingency_header_text,
            VisualRole::WarningBg => &self.warning_bg,
            VisualRole::WarningText => &self.warning_text,
            VisualRole::TextPrimary => &self.text_primary,
            VisualRole::TextSecondary => &self.text_secondary,
            VisualRole::H1Color => &self.h1_color,
            VisualRole::H2Color => &self.h2_color,
            VisualRole::H3Color => &self.h3_color,
            VisualRole::H4Color => &self.h4_color,
            VisualRole::H5Color => &self.h5_color,
            VisualRole::H6Color => &self.h6_color,
            VisualRole::BorderColor => &self.border_color,
            VisualRole::AccentBorder => &self.accent_border,
            VisualRole::GradientSolidColor => &self.header_gradient_solid_color,
            VisualRole::TableHeaderBg => &self.table_header_bg,
            VisualRole::TableHeaderText => &self.table_header_text,
            VisualRole::TableRowBg => &self.table_row_bg,
            VisualRole::TableRowAlt => &self.table_row_alt,
            VisualRole::TableText => &self.table_text,
            VisualRole::TableBorder => &self.table_border,
            VisualRole::InputBg => &self.input_bg,
            VisualRole::InputBorder => &self.input_border,
            VisualRole::InputText => &self.input_text,
            VisualRole::InputPlaceholder => &self.input_placeholder,
            VisualRole::InputFocusBorder => &self.input_focus_border,
            VisualRole::FormLabel => &self.form_label,
        }
    }

    fn slot(&mut self, role: VisualRole) -> &mut String {
        match role {
            VisualRole::HeaderPrimary => &mut self.header_primary,
            VisualRole::HeaderText => &mut self.header_text,
            VisualRole::PageBackground => &mut self.page_background,
            VisualRole::ContainerBackground => &mut self.container_background,
            VisualRole::ContainerLight => &mut self.container_light,
            VisualRole::SidebarBg => &mut self.sidebar_bg,
            VisualRole::SidebarText => &mut self.sidebar_text,
            VisualRole::SidebarHeaderBg => &mut self.sidebar_header_bg,
            VisualRole::SidebarHeaderText => &mut self.sidebar_header_text,
            VisualRole::DetectionBg => &mut self.detection_bg,
            VisualRole::DetectionText => &mut self.detection_text,
            VisualRole::DetectionHeaderBg => &mut self.detection_header_bg,
            VisualRole::DetectionHeaderText => &mut self.detection_header_text,
            VisualRole::ContingencyBg => &mut self.contingency_bg,
            VisualRole::ContingencyText => &mut self.contingency_text,
            VisualRole::ContingencyHeaderBg => &mut self.contingency_header_bg,
            VisualRole::ContingencyHeaderText => &mut self.contingency_header_text,
            VisualRole::WarningBg => &mut self.warning_bg,
            VisualRole::WarningText => &mut self.warning_text,
            VisualRole::TextPrimary => &mut self.text_primary,
            VisualRole::TextSecondary => &mut self.text_secondary,
            VisualRole::H1Color => &mut self.h1_color,
            VisualRole::H2Color => &mut self.h2_color,
            VisualRole::H3Color => &mut self.h3_color,
            VisualRole::H4Color => &mut self.h4_color,
            VisualRole::H5Color => &mut self.h5_color,
            VisualRole::H6Color => &mut self.h6_color,
            VisualRole::BorderColor => &mut self.border_color,
            VisualRole::AccentBorder => &mut self.accent_border,
            VisualRole::GradientSolidColor => &mut self.header_gradient_solid_color,
            VisualRole::TableHeaderBg => &mut self.table_header_bg,
            VisualRole::TableHeaderText => &mut self.table_header_text,
            VisualRole::TableRowBg => &mut self.table_row_bg,
            VisualRole::TableRowAlt => &mut self.table_row_alt,
            VisualRole::TableText => &mut self.table_text,
            VisualRole::TableBorder => &mut self.table_border,
            VisualRole::InputBg => &mut self.input_bg,
            VisualRole::InputBorder => &mut self.input_border,
            VisualRole::InputText => &mut self.input_text,
            VisualRole::InputPlaceholder => &mut self.input_placeholder,
            VisualRole::InputFocusBorder => &mut self.input_focus_border,
            VisualRole::FormLabel => &mut self.form_label,
        }
    }
}

impl InteractionColors {
    pub fn base(&self, role: InteractionRole) -> &str {
        match role {
            InteractionRole::Primary => &self.primary,
            InteractionRole::Secondary => &self.secondary,
            InteractionRole::Accent => &self.accent,
            InteractionRole::Danger => &self.danger,
            InteractionRole::Warning => &self.warning,
        }
    }

    pub fn hover(&self, role: InteractionRole) -> &str {
        match role {
            InteractionRole::Primary => &self.primary_hover,
            InteractionRole::Secondary => &self.secondary_hover,
            InteractionRole::Accent => &self.accent_hover,
            InteractionRole::Danger => &self.danger_hover,
            InteractionRole::Warning => &self.warning_hover,
        }
    }

    fn set(&mut self, role: InteractionRole, base: String, hover: String) {
        match role {
            InteractionRole::Primary => {
                self.primary = base;
                self.primary_hover = hover;
            }
            InteractionRole::Secondary => {
                self.secondary = base;
                self.secondary_hover = hover;
            }
            InteractionRole::Accent => {
                self.accent = base;
                self.accent_hover = hover;
            }
            InteractionRole::Danger => {
                self.danger = base;
                self.danger_hover = hover;
            }
            InteractionRole::Warning => {
                self.warning = base;
                self.warning_hover = hover;
            }
        }
    }
}

impl Theme {
    pub fn visual(&self, role: VisualRole) -> &str {
        self.visual_scheme.get(role)
    }

    /// Returns a copy with one visual role replaced. Input is normalized;
    /// invalid colors become black rather than being rejected.
    pub fn with_visual(&self, role: VisualRole, raw: &str) -> Theme {
        let mut next = self.clone();
        *next.visual_scheme.slot(role) = color::normalize(raw);
        next
    }

    pub fn interaction(&self, role: InteractionRole) -> &str {
        self.interaction_colors.base(role)
    }

    pub fn interaction_hover(&self, role: InteractionRole) -> &str {
        self.interaction_colors.hover(role)
    }

    /// Returns a copy with an interaction base color replaced and its hover
    /// companion re-derived.
    pub fn with_interaction(&self, role: InteractionRole, raw: &str) -> Theme {
        let base = color::normalize(raw);
        let hover = color::derive_hover(&base, true);
        let mut next = self.clone();
        next.interaction_colors.set(role, base, hover);
        next
    }

    /// Projects the flat gradient fields into a resolved spec.
    pub fn gradient_spec(&self) -> GradientSpec {
        match self.visual_scheme.header_gradient_type {
            GradientKind::None => GradientSpec::None,
            GradientKind::Solid => {
                GradientSpec::Solid(self.visual_scheme.header_gradient_solid_color.clone())
            }
            GradientKind::Preset => {
                GradientSpec::Preset(self.visual_scheme.header_gradient_preset.clone())
            }
            GradientKind::Custom => {
                GradientSpec::Custom(self.visual_scheme.header_gradient_colors.clone())
            }
        }
    }

    pub fn with_gradient_kind(&self, kind: GradientKind) -> Theme {
        let mut next = self.clone();
        next.visual_scheme.header_gradient_type = kind;
        next
    }

    /// Selects a named gradient preset. The name is stored as given; an
    /// unknown name simply renders as no gradient.
    pub fn with_gradient_preset(&self, name: &str) -> Theme {
        let mut next = self.clone();
        next.visual_scheme.header_gradient_preset = name.to_string();
        next
    }

    /// Replaces one custom gradient stop, growing the list with white up to
    /// the requested index. Indexes past the stop limit are ignored.
    pub fn with_gradient_color(&self, index: usize, raw: &str) -> Theme {
        if index >= MAX_GRADIENT_STOPS {
            return self.clone();
        }
        let mut next = self.clone();
        let stops = &mut next.visual_scheme.header_gradient_colors;
        while stops.len() <= index {
            stops.push("#ffffff".to_string());
        }
        stops[index] = color::normalize(raw);
        next
    }

    /// Appends a white stop. No-op once the list holds the maximum.
    pub fn push_gradient_color(&self) -> Theme {
        if self.visual_scheme.header_gradient_colors.len() >= MAX_GRADIENT_STOPS {
            return self.clone();
        }
        let mut next = self.clone();
        next.visual_scheme
            .header_gradient_colors
            .push("#ffffff".to_string());
        next
    }

    /// Drops the last stop. No-op once the list is at the minimum.
    pub fn pop_gradient_color(&self) -> Theme {
        if self.visual_scheme.header_gradient_colors.len() <= MIN_GRADIENT_STOPS {
            return self.clone();
        }
        let mut next = self.clone();
        next.visual_scheme.header_gradient_colors.pop();
        next
    }

    /// Restores the custom stop list to the rainbow defaults.
    pub fn reset_gradient_colors(&self) -> Theme {
        let mut next = self.clone();
        next.visual_scheme.header_gradient_colors = default_custom_stops();
        next
    }

    /// Serializes to the pretty-printed JSON document format.
    pub fn to_json(&self) -> Result<String, RestyleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a theme document.
    ///
    /// Documents missing `visual_scheme` are rejected; role keys missing
    /// inside it back-fill from the defaults, so older documents keep
    /// loading as the schema grows. Every color is re-normalized.
    pub fn from_json(text: &str) -> Result<Theme, RestyleError> {
        let mut theme: Theme = serde_json::from_str(text)?;
        theme.sanitize();
        Ok(theme)
    }

    // Re-establishes the color invariants after deserialization.
    fn sanitize(&mut self) {
        for role in VisualRole::ALL {
            let normalized = color::normalize(self.visual_scheme.get(role));
            *self.visual_scheme.slot(role) = normalized;
        }

        let ic = &mut self.interaction_colors;
        for slot in [
            &mut ic.primary,
            &mut ic.primary_hover,
            &mut ic.secondary,
            &mut ic.secondary_hover,
            &mut ic.accent,
            &mut ic.accent_hover,
            &mut ic.danger,
            &mut ic.danger_hover,
            &mut ic.warning,
            &mut ic.warning_hover,
        ] {
            let normalized = color::normalize(slot);
            *slot = normalized;
        }

        let stops = &mut self.visual_scheme.header_gradient_colors;
        stops.truncate(MAX_GRADIENT_STOPS);
        for stop in stops.iter_mut() {
            let normalized = color::normalize(stop);
            *stop = normalized;
        }
        while stops.len() < MIN_GRADIENT_STOPS {
            stops.push("#ffffff".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_visual_normalizes_input() {
        let theme = Theme::default();
        let next = theme.with_visual(VisualRole::PageBackground, "ABCDEF");
        assert_eq!(next.visual(VisualRole::PageBackground), "#abcdef");
        // Original untouched.
        assert_eq!(theme.visual(VisualRole::PageBackground), "#222222");
    }

    #[test]
    fn with_visual_coerces_invalid_to_black() {
        let next = Theme::default().with_visual(VisualRole::HeaderText, "#ggg");
        assert_eq!(next.visual(VisualRole::HeaderText), "#000000");
    }

    #[test]
    fn interaction_update_rederives_hover() {
        let next = Theme::default().with_interaction(InteractionRole::Primary, "#ffffff");
        assert_eq!(next.interaction(InteractionRole::Primary), "#ffffff");
        assert_eq!(next.interaction_hover(InteractionRole::Primary), "#d8d8d8");
    }

    #[test]
    fn custom_stop_count_stays_in_bounds() {
        let mut theme = Theme::default();
        assert_eq!(theme.visual_scheme.header_gradient_colors.len(), 9);

        // Already at the max: push is a no-op.
        theme = theme.push_gradient_color();
        assert_eq!(theme.visual_scheme.header_gradient_colors.len(), 9);

        // Pop down to the minimum and no further.
        for _ in 0..20 {
            theme = theme.pop_gradient_color();
        }
        assert_eq!(theme.visual_scheme.header_gradient_colors.len(), 2);

        theme = theme.push_gradient_color();
        assert_eq!(theme.visual_scheme.header_gradient_colors.len(), 3);
    }

    #[test]
    fn with_gradient_color_ignores_out_of_range_index() {
        let theme = Theme::default();
        let next = theme.with_gradient_color(MAX_GRADIENT_STOPS, "#123456");
        assert_eq!(next, theme);
    }

    #[test]
    fn with_gradient_color_grows_with_white() {
        let mut theme = Theme::default();
        for _ in 0..20 {
            theme = theme.pop_gradient_color();
        }
        let next = theme.with_gradient_color(4, "#123456");
        assert_eq!(
            next.visual_scheme.header_gradient_colors,
            vec!["#87ceeb", "#0000ff", "#ffffff", "#ffffff", "#123456"]
        );
    }

    #[test]
    fn json_round_trip_preserves_every_role() {
        let theme = Theme::default()
            .with_visual(VisualRole::PageBackground, "#101010")
            .with_interaction(InteractionRole::Accent, "#ff00aa")
            .with_gradient_kind(GradientKind::Custom);
        let json = theme.to_json().unwrap();
        let loaded = Theme::from_json(&json).unwrap();
        assert_eq!(loaded, theme);
    }

    #[test]
    fn load_rejects_document_without_visual_scheme() {
        let result = Theme::from_json(r#"{"name": "Broken"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn load_backfills_missing_role_keys() {
        let json = r##"{
            "name": "Sparse",
            "visual_scheme": { "page_background": "#101010" }
        }"##;
        let theme = Theme::from_json(json).unwrap();
        assert_eq!(theme.visual(VisualRole::PageBackground), "#101010");
        // Everything omitted comes from the defaults.
        assert_eq!(theme.visual(VisualRole::HeaderPrimary), "#06bb8e");
        assert_eq!(theme.interaction(InteractionRole::Primary), "#3182ce");
        assert_eq!(
            theme.visual_scheme.header_gradient_type,
            GradientKind::Preset
        );
    }

    #[test]
    fn load_normalizes_stored_colors() {
        let json = r##"{
            "visual_scheme": {
                "page_background": "ABCDEF",
                "header_primary": "#NOTHEX",
                "header_gradient_colors": ["#FF0000", "junk"]
            }
        }"##;
        let theme = Theme::from_json(json).unwrap();
        assert_eq!(theme.visual(VisualRole::PageBackground), "#abcdef");
        assert_eq!(theme.visual(VisualRole::HeaderPrimary), "#000000");
        assert_eq!(
            theme.visual_scheme.header_gradient_colors,
            vec!["#ff0000", "#000000"]
        );
    }

    #[test]
    fn load_clamps_oversized_gradient_stop_list() {
        let stops: Vec<String> = (0..12).map(|_| "\"#112233\"".to_string()).collect();
        let json = format!(
            r#"{{"visual_scheme": {{"header_gradient_colors": [{}]}}}}"#,
            stops.join(",")
        );
        let theme = Theme::from_json(&json).unwrap();
        assert_eq!(theme.visual_scheme.header_gradient_colors.len(), 9);
    }

    #[test]
    fn role_keys_match_serialized_field_names() {
        let value = serde_json::to_value(Theme::default()).unwrap();
        let scheme = &value["visual_scheme"];
        for role in VisualRole::ALL {
            assert!(scheme.get(role.key()).is_some(), "missing {}", role.key());
        }
        let colors = &value["interaction_colors"];
        for role in InteractionRole::ALL {
            assert!(colors.get(role.key()).is_some());
            assert!(colors.get(format!("{}_hover", role.key())).is_some());
        }
    }

    #[test]
    fn role_labels_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for role in VisualRole::ALL {
            assert!(!role.label().is_empty());
            assert!(seen.insert(role.label()));
        }
    }

    #[test]
    fn gradient_spec_projection() {
        let theme = Theme::default();
        assert_eq!(
            theme.gradient_spec(),
            GradientSpec::Preset("rainbow".to_string())
        );
        assert_eq!(
            theme.with_gradient_kind(GradientKind::None).gradient_spec(),
            GradientSpec::None
        );
        assert_eq!(
            theme
                .with_gradient_kind(GradientKind::Solid)
                .gradient_spec(),
            GradientSpec::Solid("#06bb8e".to_string())
        );
    }
}
