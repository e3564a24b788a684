//! WCAG accessibility audit over a theme's text/background pairings.
//!
//! The checklist is fixed: each entry names a text role, the background it
//! usually sits on, and the minimum contrast ratio (WCAG AA: 4.5 for normal
//! text, 3.0 for secondary text). The audit always reports every entry so
//! all problems are visible at once.

use std::fmt::Write;

use crate::color;
use crate::theme::{Theme, VisualRole};

/// One evaluated checklist entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastCheck {
    pub label: &'static str,
    pub foreground: VisualRole,
    pub background: VisualRole,
    pub ratio: f64,
    pub minimum: f64,
    pub passed: bool,
}

const CHECKLIST: [(&str, VisualRole, VisualRole, f64); 9] = [
    (
        "Primary Text vs Container Background",
        VisualRole::TextPrimary,
        VisualRole::ContainerBackground,
        4.5,
    ),
    (
        "Secondary Text vs Container Background",
        VisualRole::TextSecondary,
        VisualRole::ContainerBackground,
        3.0,
    ),
    (
        "Header Text vs Header Background",
        VisualRole::HeaderText,
        VisualRole::HeaderPrimary,
        4.5,
    ),
    (
        "Sidebar Text vs Sidebar Background",
        VisualRole::SidebarText,
        VisualRole::SidebarBg,
        4.5,
    ),
    (
        "Sidebar Header Text vs Sidebar Header BG",
        VisualRole::SidebarHeaderText,
        VisualRole::SidebarHeaderBg,
        4.5,
    ),
    (
        "H1 Headers vs Page Background",
        VisualRole::H1Color,
        VisualRole::PageBackground,
        4.5,
    ),
    (
        "Table Header Text vs Table Header Background",
        VisualRole::TableHeaderText,
        VisualRole::TableHeaderBg,
        4.5,
    ),
    (
        "Table Text vs Table Row Background",
        VisualRole::TableText,
        VisualRole::TableRowBg,
        4.5,
    ),
    (
        "Input Text vs Input Background",
        VisualRole::InputText,
        VisualRole::InputBg,
        4.5,
    ),
];

// The dialog pairings the quick pre-generation check covers.
const QUICK_CHECKS: [(&str, VisualRole, VisualRole, f64); 7] = [
    (
        "Primary Text vs Container Background",
        VisualRole::TextPrimary,
        VisualRole::ContainerBackground,
        4.5,
    ),
    (
        "Header Text vs Header Background",
        VisualRole::HeaderText,
        VisualRole::HeaderPrimary,
        4.5,
    ),
    (
        "Sidebar Text vs Sidebar Background",
        VisualRole::SidebarText,
        VisualRole::SidebarBg,
        4.5,
    ),
    (
        "Sidebar Header Text vs Sidebar Header BG",
        VisualRole::SidebarHeaderText,
        VisualRole::SidebarHeaderBg,
        4.5,
    ),
    (
        "Detection Text vs Detection Background",
        VisualRole::DetectionText,
        VisualRole::DetectionBg,
        4.5,
    ),
    (
        "Contingency Text vs Contingency Background",
        VisualRole::ContingencyText,
        VisualRole::ContingencyBg,
        4.5,
    ),
    (
        "Warning Text vs Warning Background",
        VisualRole::WarningText,
        VisualRole::WarningBg,
        4.5,
    ),
];

fn evaluate(
    theme: &Theme,
    entries: &[(&'static str, VisualRole, VisualRole, f64)],
) -> Vec<ContrastCheck> {
    entries
        .iter()
        .map(|&(label, foreground, background, minimum)| {
            let ratio = color::contrast_ratio(theme.visual(foreground), theme.visual(background));
            ContrastCheck {
                label,
                foreground,
                background,
                ratio,
                minimum,
                passed: ratio >= minimum,
            }
        })
        .collect()
}

/// Runs the full checklist. Always returns every entry, pass or fail.
pub fn audit(theme: &Theme) -> Vec<ContrastCheck> {
    evaluate(theme, &CHECKLIST)
}

/// Runs the shorter pre-generation battery and returns only the failures.
pub fn quick_failures(theme: &Theme) -> Vec<ContrastCheck> {
    evaluate(theme, &QUICK_CHECKS)
        .into_iter()
        .filter(|check| !check.passed)
        .collect()
}

/// Formats an audit as the plain-text analysis block shown to the user.
pub fn render_report(theme: &Theme, checks: &[ContrastCheck]) -> String {
    let mut out = String::new();
    out.push_str("ACCESSIBILITY CONTRAST ANALYSIS\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    let mut all_passed = true;
    for check in checks {
        if !check.passed {
            all_passed = false;
        }
        let status = if check.passed { "PASS" } else { "FAIL" };
        let _ = writeln!(out, "{}:", check.label);
        let _ = writeln!(
            out,
            "  {} on {}",
            theme.visual(check.foreground),
            theme.visual(check.background)
        );
        let _ = writeln!(
            out,
            "  Contrast: {:.2}:1 (need {}:1) {status}\n",
            check.ratio, check.minimum
        );
    }

    out.push_str(if all_passed {
        "\nALL CHECKS PASSED\n"
    } else {
        "\nSOME CHECKS FAILED\n"
    });
    out
}
