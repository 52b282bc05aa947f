#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Classes the shared report components rely on must stay present in
`ui/assets/theme/main.css`. When renaming one, update the component markup and
`REQUIRED_SELECTORS` together. A substring check is enough as an early warning.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".report-layout {",
    ".report-layout__main",
    ".report__header",
    ".report__panels",
    // Sidebar filter
    ".report-sidebar {",
    ".report-sidebar__options",
    ".report-sidebar__option",
    // Cards
    ".report-card {",
    ".report-card--error",
    ".report-card__header",
    ".report-card__meta",
    ".report-card__meta--success",
    ".report-card__meta--error",
    ".report-card__placeholder",
    // Charts & highlights
    ".chart__canvas",
    ".report-highlights",
    ".report-highlight__value",
    ".report-legend__items",
    // Export & buttons
    ".report-export__actions",
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".visually-hidden",
    // Narrow screens collapse the sidebar above the charts
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
