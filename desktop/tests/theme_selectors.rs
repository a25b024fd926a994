#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the trainer
  page, the stats chart, and the overlays) remain present in the unified
  shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) desktop
  builds.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing to
  the shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Header
    ".trainer__header",
    ".trainer__brand",
    ".about-toggle",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".buttons-wrap",
    ".button-wrap",
    // Opening hand
    ".opener-cards",
    ".card {",
    ".opener-turn-order",
    // Playout summary
    ".summary-wrap",
    ".summary-card",
    ".summary-text",
    ".summary-alert",
    // Stats
    ".stats-wrap",
    ".stats-target",
    ".stats-chart",
    ".stats-chart__bar",
    ".stats-chart__tick",
    ".stats-chart__overlay",
    ".stats-meta",
    // About panel
    ".about {",
    ".deck-list",
    ".deck-section",
    ".deck-line",
    // Autocard overlay
    ".autocard-backdrop",
    ".autocard {",
];

#[test]
fn all_required_selectors_are_present() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "theme is missing expected selectors: {missing:?}"
    );
}
