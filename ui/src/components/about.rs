//! "About this page" panel that covers the main content.

use dioxus::prelude::*;

use crate::core::escape;

/// Panel visibility. The main content and the panel are never shown
/// together; the two header controls swap along with them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AboutModel {
    visible: bool,
}

impl AboutModel {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn main_display(&self) -> &'static str {
        if self.visible {
            "none"
        } else {
            "block"
        }
    }

    pub fn about_display(&self) -> &'static str {
        if self.visible {
            "block"
        } else {
            "none"
        }
    }

    pub fn show_control_display(&self) -> &'static str {
        if self.visible {
            "none"
        } else {
            "flex"
        }
    }

    pub fn hide_control_display(&self) -> &'static str {
        if self.visible {
            "flex"
        } else {
            "none"
        }
    }
}

/// Context handle for the panel state.
pub fn use_about() -> Signal<AboutModel> {
    use_context::<Signal<AboutModel>>()
}

#[component]
pub fn AboutPanel() -> Element {
    let mut about = use_about();

    escape::use_escape_close(move || {
        let mut about = about;
        about.with_mut(|panel| panel.hide());
    });

    let snapshot = about();

    rsx! {
        section {
            id: "about",
            class: "about",
            style: "display: {snapshot.about_display()}",

            h2 { "About this trainer" }
            p {
                "Every refresh deals a fresh seven-card opener from the fixed "
                "sixty-card list below. \"Play it out\" asks the server to "
                "goldfish the hand and records which turn the win condition "
                "resolved; the chart tracks your session against the "
                "historical average."
            }
            p {
                "Card names anywhere on the page can be clicked to preview "
                "the card. Escape closes the preview, and this panel."
            }

            div { class: "deck-list",
                ul { class: "deck-section",
                    for (name, copies) in api::model::DECK_LIST.iter().copied() {
                        li { key: "{name}", class: "deck-line", "{copies} {name}" }
                    }
                }
            }

            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: move |_| about.with_mut(|panel| panel.hide()),
                "back to the cards"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_and_panel_are_never_visible_together() {
        let mut model = AboutModel::default();
        assert_eq!(model.main_display(), "block");
        assert_eq!(model.about_display(), "none");

        model.show();
        assert_eq!(model.main_display(), "none");
        assert_eq!(model.about_display(), "block");
    }

    #[test]
    fn header_controls_swap_with_the_panel() {
        let mut model = AboutModel::default();
        assert_eq!(model.show_control_display(), "flex");
        assert_eq!(model.hide_control_display(), "none");

        model.show();
        assert_eq!(model.show_control_display(), "none");
        assert_eq!(model.hide_control_display(), "flex");
    }

    #[test]
    fn hide_is_idempotent() {
        let mut model = AboutModel::default();
        model.show();
        model.hide();
        let after_one = model;
        model.hide();
        assert_eq!(model, after_one);
        assert!(!model.is_visible());
    }
}
