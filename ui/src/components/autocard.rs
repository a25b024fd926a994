//! Full-card image overlay ("autocard").
//!
//! Clicking a card name or thumbnail points the overlay at that card's
//! image and shows the backdrop; the next click anywhere on the backdrop,
//! or Escape, hides it again.

use dioxus::prelude::*;

use crate::core::escape;

/// Overlay state: the last shown image URL plus visibility. Hiding only
/// flips the backdrop's display and keeps the URL.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AutocardModel {
    image_url: Option<String>,
    visible: bool,
}

impl AutocardModel {
    /// Point the overlay at a card image and show it. The URL is taken as
    /// given; an unreachable one just yields a broken image element.
    pub fn show(&mut self, image_url: impl Into<String>) {
        self.image_url = Some(image_url.into());
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn image_url(&self) -> &str {
        self.image_url.as_deref().unwrap_or_default()
    }

    pub fn backdrop_display(&self) -> &'static str {
        if self.visible {
            "flex"
        } else {
            "none"
        }
    }
}

/// Context handle for anything that wants to pop the overlay open.
pub fn use_autocard() -> Signal<AutocardModel> {
    use_context::<Signal<AutocardModel>>()
}

#[component]
pub fn AutocardBackdrop() -> Element {
    let mut model = use_autocard();

    escape::use_escape_close(move || {
        let mut model = model;
        model.with_mut(|overlay| overlay.hide());
    });

    let snapshot = model();

    rsx! {
        div {
            id: "autocard-backdrop",
            class: "autocard-backdrop",
            style: "display: {snapshot.backdrop_display()}",
            onclick: move |_| model.with_mut(|overlay| overlay.hide()),
            img {
                id: "autocard",
                class: "autocard",
                alt: "enlarged card",
                src: "{snapshot.image_url()}",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_stores_the_url_and_reveals_the_backdrop() {
        let mut model = AutocardModel::default();
        assert_eq!(model.backdrop_display(), "none");

        model.show("https://example.invalid/card.jpg");
        assert!(model.is_visible());
        assert_eq!(model.image_url(), "https://example.invalid/card.jpg");
        assert_eq!(model.backdrop_display(), "flex");
    }

    #[test]
    fn hide_is_idempotent_and_keeps_the_url() {
        let mut model = AutocardModel::default();
        model.show("card.jpg");
        model.hide();
        let after_one = model.clone();
        model.hide();
        assert_eq!(model, after_one);
        assert!(!model.is_visible());
        assert_eq!(model.image_url(), "card.jpg");
    }
}
