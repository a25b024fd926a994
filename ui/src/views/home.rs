use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use futures_util::StreamExt;

use api::{Note, NoteKind, Opener, TurnStats};

use crate::components::about::{AboutModel, AboutPanel};
use crate::components::autocard::{use_autocard, AutocardBackdrop, AutocardModel};
use crate::core::busy::RequestTracker;
use crate::core::{cards, escape, format};
use crate::stats::{self, ColumnChart};

#[derive(Debug, Clone)]
enum TrainerEvent {
    DrawOpener,
    PlayItOut,
}

#[component]
pub fn Home() -> Element {
    let mut about = use_context_provider(|| Signal::new(AboutModel::default()));
    use_context_provider(|| Signal::new(AutocardModel::default()));

    let tracker = use_signal(RequestTracker::default);
    let opener = use_signal(|| Option::<Opener>::None);
    let notes = use_signal(Vec::<Note>::new);
    let stats_counts = use_signal(TurnStats::default);
    let stats_payload = use_signal(|| Option::<String>::None);
    let status_line = use_signal(|| "Shuffling up…".to_string());

    let coroutine = {
        let tracker_ref = tracker.clone();
        let opener_ref = opener.clone();
        let notes_ref = notes.clone();
        let stats_ref = stats_counts.clone();
        let payload_ref = stats_payload.clone();
        let status_ref = status_line.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<TrainerEvent>| {
            let mut tracker = tracker_ref.clone();
            let mut opener = opener_ref.clone();
            let mut notes = notes_ref.clone();
            let mut stats_counts = stats_ref.clone();
            let mut stats_payload = payload_ref.clone();
            let mut status_line = status_ref.clone();

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        TrainerEvent::DrawOpener => {
                            tracker.with_mut(|guard| guard.start());
                            match api::new_opener().await {
                                Ok(dealt) => {
                                    opener.set(Some(dealt));
                                    notes.set(Vec::new());
                                    status_line
                                        .set("Fresh hand. Play it out when ready.".to_string());
                                }
                                Err(err) => {
                                    warn!("opener request failed: {err}");
                                    status_line
                                        .set("Couldn't reach the dealer. Try again.".to_string());
                                }
                            }
                            tracker.with_mut(|guard| guard.finish());
                        }
                        TrainerEvent::PlayItOut => {
                            let Some(current) = opener.with(|current| current.clone()) else {
                                continue;
                            };

                            tracker.with_mut(|guard| guard.start());
                            match api::play_it_out(current, stats_counts()).await {
                                Ok(outcome) => {
                                    opener.set(Some(outcome.opener));
                                    notes.set(outcome.notes);
                                    stats_counts.set(outcome.stats);
                                    // Completing the request hands the fresh
                                    // payload to the stats renderer.
                                    stats_payload.set(Some(outcome.stats_payload));
                                    status_line.set(format!(
                                        "Recorded game {} for this session.",
                                        outcome.stats.total()
                                    ));
                                }
                                Err(err) => {
                                    warn!("playout request failed: {err}");
                                    status_line
                                        .set("The playout failed. Hand unchanged.".to_string());
                                }
                            }
                            tracker.with_mut(|guard| guard.finish());
                        }
                    }
                }
            }
        })
    };

    // Deal the opening hand as soon as the page is up.
    use_hook(|| coroutine.send(TrainerEvent::DrawOpener));

    let busy = tracker().is_busy();
    let about_snapshot = about();
    let opener_snapshot = opener();
    let notes_snapshot = notes();
    let payload_snapshot = stats_payload();
    let chart_model = stats::maybe_render_stats(payload_snapshot.as_deref());
    let total_games = stats_counts().total();

    rsx! {
        div {
            class: "page page-trainer",
            tabindex: 0,
            onkeydown: move |evt| escape::handle_key(&evt.key().to_string()),

            header { class: "trainer__header",
                div { class: "trainer__brand",
                    span { class: "trainer__brand-mark", "Goldfish" }
                    span { class: "trainer__brand-subtitle", "opening-hand trainer" }
                }
                span {
                    id: "show-about",
                    class: "about-toggle",
                    style: "display: {about_snapshot.show_control_display()}",
                    onclick: move |_| about.with_mut(|panel| panel.show()),
                    "about this page"
                }
                span {
                    id: "hide-about",
                    class: "about-toggle",
                    style: "display: {about_snapshot.hide_control_display()}",
                    onclick: move |_| about.with_mut(|panel| panel.hide()),
                    "back to the cards"
                }
            }

            main {
                id: "main",
                class: "trainer__main",
                style: "display: {about_snapshot.main_display()}",

                div { class: "buttons-wrap",
                    div { class: "button-wrap",
                        button {
                            id: "opener-button",
                            r#type: "button",
                            class: "button button--primary",
                            disabled: busy,
                            onclick: move |_| coroutine.send(TrainerEvent::DrawOpener),
                            "draw a new hand"
                        }
                    }
                    div { class: "button-wrap",
                        button {
                            id: "play-button",
                            r#type: "button",
                            class: "button",
                            disabled: busy || opener_snapshot.is_none(),
                            onclick: move |_| coroutine.send(TrainerEvent::PlayItOut),
                            "play it out"
                        }
                    }
                }

                if let Some(current) = opener_snapshot.as_ref() {
                    OpenerDisplay { opener: current.clone() }
                }

                p { class: "trainer__status", "{status_line()}" }

                if !notes_snapshot.is_empty() {
                    SummaryNotes { notes: notes_snapshot.clone() }
                }

                div { class: "stats-wrap",
                    if let Some(payload) = payload_snapshot.as_ref() {
                        div { id: "stats-target", class: "stats-target", "{payload}" }
                    }
                    if let Some(model) = chart_model {
                        ColumnChart { model }
                        p { class: "stats-meta", "{format::format_games(total_games)} this session" }
                    }
                }
            }

            AboutPanel {}
            AutocardBackdrop {}
        }
    }
}

#[component]
fn OpenerDisplay(opener: Opener) -> Element {
    let turn_order = if opener.on_the_play {
        "on the play"
    } else {
        "on the draw"
    };

    rsx! {
        div { class: "opener",
            div { class: "opener-cards",
                for (idx, card) in opener.hand.iter().enumerate() {
                    CardImage { key: "{idx}-{card}", name: card.clone() }
                }
            }
            div { class: "opener-turn-order", "{turn_order}" }
        }
    }
}

#[component]
fn CardImage(name: String) -> Element {
    let mut autocard = use_autocard();
    let url = cards::image_url(&name);
    let overlay_url = url.clone();

    rsx! {
        img {
            class: "card",
            alt: "{name}",
            src: "{url}",
            onclick: move |_| autocard.with_mut(|overlay| overlay.show(overlay_url.clone())),
        }
    }
}

#[component]
fn SummaryNotes(notes: Vec<Note>) -> Element {
    rsx! {
        div { class: "summary-wrap",
            for (idx, note) in notes.iter().enumerate() {
                NoteFragment { key: "{idx}", note: note.clone() }
            }
        }
    }
}

#[component]
fn NoteFragment(note: Note) -> Element {
    let mut autocard = use_autocard();

    match note.kind {
        NoteKind::LineBreak | NoteKind::TurnBreak => rsx! {
            br {}
        },
        NoteKind::Card => {
            let url = cards::image_url(&note.text);
            rsx! {
                span {
                    class: "summary-card",
                    onclick: move |_| autocard.with_mut(|overlay| overlay.show(url.clone())),
                    "{note.text}"
                }
            }
        }
        NoteKind::Mana => rsx! {
            span { class: "summary-mana", "{note.text}" }
        },
        NoteKind::Alert => rsx! {
            span { class: "summary-alert", "{note.text}" }
        },
        NoteKind::Text => rsx! {
            span { class: "summary-text", "{note.text}" }
        },
    }
}
