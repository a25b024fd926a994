//! Stand-in playout model.
//!
//! The production solver explores the whole game tree for a hand; its seam is
//! the two server functions in the crate root. This module keeps the app
//! functional end to end by sampling completion turns from the measured
//! averages that also ship as the chart's comparison series. Swapping in the
//! real solver replaces `play_it_out` only.

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::json;

use crate::{Note, Opener, PlayOutcome, TurnStats};

/// Deck list as (name, copies). Sixty cards.
pub const DECK_LIST: &[(&str, u8)] = &[
    ("Primeval Titan", 4),
    ("Amulet of Vigor", 4),
    ("Summoner's Pact", 4),
    ("Ancient Stirrings", 4),
    ("Dryad of the Ilysian Grove", 4),
    ("Azusa, Lost but Seeking", 3),
    ("Sakura-Tribe Scout", 4),
    ("Explore", 2),
    ("Pact of Negation", 2),
    ("Dismember", 2),
    ("Simic Growth Chamber", 4),
    ("Gruul Turf", 2),
    ("Boros Garrison", 1),
    ("Tolaria West", 4),
    ("Vesuva", 2),
    ("Valakut, the Molten Pinnacle", 2),
    ("Forest", 4),
    ("Bojuka Bog", 1),
    ("Cavern of Souls", 1),
    ("Khalni Garden", 2),
    ("Radiant Fountain", 1),
    ("Selesnya Sanctuary", 1),
    ("Sunhome, Fortress of the Legion", 1),
    ("Slayers' Stronghold", 1),
];

pub const OPENING_HAND_SIZE: usize = 7;

pub const WIN_CONDITION: &str = "Primeval Titan";

/// Measured completion rates by turn bucket. Used both as the stand-in's
/// sampling distribution and as the chart's comparison series.
pub const AVG_ON_THE_PLAY: [f64; 5] = [0.0, 0.02, 0.30, 0.41, 0.27];
pub const AVG_ON_THE_DRAW: [f64; 5] = [0.0, 0.04, 0.41, 0.38, 0.17];

pub const X_TICKS: [&str; 5] = ["1", "2", "3", "4", "5+"];

pub fn deal_opener() -> Opener {
    let mut rng = rand::thread_rng();
    let mut deck = expanded_deck();
    deck.shuffle(&mut rng);
    let library = deck.split_off(OPENING_HAND_SIZE);
    Opener {
        hand: deck,
        library,
        on_the_play: rng.gen_bool(0.5),
    }
}

pub fn expanded_deck() -> Vec<String> {
    DECK_LIST
        .iter()
        .flat_map(|&(name, copies)| (0..copies).map(move |_| name.to_string()))
        .collect()
}

pub fn play_it_out(opener: Opener, mut stats: TurnStats) -> PlayOutcome {
    let mut rng = rand::thread_rng();
    let turn = sample_completion_turn(&mut rng, opener.on_the_play);
    stats.record(turn);
    let notes = summary_notes(&opener, turn);
    let stats_payload = build_stats_payload(&stats, opener.on_the_play);
    PlayOutcome {
        opener,
        notes,
        stats,
        stats_payload,
    }
}

pub fn sample_completion_turn<R: Rng>(rng: &mut R, on_the_play: bool) -> u32 {
    let weights = if on_the_play {
        AVG_ON_THE_PLAY
    } else {
        AVG_ON_THE_DRAW
    };
    let roll: f64 = rng.gen();
    let mut cumulative = 0.0;
    for (bucket, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if roll < cumulative {
            return bucket as u32 + 1;
        }
    }
    5
}

fn summary_notes(opener: &Opener, turn: u32) -> Vec<Note> {
    let turn_order = if opener.on_the_play {
        "on the play"
    } else {
        "on the draw"
    };
    let when = if turn >= 5 {
        "on turn five or later.".to_string()
    } else {
        format!("on turn {turn}.")
    };
    vec![
        Note::text(format!("Playing it out {turn_order}:")),
        Note::line_break(),
        Note::text("resolved"),
        Note::card(WIN_CONDITION),
        Note::text(when),
    ]
}

/// Chart payload embedded in the stats target: header row, one row per turn
/// bucket, session rate plus the historical average as a second series.
pub fn build_stats_payload(stats: &TurnStats, on_the_play: bool) -> String {
    let (avg_vals, avg_title) = if on_the_play {
        (AVG_ON_THE_PLAY, "average on the play")
    } else {
        (AVG_ON_THE_DRAW, "average on the draw")
    };

    let total = stats.total() as f64;
    let counts = stats.counts();

    let mut data_arr = vec![json!(["Turn", "Completion Rate", avg_title])];
    for bucket in 0..5 {
        let rate = if total > 0.0 {
            counts[bucket] as f64 / total
        } else {
            0.0
        };
        data_arr.push(json!([X_TICKS[bucket], rate, avg_vals[bucket]]));
    }

    json!({
        "data_arr": data_arr,
        "options": {
            "title": "How does this compare to an average hand?",
            "vAxis": { "title": "Probability by Turn", "format": "percent" },
            "hAxis": { "title": "Turn" },
            "width": "100%",
            "height": 400,
            "legend": "none",
            "bar": { "groupWidth": "90%" },
            "colors": ["green", "black"]
        }
    })
    .to_string()
}
