//! Wire contract between the Goldfish UI and the playout service.
//!
//! The solver that decides when a hand actually resolves its win condition
//! sits behind the two server functions here. This crate owns the types that
//! cross the wire, plus a lightweight stand-in model (`model`) that samples
//! outcomes from historical completion rates so the app runs end to end.

use dioxus::prelude::*;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod model;

/// A dealt opening hand plus the rest of the shuffled library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opener {
    pub hand: Vec<String>,
    pub library: Vec<String>,
    pub on_the_play: bool,
}

/// Session counts of which turn each play resolved on. Bucket 5 means
/// "turn five or later".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TurnStats {
    counts: [u64; 5],
}

impl TurnStats {
    pub fn counts(&self) -> [u64; 5] {
        self.counts
    }

    pub fn record(&mut self, turn: u32) {
        let bucket = turn.clamp(1, 5) as usize - 1;
        self.counts[bucket] += 1;
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Legacy transport form: `"c1,c2,c3,c4,c5"`.
    pub fn to_legacy_list(&self) -> String {
        self.counts.map(|n| n.to_string()).join(",")
    }

    pub fn from_legacy_list(text: &str) -> Result<Self, String> {
        let tokens: Vec<&str> = text.split(',').collect();
        if tokens.len() != 5 {
            return Err(format!("expected 5 turn buckets, got {}", tokens.len()));
        }
        let mut counts = [0u64; 5];
        for (slot, token) in counts.iter_mut().zip(tokens) {
            *slot = token
                .trim()
                .parse::<u64>()
                .map_err(|err| format!("bad turn bucket {token:?}: {err}"))?;
        }
        Ok(Self { counts })
    }
}

// Older deployments shipped stats as a bare comma list; the serde form keeps
// that shape on the wire.
impl Serialize for TurnStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_legacy_list())
    }
}

impl<'de> Deserialize<'de> for TurnStats {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_legacy_list(&text).map_err(D::Error::custom)
    }
}

/// One fragment of a playout summary. `Card` fragments render as clickable
/// card names that open the autocard overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteKind {
    Text,
    Card,
    Mana,
    LineBreak,
    TurnBreak,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    pub kind: NoteKind,
}

impl Note {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoteKind::Text,
        }
    }

    pub fn card(name: impl Into<String>) -> Self {
        Self {
            text: name.into(),
            kind: NoteKind::Card,
        }
    }

    pub fn alert(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoteKind::Alert,
        }
    }

    pub fn line_break() -> Self {
        Self {
            text: String::new(),
            kind: NoteKind::LineBreak,
        }
    }
}

/// Everything the client needs after a playout: the (unchanged) opener, the
/// summary note stream, updated session stats, and the chart payload that
/// gets embedded in the stats target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub opener: Opener,
    pub notes: Vec<Note>,
    pub stats: TurnStats,
    pub stats_payload: String,
}

/// Shuffle the deck and deal a fresh seven-card opener.
#[server]
pub async fn new_opener() -> Result<Opener, ServerFnError> {
    Ok(model::deal_opener())
}

/// Play the given opener out and fold the result into the session stats.
#[server]
pub async fn play_it_out(opener: Opener, stats: TurnStats) -> Result<PlayOutcome, ServerFnError> {
    Ok(model::play_it_out(opener, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_list_round_trips() {
        let stats = TurnStats::from_legacy_list("2,5,7,6,3").unwrap();
        assert_eq!(stats.counts(), [2, 5, 7, 6, 3]);
        assert_eq!(stats.to_legacy_list(), "2,5,7,6,3");
        assert_eq!(stats.total(), 23);
    }

    #[test]
    fn legacy_list_rejects_wrong_arity_and_garbage() {
        assert!(TurnStats::from_legacy_list("1,2,3,4").is_err());
        assert!(TurnStats::from_legacy_list("1,2,3,4,5,6").is_err());
        assert!(TurnStats::from_legacy_list("a,2,3,4,5").is_err());
        assert!(TurnStats::from_legacy_list("").is_err());
    }

    #[test]
    fn record_clamps_turns_into_the_last_bucket() {
        let mut stats = TurnStats::default();
        stats.record(3);
        stats.record(5);
        stats.record(9);
        assert_eq!(stats.counts(), [0, 0, 1, 0, 2]);
    }

    #[test]
    fn serde_form_is_the_legacy_string() {
        let stats = TurnStats::from_legacy_list("0,1,2,3,4").unwrap();
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, "\"0,1,2,3,4\"");
        let back: TurnStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
