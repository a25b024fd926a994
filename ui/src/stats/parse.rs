//! Stats payload parsing.
//!
//! The stats target's text content arrives in one of two shapes, depending
//! on which server rendering produced it: a prebuilt chart payload
//! (`{"data_arr": [...], "options": {...}}`), or the legacy flat comma list
//! of five tokens whose first token is a placeholder and whose remaining
//! four are counts for turn buckets 2, 3, 4 and 5+.

use serde::Deserialize;
use serde_json::{Map, Value};

pub const TURN_LABELS: [&str; 4] = ["2", "3", "4", "5+"];

pub const FLAT_TITLE: &str = "Completion rate by turn";
const FLAT_WIDTH: u32 = 600;
const FLAT_HEIGHT: u32 = 400;

#[derive(Debug, Clone, PartialEq)]
pub enum StatsPayload {
    /// Structured payload carried through to the chart unmodified.
    Prebuilt {
        data_arr: Vec<Vec<Value>>,
        options: Map<String, Value>,
    },
    /// Counts from the legacy flat list, one per turn bucket.
    TurnCounts([u64; 4]),
}

#[derive(Debug, Deserialize)]
struct PrebuiltPayload {
    data_arr: Vec<Vec<Value>>,
    options: Map<String, Value>,
}

impl StatsPayload {
    pub fn parse(text: &str) -> Result<Self, String> {
        let text = text.trim();
        if text.is_empty() {
            return Err("empty stats payload".to_string());
        }

        if text.starts_with('{') {
            let payload: PrebuiltPayload =
                serde_json::from_str(text).map_err(|err| err.to_string())?;
            return Ok(Self::Prebuilt {
                data_arr: payload.data_arr,
                options: payload.options,
            });
        }

        Self::parse_flat(text)
    }

    fn parse_flat(text: &str) -> Result<Self, String> {
        let tokens: Vec<&str> = text.split(',').collect();
        if tokens.len() != 5 {
            return Err(format!(
                "expected 5 comma-separated tokens, got {}",
                tokens.len()
            ));
        }

        let mut counts = [0u64; 4];
        // Token 0 is a placeholder left over from the old server rendering.
        for (slot, token) in counts.iter_mut().zip(&tokens[1..]) {
            *slot = token
                .trim()
                .parse::<u64>()
                .map_err(|err| format!("bad count {token:?}: {err}"))?;
        }
        Ok(Self::TurnCounts(counts))
    }

    /// Tabular model for the chart widget. `None` when every count is zero:
    /// the shares would all be NaN, and the chart draws nothing instead.
    pub fn into_chart_model(self) -> Option<ChartModel> {
        match self {
            Self::Prebuilt { data_arr, options } => Some(ChartModel { data_arr, options }),
            Self::TurnCounts(counts) => {
                let shares = shares(&counts)?;

                let mut data_arr = vec![vec![
                    Value::from("Turn"),
                    Value::from("Completion rate"),
                ]];
                for (label, share) in TURN_LABELS.iter().zip(shares) {
                    data_arr.push(vec![Value::from(*label), Value::from(share)]);
                }

                Some(ChartModel {
                    data_arr,
                    options: flat_options(),
                })
            }
        }
    }
}

/// What the chart widget consumes: a header row plus data rows, and the
/// options mapping it understands a subset of.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub data_arr: Vec<Vec<Value>>,
    pub options: Map<String, Value>,
}

/// Per-bucket share of the total, or `None` when every count is zero.
pub fn shares(counts: &[u64; 4]) -> Option<[f64; 4]> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return None;
    }
    let total = total as f64;
    Some(counts.map(|count| count as f64 / total))
}

fn flat_options() -> Map<String, Value> {
    let mut bar = Map::new();
    bar.insert("groupWidth".to_string(), Value::from("100%"));

    let mut options = Map::new();
    options.insert("title".to_string(), Value::from(FLAT_TITLE));
    options.insert("width".to_string(), Value::from(FLAT_WIDTH));
    options.insert("height".to_string(), Value::from(FLAT_HEIGHT));
    options.insert("legend".to_string(), Value::from("none"));
    options.insert("bar".to_string(), Value::Object(bar));
    options
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn flat_list_ignores_the_leading_token() {
        let payload = StatsPayload::parse("x,10,20,30,40").unwrap();
        assert_eq!(payload, StatsPayload::TurnCounts([10, 20, 30, 40]));
    }

    #[test]
    fn flat_list_shares_are_fractions_of_the_total() {
        let StatsPayload::TurnCounts(counts) = StatsPayload::parse("x,10,20,30,40").unwrap()
        else {
            panic!("expected turn counts");
        };
        assert_eq!(shares(&counts).unwrap(), [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn flat_list_chart_rows_are_labeled_by_turn() {
        let model = StatsPayload::parse("0,1,1,1,1")
            .unwrap()
            .into_chart_model()
            .unwrap();
        assert_eq!(model.data_arr.len(), 5);
        for (row, label) in model.data_arr[1..].iter().zip(TURN_LABELS) {
            assert_eq!(row[0], label);
            assert_eq!(row[1].as_f64().unwrap(), 0.25);
        }
        assert_eq!(model.options["title"], FLAT_TITLE);
        assert_eq!(model.options["width"], 600);
        assert_eq!(model.options["height"], 400);
        assert_eq!(model.options["legend"], "none");
        assert_eq!(model.options["bar"]["groupWidth"], "100%");
    }

    #[test]
    fn prebuilt_payload_passes_through_unmodified() {
        let text = r#"{"data_arr": [["Turn","Rate"],["2",0.5]], "options": {"title":"T"}}"#;
        let StatsPayload::Prebuilt { data_arr, options } = StatsPayload::parse(text).unwrap()
        else {
            panic!("expected prebuilt payload");
        };
        assert_eq!(data_arr, vec![
            vec![json!("Turn"), json!("Rate")],
            vec![json!("2"), json!(0.5)],
        ]);
        assert_eq!(options["title"], "T");
    }

    #[test]
    fn malformed_payloads_are_rejected() {
        assert!(StatsPayload::parse("").is_err());
        assert!(StatsPayload::parse("   ").is_err());
        assert!(StatsPayload::parse("1,2,3,4").is_err());
        assert!(StatsPayload::parse("x,1,2,3,four").is_err());
        assert!(StatsPayload::parse(r#"{"data_arr": "#).is_err());
        assert!(StatsPayload::parse(r#"{"options": {}}"#).is_err());
    }

    #[test]
    fn zero_totals_render_nothing() {
        let payload = StatsPayload::parse("x,0,0,0,0").unwrap();
        assert_eq!(payload.into_chart_model(), None);
    }
}
