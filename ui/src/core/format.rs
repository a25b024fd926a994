//! Formatting helpers for presenting rates and counts.

pub fn format_percent(share: f64) -> String {
    format!("{:.0}%", share * 100.0)
}

pub fn format_games(total: u64) -> String {
    if total == 1 {
        "1 game".to_string()
    } else {
        format!("{total} games")
    }
}
