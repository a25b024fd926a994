//! Session statistics: payload parsing plus the column chart that renders
//! them.

mod chart;
mod parse;

pub use chart::{Bar, ChartSpec, ColumnChart, Overlay};
pub use parse::{shares, ChartModel, StatsPayload, FLAT_TITLE, TURN_LABELS};

use dioxus::logger::tracing::debug;

/// Best-effort chart model from the embedded stats payload.
///
/// An absent stats target is a no-op, a malformed payload aborts silently,
/// and nothing is ever surfaced to the user beyond "no chart appeared".
pub fn maybe_render_stats(payload: Option<&str>) -> Option<ChartModel> {
    let Some(text) = payload else {
        debug!("stats target missing; skipping chart");
        return None;
    };

    match StatsPayload::parse(text) {
        Ok(payload) => payload.into_chart_model(),
        Err(err) => {
            debug!("unrenderable stats payload: {err}");
            None
        }
    }
}
