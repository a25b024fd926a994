//! Cross-crate contract: payloads produced by the api stand-in, and the
//! legacy flat lists older renderings emit, must both flow through the ui
//! stats pipeline.

use ui::stats::{self, ChartSpec, TURN_LABELS};

#[test]
fn server_payload_flows_through_the_renderer() {
    let mut counts = api::TurnStats::default();
    counts.record(2);
    counts.record(3);
    counts.record(3);

    let payload = api::model::build_stats_payload(&counts, true);
    let model = stats::maybe_render_stats(Some(&payload)).expect("payload should render");
    assert_eq!(model.data_arr.len(), 6, "header plus five turn buckets");

    let spec = ChartSpec::from_model(&model).expect("payload should produce geometry");
    assert_eq!(spec.bars.len(), 5);
    assert_eq!(spec.overlays.len(), 1, "historical average series");
    assert_eq!(spec.title, "How does this compare to an average hand?");
    // The payload asks for "100%" width, which falls back to the fixed size.
    assert_eq!(spec.width, 600.0);
    assert_eq!(spec.height, 400.0);
}

#[test]
fn legacy_flat_payloads_still_render() {
    let model = stats::maybe_render_stats(Some("x,10,20,30,40")).expect("flat payload");
    assert_eq!(model.data_arr.len(), 5);
    for (row, label) in model.data_arr[1..].iter().zip(TURN_LABELS) {
        assert_eq!(row[0], label);
    }
    assert_eq!(model.data_arr[1][1].as_f64(), Some(0.1));
    assert_eq!(model.data_arr[4][1].as_f64(), Some(0.4));
}

#[test]
fn missing_stats_target_is_a_quiet_no_op() {
    assert!(stats::maybe_render_stats(None).is_none());
}

#[test]
fn bad_payloads_never_panic_and_never_render() {
    for text in ["", "{", "not,even,close", "x,1,2,3,oops", "x,0,0,0,0"] {
        assert!(
            stats::maybe_render_stats(Some(text)).is_none(),
            "payload {text:?} should not render"
        );
    }
}
