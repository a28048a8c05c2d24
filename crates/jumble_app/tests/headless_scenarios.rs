use jumble_app::{run_loaded_scenario, run_scenario, AppConfig, HeadlessScenario, ReportStatus};
use jumble_layout::VisibilityThresholds;

fn assert_passes(name: &str, input: &str) {
    let outcome = run_scenario(input).unwrap_or_else(|e| panic!("{name}: {e:#}"));
    let report = outcome.report();
    assert!(
        !outcome.is_failed(),
        "{name}: step {:?} {:?}: {:?}",
        report.failed_step_index,
        report.assertion,
        report.message
    );
}

#[test]
fn small_screen_feed() {
    assert_passes(
        "small_screen_feed",
        include_str!("scenarios/small_screen_feed.json"),
    );
}

#[test]
fn bottom_edge_reveals_chrome() {
    assert_passes("bottom_edge", include_str!("scenarios/bottom_edge.json"));
}

#[test]
fn large_screen_container() {
    assert_passes(
        "large_screen_container",
        include_str!("scenarios/large_screen_container.json"),
    );
}

#[test]
fn page_switch_reset() {
    assert_passes(
        "page_switch_reset",
        include_str!("scenarios/page_switch_reset.json"),
    );
}

#[test]
fn failing_assertion_is_reported() {
    let outcome = run_scenario(include_str!("scenarios/failing_assertion.json")).unwrap();
    assert!(outcome.is_failed());

    let report = outcome.report();
    assert_eq!(report.status, ReportStatus::Failed);
    assert_eq!(report.failed_step_index, Some(2));
    assert_eq!(report.assertion.as_deref(), Some("assert_chrome"));
    assert_eq!(report.page, "home");

    let mut out = Vec::new();
    report.write_to_writer(&mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["status"], "failed");
    assert_eq!(json["failed_step_index"], 2);
}

#[test]
fn custom_thresholds_apply() {
    let scenario = HeadlessScenario::from_json(
        r#"{
            "content_height": 20000,
            "steps": [
                { "type": "scroll", "to": 500 },
                { "type": "assert_chrome", "bottom_navigation": false }
            ]
        }"#,
    )
    .unwrap();
    let config = AppConfig {
        scroll: VisibilityThresholds {
            reveal_offset: 300.0,
            ..VisibilityThresholds::default()
        },
        ..AppConfig::default()
    };
    let outcome = run_loaded_scenario(&scenario, config).unwrap();
    assert!(!outcome.is_failed(), "{:?}", outcome.report().message);
}

#[test]
fn report_path_must_be_relative() {
    let outcome = run_scenario(r#"{"steps": []}"#).unwrap();
    let err = outcome
        .report()
        .write_to_path(std::path::Path::new("/tmp/report.json"))
        .unwrap_err();
    assert!(err.to_string().contains("relative"));
}
