//! Scenario runner that drives a [`JumbleApp`] without a window.
//!
//! Steps run in order against a freshly built app. The first failing
//! assertion stops the run and is reported with its step index; setup
//! problems (bad JSON, unknown pages, invalid config) are errors.

use anyhow::{Context, Result};
use jumble_layout::{PageChrome, ScrollSurface};

use crate::app::JumbleApp;
use crate::config::AppConfig;
use crate::headless_report::HeadlessReport;
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

/// Expected chrome state; `None` fields are not checked
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeExpectation {
    pub titlebar: Option<bool>,
    pub bottom_navigation: Option<bool>,
    pub scroll_to_top: Option<bool>,
}

pub fn evaluate_assert_chrome(expected: &ChromeExpectation, chrome: &PageChrome) -> AssertionResult {
    let checks = [
        ("titlebar", expected.titlebar, chrome.titlebar),
        ("bottom_navigation", expected.bottom_navigation, chrome.bottom_navigation),
        ("scroll_to_top", expected.scroll_to_top, chrome.scroll_to_top),
    ];
    for (name, want, actual) in checks {
        let Some(want) = want else { continue };
        let shown = actual.unwrap_or(false);
        if shown != want {
            return AssertionResult::Failed {
                code: "chrome_mismatch".to_string(),
                message: format!("{name}: expected shown={want}, got {actual:?}"),
            };
        }
    }
    AssertionResult::Passed
}

pub fn evaluate_assert_offset(expected: f32, actual: Option<f32>) -> AssertionResult {
    let Some(actual) = actual else {
        return AssertionResult::Failed {
            code: "missing_surface".to_string(),
            message: "no active scroll surface".to_string(),
        };
    };
    if (actual - expected).abs() <= f32::EPSILON {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "offset_mismatch".to_string(),
            message: format!("expected offset {expected}, got {actual}"),
        }
    }
}

/// Execute scenario JSON with the default configuration.
pub fn run_scenario(input: &str) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, AppConfig::default())
}

/// Execute a pre-loaded scenario.
pub fn run_loaded_scenario(scenario: &HeadlessScenario, config: AppConfig) -> Result<RunOutcome> {
    let mut app = JumbleApp::new(config, scenario.width, scenario.height)
        .context("failed to build app for scenario")?;
    if let Some(height) = scenario.content_height {
        app.set_content_height(height);
    }

    for (step_index, step) in scenario.steps.iter().enumerate() {
        tracing::trace!(step_index, ?step, "scenario step");
        let (assertion, result) = match step {
            ScenarioStep::Resize { width, height } => {
                app.set_viewport_size(*width, *height);
                continue;
            }
            ScenarioStep::SetContentHeight { height } => {
                app.set_content_height(*height);
                continue;
            }
            ScenarioStep::Scroll { to } => {
                app.scroll_to(*to);
                continue;
            }
            ScenarioStep::ScrollBy { delta } => {
                app.scroll_by(*delta);
                continue;
            }
            ScenarioStep::Navigate { page } => {
                app.navigate_primary(page)
                    .with_context(|| format!("step {step_index}: navigate"))?;
                continue;
            }
            ScenarioStep::ScrollToTop => {
                app.scroll_to_top();
                continue;
            }
            ScenarioStep::AssertChrome {
                titlebar,
                bottom_navigation,
                scroll_to_top,
            } => {
                let expected = ChromeExpectation {
                    titlebar: *titlebar,
                    bottom_navigation: *bottom_navigation,
                    scroll_to_top: *scroll_to_top,
                };
                ("assert_chrome", evaluate_assert_chrome(&expected, &app.chrome()))
            }
            ScenarioStep::AssertOffset { value } => {
                let actual = app.active_surface().map(|s| s.offset());
                ("assert_offset", evaluate_assert_offset(*value, actual))
            }
        };

        if let AssertionResult::Failed { message, .. } = result {
            let report = HeadlessReport::failed(
                assertion,
                step_index,
                message,
                app.current_page().to_string(),
            );
            return Ok(RunOutcome::Failed { report });
        }
    }

    Ok(RunOutcome::Passed {
        report: HeadlessReport::passed(scenario.steps.len(), app.current_page().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_assertion_treats_absent_as_hidden() {
        let chrome = PageChrome {
            titlebar: Some(true),
            bottom_navigation: None,
            scroll_to_top: Some(false),
        };
        let expected = ChromeExpectation {
            bottom_navigation: Some(false),
            ..Default::default()
        };
        assert_eq!(evaluate_assert_chrome(&expected, &chrome), AssertionResult::Passed);

        let expected = ChromeExpectation {
            titlebar: Some(false),
            ..Default::default()
        };
        assert!(matches!(
            evaluate_assert_chrome(&expected, &chrome),
            AssertionResult::Failed { ref code, .. } if code == "chrome_mismatch"
        ));
    }

    #[test]
    fn offset_assertion_needs_a_surface() {
        assert!(matches!(
            evaluate_assert_offset(0.0, None),
            AssertionResult::Failed { ref code, .. } if code == "missing_surface"
        ));
        assert_eq!(evaluate_assert_offset(120.0, Some(120.0)), AssertionResult::Passed);
    }

    #[test]
    fn unknown_page_is_a_setup_error() {
        let err = run_scenario(r#"{"steps": [{"type": "navigate", "page": "explore"}]}"#)
            .unwrap_err();
        assert!(format!("{err:#}").contains("unknown primary page `explore`"));
    }
}
