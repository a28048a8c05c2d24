//! Scenario definition for headless layout diagnostics.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Viewport and steps for one headless run.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    /// Content height of the first page
    #[serde(default)]
    pub content_height: Option<f32>,
    pub steps: Vec<ScenarioStep>,
}

fn default_width() -> f32 {
    390.0
}

fn default_height() -> f32 {
    844.0
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Resize {
        width: f32,
        height: f32,
    },
    SetContentHeight {
        height: f32,
    },
    Scroll {
        to: f32,
    },
    ScrollBy {
        delta: f32,
    },
    Navigate {
        page: String,
    },
    ScrollToTop,
    /// Omitted fields are not checked. Elements absent from the layout count
    /// as hidden.
    AssertChrome {
        #[serde(default)]
        titlebar: Option<bool>,
        #[serde(default)]
        bottom_navigation: Option<bool>,
        #[serde(default)]
        scroll_to_top: Option<bool>,
    },
    AssertOffset {
        value: f32,
    },
}
