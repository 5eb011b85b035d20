//! User settings for the grocery budget planner
//!
//! Settings start from defaults, may be loaded from a JSON file and are then
//! overridden by command-line flags. Nothing is ever written back.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};
use crate::models::category::SUGGESTED_CATEGORIES;

/// Order of the per-category lines in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// The order the categories were first entered
    #[default]
    Entry,
    /// Largest allocation first
    Amount,
}

/// How the final report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Csv,
}

impl OutputFormat {
    /// Whether stdout must carry only the report document
    pub fn is_structured(&self) -> bool {
        !matches!(self, Self::Text)
    }
}

/// User settings for a planning session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Give up after this many consecutive invalid entries (unbounded if unset)
    #[serde(default)]
    pub max_attempts: Option<u32>,

    /// Remaining budget below this percentage counts as "almost full"
    #[serde(default = "default_almost_full_threshold_pct")]
    pub almost_full_threshold_pct: u32,

    /// Largest category above this multiple of the smallest is "unbalanced"
    #[serde(default = "default_imbalance_ratio")]
    pub imbalance_ratio: u32,

    /// Ordering of the category breakdown
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Report format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Accept allocations that push the total past the weekly budget
    #[serde(default = "default_true")]
    pub allow_overspend: bool,

    /// Draw a proportional bar next to each category
    #[serde(default = "default_true")]
    pub show_bars: bool,

    /// Names suggested when no categories were entered
    #[serde(default = "default_suggested_categories")]
    pub suggested_categories: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_almost_full_threshold_pct() -> u32 {
    10
}

fn default_imbalance_ratio() -> u32 {
    3
}

fn default_true() -> bool {
    true
}

fn default_suggested_categories() -> Vec<String> {
    SUGGESTED_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            max_attempts: None,
            almost_full_threshold_pct: default_almost_full_threshold_pct(),
            imbalance_ratio: default_imbalance_ratio(),
            sort_order: SortOrder::default(),
            output_format: OutputFormat::default(),
            allow_overspend: true,
            show_bars: true,
            suggested_categories: default_suggested_categories(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> PlannerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PlannerError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            PlannerError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> PlannerResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject settings that would make the report meaningless
    pub fn validate(&self) -> PlannerResult<()> {
        if self.max_attempts == Some(0) {
            return Err(PlannerError::Config(
                "max_attempts must be at least 1".into(),
            ));
        }

        if self.almost_full_threshold_pct > 100 {
            return Err(PlannerError::Config(format!(
                "almost_full_threshold_pct must be between 0 and 100, got {}",
                self.almost_full_threshold_pct
            )));
        }

        if self.imbalance_ratio < 1 {
            return Err(PlannerError::Config(
                "imbalance_ratio must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
