use serde::Deserialize;
use thiserror::Error;

use crate::alerts::MARK_ALERTS_READ_PATH;
use crate::budget::BudgetThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Fixed delays and thresholds used by the page behaviors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiTimings {
    pub alert_dismiss_ms: u32,
    pub toast_dismiss_ms: u32,
    pub filter_debounce_ms: u32,
    pub counter_tick_ms: u32,
    pub progress_reveal_delay_ms: u32,
    /// Fraction of a progress bar that must be visible before it animates.
    pub progress_visibility_threshold: f64,
}

impl Default for UiTimings {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: 5000,
            toast_dismiss_ms: 4000,
            filter_debounce_ms: 300,
            counter_tick_ms: 16,
            progress_reveal_delay_ms: 100,
            progress_visibility_threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub timings: UiTimings,
    pub budget: BudgetThresholds,
    pub alerts_read_path: String,
    pub log_level: LogLevel,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timings: UiTimings::default(),
            budget: BudgetThresholds::default(),
            alerts_read_path: MARK_ALERTS_READ_PATH.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid UI config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl UiConfig {
    /// Parse a partial override; omitted fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}
