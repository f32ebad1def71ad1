//! Target-independent logic behind the Centsible page enhancements.
//!
//! Nothing in this crate touches the DOM; the `frontend` crate binds these
//! rules to elements and events.

pub mod alerts;
pub mod animation;
pub mod budget;
pub mod chart;
pub mod config;
pub mod currency;
pub mod filter;
pub mod presentation;
pub mod theme;
pub mod toast;

pub use alerts::{should_remove_alerts, MarkAlertsReadResponse, CSRF_HEADER, MARK_ALERTS_READ_PATH};
pub use animation::{CounterAnimation, CounterFrame};
pub use budget::{parse_percentage, BudgetSeverity, BudgetThresholds};
pub use chart::{
    parse_chart_payload, parse_hex_color, segment_angles, CategoryChartData, ChartPayload,
    ChartPayloadError, ChartPlaceholder, ChartTheme,
};
pub use config::{ConfigError, LogLevel, UiConfig, UiTimings};
pub use currency::{format_currency, normalize_decimal_input, CURRENCY_SYMBOL};
pub use filter::{row_display, row_matches};
pub use theme::{Theme, DARK_MODE_CLASS, THEME_STORAGE_KEY};
pub use toast::ToastKind;
