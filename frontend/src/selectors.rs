//! Element ids, selectors and attributes the server-rendered pages provide.

pub const THEME_TOGGLE_ID: &str = "theme-toggle";

pub const TRANSIENT_ALERTS: &str = ".alert:not(.alert-permanent)";
pub const CLOSE_BUTTON: &str = ".btn-close";

pub const CURRENCY_INPUTS: &str = r#"input[type="number"][step="0.01"]"#;

pub const CONFIRM_DELETE: &str = "[data-confirm-delete]";
pub const CONFIRM_MESSAGE_ATTR: &str = "data-confirm-message";

pub const TOOLTIP_TRIGGERS: &str = r#"[data-bs-toggle="tooltip"]"#;

pub const SEARCH_INPUT_ID: &str = "searchExpenses";
pub const FILTER_ROWS: &str = ".expense-row, tbody tr";

pub const PROGRESS_BARS: &str = ".progress-bar";
pub const DATA_WIDTH_ATTR: &str = "data-width";
pub const BUDGET_BARS: &str = ".progress-bar[data-budget-percentage]";
pub const BUDGET_PERCENTAGE_ATTR: &str = "data-budget-percentage";

pub const IN_PAGE_ANCHORS: &str = r##"a[href^="#"]"##;

pub const VALIDATED_FORMS: &str = ".needs-validation";
pub const WAS_VALIDATED_CLASS: &str = "was-validated";

pub const RECURRING_CHECKBOX_ID: &str = "is_recurring";
pub const FREQUENCY_FIELD_ID: &str = "recurrence_frequency";
pub const FIELD_WRAPPER: &str = ".mb-3";

pub const CATEGORY_CHART_ID: &str = "categoryChart";
pub const CHART_DATA_ATTR: &str = "data-chart";

pub const ALERT_DISMISS_BUTTONS: &str = ".alert-dismiss";
pub const ALERTS_CONTAINER: &str = ".alerts-container";
pub const CSRF_META_NAME: &str = "csrf-token";
