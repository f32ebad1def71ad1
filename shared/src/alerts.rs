use serde::Deserialize;

/// Endpoint acknowledging every unread budget alert for the signed-in user.
pub const MARK_ALERTS_READ_PATH: &str = "/budgets/mark_alerts_read";

pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarkAlertsReadResponse {
    pub status: String,
    /// Present on failures, e.g. "Error updating alerts".
    #[serde(default)]
    pub message: Option<String>,
}

impl MarkAlertsReadResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Only a decoded `{"status": "success"}` removes the alerts container.
pub fn should_remove_alerts(outcome: &Result<MarkAlertsReadResponse, String>) -> bool {
    matches!(outcome, Ok(response) if response.is_success())
}
