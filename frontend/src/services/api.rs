use gloo::net::http::Request;
use shared::{MarkAlertsReadResponse, CSRF_HEADER};

/// Client for the budgeting server's JSON endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client for the page's own origin
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST for the alert-read endpoint: JSON content type and the page's
    /// CSRF token, which may be empty.
    pub fn mark_alerts_read_request(&self, path: &str, csrf_token: &str) -> Result<Request, String> {
        Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .header(CSRF_HEADER, csrf_token)
            .build()
            .map_err(|e| format!("Failed to build request: {}", e))
    }

    /// Acknowledge every unread budget alert.
    ///
    /// The body is decoded whatever the HTTP status, since the server reports
    /// failures as `{"status": "error"}` with a 500.
    pub async fn mark_alerts_read(
        &self,
        path: &str,
        csrf_token: &str,
    ) -> Result<MarkAlertsReadResponse, String> {
        let request = self.mark_alerts_read_request(path, csrf_token)?;

        match request.send().await {
            Ok(response) => match response.json::<MarkAlertsReadResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!(
                    "Failed to parse response (HTTP {}): {}",
                    response.status(),
                    e
                )),
            },
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
