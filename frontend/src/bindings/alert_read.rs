use shared::{should_remove_alerts, MarkAlertsReadResponse, UiConfig};
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::selectors::{ALERTS_CONTAINER, ALERT_DISMISS_BUTTONS, CSRF_META_NAME};
use crate::services::api::ApiClient;
use crate::services::dom::{listen, meta_content, query_all, query_one};
use crate::services::logging::Logger;

const COMPONENT: &str = "alert-read";

/// Remove the alerts container after a successful acknowledgement. Failures
/// leave the page untouched. Returns whether the container was removed.
pub fn apply_outcome(document: &Document, outcome: &Result<MarkAlertsReadResponse, String>) -> bool {
    if !should_remove_alerts(outcome) {
        match outcome {
            Ok(response) => Logger::warn_with_component(
                COMPONENT,
                &format!(
                    "Server answered {:?}: {}",
                    response.status,
                    response.message.as_deref().unwrap_or("no message")
                ),
            ),
            Err(e) => Logger::warn_with_component(COMPONENT, e),
        }
        return false;
    }

    match query_one(document, ALERTS_CONTAINER) {
        Some(container) => {
            container.remove();
            true
        }
        None => false,
    }
}

/// Token from `<meta name="csrf-token">`, empty when the page has none.
pub fn csrf_token(document: &Document) -> String {
    meta_content(document, CSRF_META_NAME).unwrap_or_default()
}

pub fn bind(document: &Document, config: &UiConfig) -> anyhow::Result<()> {
    let client = ApiClient::new();

    for button in query_all(document, ALERT_DISMISS_BUTTONS)? {
        let client = client.clone();
        let document = document.clone();
        let path = config.alerts_read_path.clone();

        listen(&button, "click", move |_| {
            let client = client.clone();
            let document = document.clone();
            let path = path.clone();
            let token = csrf_token(&document);

            spawn_local(async move {
                let outcome = client.mark_alerts_read(&path, &token).await;
                apply_outcome(&document, &outcome);
            });
        })?;
    }
    Ok(())
}
