use shared::presentation::confirmation_message;
use shared::UiConfig;
use web_sys::Document;

use crate::selectors::{CONFIRM_DELETE, CONFIRM_MESSAGE_ATTR};
use crate::services::dom::{listen, query_all};

/// Ask before following a destructive link or submitting a delete form.
pub fn bind(document: &Document, _config: &UiConfig) -> anyhow::Result<()> {
    for element in query_all(document, CONFIRM_DELETE)? {
        let target = element.clone();
        listen(&element, "click", move |event| {
            let custom = target.get_attribute(CONFIRM_MESSAGE_ATTR);
            let message = confirmation_message(custom.as_deref());
            let confirmed = web_sys::window()
                .and_then(|window| window.confirm_with_message(message).ok())
                .unwrap_or(false);
            if !confirmed {
                event.prevent_default();
                event.stop_propagation();
            }
        })?;
    }
    Ok(())
}
