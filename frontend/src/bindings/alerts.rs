use gloo::timers::future::TimeoutFuture;
use shared::UiConfig;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::selectors::{CLOSE_BUTTON, TRANSIENT_ALERTS};
use crate::services::bootstrap::close_alert;
use crate::services::dom::{js_error, query_all};
use crate::services::logging::Logger;

fn ensure_close_button(document: &Document, alert: &Element) -> anyhow::Result<()> {
    if alert.query_selector(CLOSE_BUTTON).map_err(js_error)?.is_some() {
        return Ok(());
    }
    let button = document.create_element("button").map_err(js_error)?;
    button.set_class_name("btn-close");
    button
        .set_attribute("data-bs-dismiss", "alert")
        .map_err(js_error)?;
    alert.append_child(&button).map_err(js_error)?;
    Ok(())
}

/// Give every flash message a close button and dismiss it after a fixed
/// delay, whether or not the user has interacted with it.
pub fn bind(document: &Document, config: &UiConfig) -> anyhow::Result<()> {
    let delay = config.timings.alert_dismiss_ms;

    for alert in query_all(document, TRANSIENT_ALERTS)? {
        // a missing close button never holds back the dismissal timer
        if let Err(e) = ensure_close_button(document, &alert) {
            Logger::warn_with_component("alerts", &format!("{:#}", e));
        }

        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            close_alert(&alert);
        });
    }
    Ok(())
}
