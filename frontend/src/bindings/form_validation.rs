use shared::UiConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement};

use crate::selectors::{VALIDATED_FORMS, WAS_VALIDATED_CLASS};
use crate::services::dom::{listen, query_all};
use crate::services::logging::Logger;

/// Block invalid submissions and mark the form so styles can show errors.
pub fn bind(document: &Document, _config: &UiConfig) -> anyhow::Result<()> {
    for element in query_all(document, VALIDATED_FORMS)? {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let target = form.clone();
        listen(&form, "submit", move |event| {
            if !target.check_validity() {
                event.prevent_default();
                event.stop_propagation();
            }
            if let Err(e) = target.class_list().add_1(WAS_VALIDATED_CLASS) {
                Logger::warn_with_component("form-validation", &format!("{:?}", e));
            }
        })?;
    }
    Ok(())
}
