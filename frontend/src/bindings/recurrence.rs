use anyhow::anyhow;
use shared::presentation::frequency_display;
use shared::UiConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::selectors::{FIELD_WRAPPER, FREQUENCY_FIELD_ID, RECURRING_CHECKBOX_ID};
use crate::services::dom::{listen, set_style};
use crate::services::logging::Logger;

fn apply(checkbox: &HtmlInputElement, container: &Element) -> anyhow::Result<()> {
    set_style(container, "display", frequency_display(checkbox.checked()))
}

/// Show the recurrence frequency field only while "recurring" is checked.
pub fn bind(document: &Document, _config: &UiConfig) -> anyhow::Result<()> {
    let (Some(checkbox), Some(field)) = (
        document.get_element_by_id(RECURRING_CHECKBOX_ID),
        document.get_element_by_id(FREQUENCY_FIELD_ID),
    ) else {
        return Ok(());
    };
    let checkbox = checkbox
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| anyhow!("#{} is not an <input>", RECURRING_CHECKBOX_ID))?;

    let Some(container) = field
        .closest(FIELD_WRAPPER)
        .ok()
        .flatten()
        .or_else(|| field.parent_element())
    else {
        return Ok(());
    };

    apply(&checkbox, &container)?;

    let source = checkbox.clone();
    listen(&checkbox, "change", move |_| {
        if let Err(e) = apply(&source, &container) {
            Logger::warn_with_component("recurrence", &format!("{:#}", e));
        }
    })
}
