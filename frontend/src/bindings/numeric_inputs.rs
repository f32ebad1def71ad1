use shared::{normalize_decimal_input, UiConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::selectors::CURRENCY_INPUTS;
use crate::services::dom::{listen, query_all};

/// Rewrite currency fields to two decimals when they lose focus.
pub fn bind(document: &Document, _config: &UiConfig) -> anyhow::Result<()> {
    for element in query_all(document, CURRENCY_INPUTS)? {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let target = input.clone();
        listen(&input, "blur", move |_| {
            if let Some(normalized) = normalize_decimal_input(&target.value()) {
                target.set_value(&normalized);
            }
        })?;
    }
    Ok(())
}
