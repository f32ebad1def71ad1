use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

/// Turn a thrown JS value into an error we can log.
pub fn js_error(value: JsValue) -> anyhow::Error {
    match value.as_string() {
        Some(message) => anyhow!(message),
        None => anyhow!("{:?}", value),
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> anyhow::Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Attach `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> anyhow::Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

pub fn set_style(element: &Element, property: &str, value: &str) -> anyhow::Result<()> {
    let element = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| anyhow!("<{}> has no inline style", element.tag_name()))?;
    element
        .style()
        .set_property(property, value)
        .map_err(js_error)
}

pub fn inline_style(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|element| element.style().get_property_value(property).ok())
        .unwrap_or_default()
}

/// Whether the parser is still building the document, so bindings must wait
/// for `DOMContentLoaded`.
pub fn is_loading(document: &Document) -> bool {
    document.ready_state() == "loading"
}

/// Content of `<meta name="...">`, if the page carries one.
pub fn meta_content(document: &Document, name: &str) -> Option<String> {
    query_one(document, &format!("meta[name=\"{}\"]", name))
        .and_then(|meta| meta.get_attribute("content"))
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_query_all_returns_elements_in_order() {
        let container = fixture(r#"<span class="dom-probe">a</span><span class="dom-probe">b</span>"#);
        let found = query_all(&document(), ".dom-probe").unwrap();
        let texts: Vec<_> = found.iter().filter_map(|e| e.text_content()).collect();
        assert_eq!(texts, vec!["a", "b"]);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_listen_invokes_handler() {
        let container = fixture(r#"<button id="dom-listen-probe"></button>"#);
        let button = document().get_element_by_id("dom-listen-probe").unwrap();
        let clicks = Rc::new(Cell::new(0));
        {
            let clicks = clicks.clone();
            listen(&button, "click", move |_| clicks.set(clicks.get() + 1)).unwrap();
        }
        button.dispatch_event(&cancelable_event("click")).unwrap();
        button.dispatch_event(&cancelable_event("click")).unwrap();
        assert_eq!(clicks.get(), 2);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_ready_document_is_not_loading() {
        let document = document();
        assert_ne!(document.ready_state(), "loading");
        assert!(!is_loading(&document));
    }

    #[wasm_bindgen_test]
    fn test_set_and_read_inline_style() {
        let container = fixture(r#"<div id="dom-style-probe" style="width: 40%"></div>"#);
        let element = document().get_element_by_id("dom-style-probe").unwrap();
        assert_eq!(inline_style(&element, "width"), "40%");
        set_style(&element, "width", "0%").unwrap();
        assert_eq!(inline_style(&element, "width"), "0%");
        container.remove();
    }
}
