//! Bridge to the Bootstrap and Chart.js globals loaded by the page.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::dom::js_error;
use super::logging::Logger;

fn global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

fn toolkit_constructor(name: &str) -> Option<Function> {
    let bootstrap = global("bootstrap")?;
    Reflect::get(&bootstrap, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn construct(constructor: &Function, element: &Element) -> Result<JsValue, JsValue> {
    Reflect::construct(constructor, &Array::of1(element.as_ref()))
}

/// Dismiss an alert with Bootstrap's fade-out, or remove it outright when
/// Bootstrap isn't loaded.
pub fn close_alert(element: &Element) {
    let Some(constructor) = toolkit_constructor("Alert") else {
        element.remove();
        return;
    };

    let closed = construct(&constructor, element).and_then(|alert| {
        let close = Reflect::get(&alert, &JsValue::from_str("close"))?.dyn_into::<Function>()?;
        close.call0(&alert)
    });

    if let Err(e) = closed {
        Logger::warn_with_component(
            "bootstrap",
            &format!("Alert.close failed, removing element: {}", js_error(e)),
        );
        element.remove();
    }
}

/// Returns `Ok(false)` when Bootstrap isn't loaded.
pub fn init_tooltip(element: &Element) -> anyhow::Result<bool> {
    let Some(constructor) = toolkit_constructor("Tooltip") else {
        return Ok(false);
    };
    construct(&constructor, element).map_err(js_error)?;
    Ok(true)
}

pub fn has_toolkit() -> bool {
    global("bootstrap").is_some()
}

/// Chart.js constructor, when the page loads it.
pub fn chart_js() -> Option<JsValue> {
    global("Chart")
}

/// Assign `value` at a dotted property path below `root`, e.g.
/// `["defaults", "font", "size"]`. Every intermediate object must exist.
pub fn set_path(root: &JsValue, path: &[&str], value: &JsValue) -> Result<(), JsValue> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };

    let mut target = root.clone();
    for key in parents {
        target = Reflect::get(&target, &JsValue::from_str(key))?;
        if target.is_undefined() || target.is_null() {
            return Err(JsValue::from_str(&format!("missing property `{}`", key)));
        }
    }

    Reflect::set(&target, &JsValue::from_str(last), value)?;
    Ok(())
}
