//! `window.Centsible`: helpers other page scripts can call.

use anyhow::anyhow;
use js_sys::{Function, Object, Reflect};
use shared::{format_currency, ToastKind, UiConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::animation::animate_value;
use super::debounce::Debouncer;
use super::dom::js_error;
use super::logging::Logger;
use crate::components::toast::show_toast;

pub const NAMESPACE: &str = "Centsible";

fn set(target: &Object, key: &str, value: &JsValue) -> anyhow::Result<()> {
    Reflect::set(target, &JsValue::from_str(key), value).map_err(js_error)?;
    Ok(())
}

pub fn build_namespace(config: &UiConfig) -> anyhow::Result<Object> {
    let namespace = Object::new();
    let tick_ms = config.timings.counter_tick_ms;
    let toast_dismiss_ms = config.timings.toast_dismiss_ms;

    let animate = Closure::<dyn Fn(JsValue, f64, f64, f64)>::new(
        move |target: JsValue, start: f64, end: f64, duration: f64| match target.dyn_into::<Element>() {
            Ok(element) => animate_value(&element, start, end, duration, tick_ms),
            Err(_) => Logger::warn_with_component("exports", "animateValue needs an element"),
        },
    );
    set(&namespace, "animateValue", &animate.into_js_value())?;

    let format = Closure::<dyn Fn(f64) -> String>::new(format_currency);
    set(&namespace, "formatCurrency", &format.into_js_value())?;

    let toast = Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, kind: JsValue| {
        let message = message.as_string().unwrap_or_default();
        let kind = kind
            .as_string()
            .map(|kind| ToastKind::parse(&kind))
            .unwrap_or_default();
        if let Err(e) = show_toast(&message, kind, toast_dismiss_ms) {
            Logger::error_with_component("exports", &format!("showToast failed: {:#}", e));
        }
    });
    set(&namespace, "showToast", &toast.into_js_value())?;

    // debounce(fn, wait) returns a new function with its own timer; the
    // returned function forwards its first argument.
    let debounce = Closure::<dyn Fn(Function, u32) -> JsValue>::new(|callback: Function, wait: u32| {
        let debouncer = Debouncer::new(wait);
        Closure::<dyn Fn(JsValue)>::new(move |argument: JsValue| {
            let callback = callback.clone();
            debouncer.call(move || {
                if let Err(e) = callback.call1(&JsValue::NULL, &argument) {
                    Logger::error_with_component(
                        "exports",
                        &format!("Debounced callback threw: {}", js_error(e)),
                    );
                }
            });
        })
        .into_js_value()
    });
    set(&namespace, "debounce", &debounce.into_js_value())?;

    Ok(namespace)
}

/// Publish the helpers as `window.Centsible`.
pub fn install(config: &UiConfig) -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let namespace = build_namespace(config)?;
    Reflect::set(&window, &JsValue::from_str(NAMESPACE), &namespace).map_err(js_error)?;
    Ok(())
}
