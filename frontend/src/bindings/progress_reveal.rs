use gloo::timers::future::TimeoutFuture;
use js_sys::Array;
use shared::presentation::reveal_target_width;
use shared::UiConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::selectors::{DATA_WIDTH_ATTR, PROGRESS_BARS};
use crate::services::dom::{inline_style, js_error, query_all, set_style};
use crate::services::logging::Logger;

/// Collapse `bar` to 0% and grow it back to its target width after `delay_ms`.
pub fn reveal(bar: &Element, delay_ms: u32) -> anyhow::Result<()> {
    let target = reveal_target_width(bar.get_attribute(DATA_WIDTH_ATTR), inline_style(bar, "width"));
    set_style(bar, "width", "0%")?;

    let bar = bar.clone();
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if let Err(e) = set_style(&bar, "width", &target) {
            Logger::warn_with_component("progress-reveal", &format!("{:#}", e));
        }
    });
    Ok(())
}

/// Animate each progress bar the first time half of it scrolls into view.
pub fn bind(document: &Document, config: &UiConfig) -> anyhow::Result<()> {
    let bars = query_all(document, PROGRESS_BARS)?;
    if bars.is_empty() {
        return Ok(());
    }

    let delay_ms = config.timings.progress_reveal_delay_ms;
    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let bar = entry.target();
                if let Err(e) = reveal(&bar, delay_ms) {
                    Logger::warn_with_component("progress-reveal", &format!("{:#}", e));
                }
                // animate at most once per page view
                observer.unobserve(&bar);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.timings.progress_visibility_threshold));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
            .map_err(js_error)?;
    on_intersect.forget();

    for bar in &bars {
        observer.observe(bar);
    }
    Ok(())
}
