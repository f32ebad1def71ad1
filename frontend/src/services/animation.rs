use gloo::timers::future::TimeoutFuture;
use shared::{format_currency, CounterAnimation, CounterFrame};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

/// Count `element`'s text from `start` to `end` over `duration_ms`, one
/// formatted amount per tick. The last frame is always `format_currency(end)`.
pub fn animate_value(element: &Element, start: f64, end: f64, duration_ms: f64, tick_ms: u32) {
    let element = element.clone();
    let mut animation = CounterAnimation::new(start, end, duration_ms, tick_ms);

    spawn_local(async move {
        loop {
            TimeoutFuture::new(tick_ms).await;

            let frame = animation.tick();
            element.set_text_content(Some(&format_currency(frame.value())));
            if let CounterFrame::Finished(_) = frame {
                break;
            }
        }
    });
}
