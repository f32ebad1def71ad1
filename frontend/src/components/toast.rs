use anyhow::anyhow;
use gloo::timers::future::TimeoutFuture;
use shared::ToastKind;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::services::bootstrap::close_alert;
use crate::services::dom::{js_error, set_style};

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: AttrValue,
}

/// Body of a toast; the host element carries the alert classes.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    html! {
        <>
            { props.message.clone() }
            <button type="button" class="btn-close" data-bs-dismiss="alert"></button>
        </>
    }
}

/// Pop a dismissible alert in the top-right corner for `dismiss_ms`.
pub fn show_toast(message: &str, kind: ToastKind, dismiss_ms: u32) -> anyhow::Result<Element> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow!("no <body>"))?;

    let host = document.create_element("div").map_err(js_error)?;
    host.set_class_name(&kind.container_class());
    set_style(&host, "z-index", "9999")?;
    body.append_child(&host).map_err(js_error)?;

    yew::Renderer::<Toast>::with_root_and_props(
        host.clone(),
        ToastProps {
            message: AttrValue::from(message.to_string()),
        },
    )
    .render();

    let alert = host.clone();
    spawn_local(async move {
        TimeoutFuture::new(dismiss_ms).await;
        close_alert(&alert);
    });

    Ok(host)
}
