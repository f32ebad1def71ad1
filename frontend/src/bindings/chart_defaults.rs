use shared::{ChartTheme, UiConfig};
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::services::bootstrap::{chart_js, set_path};
use crate::services::dom::js_error;

const FONT_FAMILY: &[&str] = &["defaults", "font", "family"];
const FONT_SIZE: &[&str] = &["defaults", "font", "size"];
const LABEL_COLOR: &[&str] = &["defaults", "color"];
const LEGEND_PADDING: &[&str] = &["defaults", "plugins", "legend", "labels", "padding"];
const LEGEND_BOX_WIDTH: &[&str] = &["defaults", "plugins", "legend", "labels", "boxWidth"];
const LEGEND_BOX_HEIGHT: &[&str] = &["defaults", "plugins", "legend", "labels", "boxHeight"];

/// Push the shared chart theme into `Chart.defaults` so charts drawn by other
/// page scripts match ours. Every intermediate object must already exist.
pub fn apply_chart_js_defaults(chart: &JsValue, theme: &ChartTheme) -> anyhow::Result<()> {
    let settings = [
        (FONT_FAMILY, JsValue::from_str(&theme.font_family)),
        (FONT_SIZE, JsValue::from(theme.font_size)),
        (LABEL_COLOR, JsValue::from_str(&theme.label_color)),
        (LEGEND_PADDING, JsValue::from(theme.legend_padding)),
        (LEGEND_BOX_WIDTH, JsValue::from(theme.legend_box_width)),
        (LEGEND_BOX_HEIGHT, JsValue::from(theme.legend_box_height)),
    ];

    for (path, value) in &settings {
        set_path(chart, path, value).map_err(js_error)?;
    }
    Ok(())
}

/// No-op when Chart.js isn't loaded.
pub fn bind(_document: &Document, _config: &UiConfig) -> anyhow::Result<()> {
    match chart_js() {
        Some(chart) => apply_chart_js_defaults(&chart, &ChartTheme::default()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use js_sys::{Object, Reflect};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn object_at(parent: &JsValue, key: &str) -> Object {
        let child = Object::new();
        Reflect::set(parent, &key.into(), &child).unwrap();
        child
    }

    fn get(root: &JsValue, path: &[&str]) -> JsValue {
        path.iter()
            .fold(root.clone(), |value, key| Reflect::get(&value, &(*key).into()).unwrap())
    }

    #[wasm_bindgen_test]
    fn test_defaults_written_to_chart_like_object() {
        let chart = Object::new();
        let defaults = object_at(&chart, "defaults");
        object_at(&defaults, "font");
        let plugins = object_at(&defaults, "plugins");
        let legend = object_at(&plugins, "legend");
        object_at(&legend, "labels");

        apply_chart_js_defaults(&chart, &ChartTheme::default()).unwrap();

        assert_eq!(get(&chart, &["defaults", "font", "size"]).as_f64(), Some(13.0));
        assert_eq!(
            get(&chart, &["defaults", "color"]).as_string().as_deref(),
            Some("#6b7280")
        );
        assert_eq!(
            get(&chart, &["defaults", "plugins", "legend", "labels", "boxHeight"]).as_f64(),
            Some(15.0)
        );
    }

    #[wasm_bindgen_test]
    fn test_incomplete_defaults_object_is_error() {
        let chart = Object::new();
        assert!(apply_chart_js_defaults(&chart, &ChartTheme::default()).is_err());
    }
}
