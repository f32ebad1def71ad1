use shared::UiConfig;
use web_sys::Document;

use super::dom::meta_content;
use super::logging::Logger;

/// `<meta name="centsible-config" content='{"timings": {...}}'>`
pub const CONFIG_META_NAME: &str = "centsible-config";

/// Page-level overrides on top of the built-in defaults.
pub fn load_config(document: &Document) -> UiConfig {
    let Some(raw) = meta_content(document, CONFIG_META_NAME) else {
        return UiConfig::default();
    };

    UiConfig::from_json(&raw).unwrap_or_else(|e| {
        Logger::warn_with_component("config", &format!("Ignoring page config: {}", e));
        UiConfig::default()
    })
}
