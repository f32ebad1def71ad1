use shared::UiConfig;
use web_sys::Document;

use crate::selectors::TOOLTIP_TRIGGERS;
use crate::services::bootstrap::{has_toolkit, init_tooltip};
use crate::services::dom::query_all;
use crate::services::logging::Logger;

/// Activate Bootstrap tooltips on the elements present at load. Elements added
/// later need their own call to [`init_tooltip`].
pub fn bind(document: &Document, _config: &UiConfig) -> anyhow::Result<()> {
    let triggers = query_all(document, TOOLTIP_TRIGGERS)?;
    if triggers.is_empty() {
        return Ok(());
    }
    if !has_toolkit() {
        Logger::debug_with_component("tooltips", "Bootstrap not loaded, skipping tooltips");
        return Ok(());
    }

    for trigger in &triggers {
        init_tooltip(trigger)?;
    }
    Logger::debug_with_component("tooltips", &format!("Initialized {} tooltips", triggers.len()));
    Ok(())
}
