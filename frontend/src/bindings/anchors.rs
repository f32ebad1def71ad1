use shared::presentation::scroll_target_selector;
use shared::UiConfig;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::selectors::IN_PAGE_ANCHORS;
use crate::services::dom::{listen, query_all, query_one};

/// Smooth-scroll in-page links instead of jumping.
pub fn bind(document: &Document, _config: &UiConfig) -> anyhow::Result<()> {
    for anchor in query_all(document, IN_PAGE_ANCHORS)? {
        let link = anchor.clone();
        let document = document.clone();
        listen(&anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(selector) = scroll_target_selector(&href) else {
                return;
            };
            event.prevent_default();

            // unknown ids and invalid selectors are a no-op
            if let Some(target) = query_one(&document, selector) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}
