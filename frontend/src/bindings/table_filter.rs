use anyhow::anyhow;
use shared::{row_display, row_matches, UiConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::selectors::{FILTER_ROWS, SEARCH_INPUT_ID};
use crate::services::debounce::Debouncer;
use crate::services::dom::{listen, query_all, set_style};
use crate::services::logging::Logger;

/// Hide table rows whose text doesn't contain the search query.
#[derive(Clone)]
pub struct TableFilter {
    document: Document,
    debouncer: Debouncer,
}

impl TableFilter {
    pub fn new(document: Document, wait_ms: u32) -> Self {
        Self {
            document,
            debouncer: Debouncer::new(wait_ms),
        }
    }

    /// Filter with `query` once typing pauses; earlier pending queries are dropped.
    pub fn schedule(&self, query: String) {
        let document = self.document.clone();
        self.debouncer.call(move || match apply_filter(&document, &query) {
            Ok(visible) => Logger::debug_with_component(
                "table-filter",
                &format!("{} rows match {:?}", visible, query),
            ),
            Err(e) => Logger::error_with_component("table-filter", &format!("{:#}", e)),
        });
    }
}

/// Show matching rows, hide the rest. Returns how many rows stay visible.
pub fn apply_filter(document: &Document, query: &str) -> anyhow::Result<usize> {
    let query = query.to_lowercase();
    let mut visible = 0;
    for row in query_all(document, FILTER_ROWS)? {
        let matches = row_matches(&row.text_content().unwrap_or_default(), &query);
        set_style(&row, "display", row_display(matches))?;
        if matches {
            visible += 1;
        }
    }
    Ok(visible)
}

pub fn bind(document: &Document, config: &UiConfig) -> anyhow::Result<()> {
    let Some(element) = document.get_element_by_id(SEARCH_INPUT_ID) else {
        return Ok(());
    };
    let input = element
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| anyhow!("#{} is not an <input>", SEARCH_INPUT_ID))?;

    let filter = TableFilter::new(document.clone(), config.timings.filter_debounce_ms);
    let source = input.clone();
    listen(&input, "input", move |_| filter.schedule(source.value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::dom::inline_style;
    use crate::services::dom::test_support::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TABLE: &str = r#"
        <table><tbody>
            <tr id="row-food"><td>Groceries</td><td>Food</td></tr>
            <tr id="row-rent"><td>April rent</td><td>Housing</td></tr>
            <tr id="row-snack"><td>Snacks</td><td>Food</td></tr>
        </tbody></table>"#;

    fn display(id: &str) -> String {
        inline_style(&document().get_element_by_id(id).unwrap(), "display")
    }

    #[wasm_bindgen_test]
    fn test_apply_filter_is_case_insensitive() {
        let container = fixture(TABLE);
        let document = document();

        assert_eq!(apply_filter(&document, "FOOD").unwrap(), 2);
        assert_eq!(display("row-food"), "");
        assert_eq!(display("row-rent"), "none");
        assert_eq!(display("row-snack"), "");

        assert_eq!(apply_filter(&document, "").unwrap(), 3);
        assert_eq!(display("row-rent"), "");
        container.remove();
    }

    #[wasm_bindgen_test]
    async fn test_rapid_typing_filters_once_with_last_query() {
        let container = fixture(TABLE);
        let filter = TableFilter::new(document(), 40);

        filter.schedule("f".to_string());
        filter.schedule("fo".to_string());
        filter.schedule("rent".to_string());

        // nothing happens inside the debounce window
        TimeoutFuture::new(10).await;
        assert_eq!(display("row-food"), "");

        TimeoutFuture::new(100).await;
        assert_eq!(display("row-food"), "none");
        assert_eq!(display("row-rent"), "");
        assert_eq!(display("row-snack"), "none");
        container.remove();
    }
}
