use shared::{parse_percentage, BudgetSeverity, UiConfig};
use web_sys::{Document, Element};

use crate::selectors::{BUDGET_BARS, BUDGET_PERCENTAGE_ATTR};
use crate::services::dom::{js_error, query_all};

/// Replace whatever severity class `bar` has with the one for `percentage`.
pub fn apply_severity(bar: &Element, severity: BudgetSeverity) -> anyhow::Result<()> {
    let classes = bar.class_list();
    for class in BudgetSeverity::all_class_names() {
        classes.remove_1(class).map_err(js_error)?;
    }
    classes.add_1(severity.class_name()).map_err(js_error)
}

pub fn bind(document: &Document, config: &UiConfig) -> anyhow::Result<()> {
    for bar in query_all(document, BUDGET_BARS)? {
        let percentage = parse_percentage(&bar.get_attribute(BUDGET_PERCENTAGE_ATTR).unwrap_or_default());
        apply_severity(&bar, BudgetSeverity::classify(percentage, &config.budget))?;
    }
    Ok(())
}
