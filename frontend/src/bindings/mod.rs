//! One binder per page behavior. Binders are independent: a failure in one
//! is logged and the rest still run.

pub mod alert_read;
pub mod alerts;
pub mod anchors;
pub mod budget_colors;
pub mod chart_defaults;
pub mod confirm_delete;
pub mod form_validation;
pub mod numeric_inputs;
pub mod progress_reveal;
pub mod recurrence;
pub mod table_filter;
pub mod theme;
pub mod tooltips;

use shared::UiConfig;
use web_sys::Document;

use crate::components::category_chart;
use crate::services::logging::Logger;

type Binder = fn(&Document, &UiConfig) -> anyhow::Result<()>;

const BINDERS: [(&str, Binder); 14] = [
    ("theme", theme::bind),
    ("alerts", alerts::bind),
    ("numeric-inputs", numeric_inputs::bind),
    ("confirm-delete", confirm_delete::bind),
    ("tooltips", tooltips::bind),
    ("table-filter", table_filter::bind),
    ("progress-reveal", progress_reveal::bind),
    ("anchors", anchors::bind),
    ("form-validation", form_validation::bind),
    ("budget-colors", budget_colors::bind),
    ("recurrence", recurrence::bind),
    ("chart-defaults", chart_defaults::bind),
    ("category-chart", category_chart::bind),
    ("alert-read", alert_read::bind),
];

pub fn bind_all(document: &Document, config: &UiConfig) {
    let mut bound = 0;
    for (component, bind) in BINDERS {
        match bind(document, config) {
            Ok(()) => {
                bound += 1;
                Logger::debug_with_component(component, "bound");
            }
            Err(e) => Logger::error_with_component(component, &format!("Failed to bind: {:#}", e)),
        }
    }
    Logger::info_with_component(
        "startup",
        &format!("{} of {} page behaviors bound", bound, BINDERS.len()),
    );
}
