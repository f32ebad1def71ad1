pub mod category_chart;
pub mod toast;
