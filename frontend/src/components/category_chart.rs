use anyhow::anyhow;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::{
    parse_chart_payload, parse_hex_color, segment_angles, CategoryChartData, ChartPayload,
    ChartPlaceholder, ChartTheme, UiConfig,
};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::selectors::{CATEGORY_CHART_ID, CHART_DATA_ATTR};
use crate::services::dom::js_error;
use crate::services::logging::Logger;

const COMPONENT: &str = "category-chart";

/// What ended up on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartOutcome {
    Rendered,
    NoData,
    Error,
}

pub fn bind(document: &Document, _config: &UiConfig) -> anyhow::Result<()> {
    let Some(element) = document.get_element_by_id(CATEGORY_CHART_ID) else {
        return Ok(());
    };
    let canvas = element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| anyhow!("#{} is not a <canvas>", CATEGORY_CHART_ID))?;
    let Some(raw) = canvas.get_attribute(CHART_DATA_ATTR) else {
        return Ok(());
    };

    let outcome = render(&canvas, &raw, &ChartTheme::default())?;
    Logger::debug_with_component(COMPONENT, &format!("Chart render outcome: {:?}", outcome));
    Ok(())
}

/// One-shot render of the `data-chart` payload onto `canvas`.
pub fn render(
    canvas: &HtmlCanvasElement,
    raw: &str,
    theme: &ChartTheme,
) -> anyhow::Result<ChartOutcome> {
    match parse_chart_payload(raw) {
        Ok(ChartPayload::Ready(data)) => {
            draw_doughnut(canvas, &data, theme)?;
            Ok(ChartOutcome::Rendered)
        }
        Ok(ChartPayload::Empty) => {
            draw_placeholder(canvas, ChartPlaceholder::NoData)?;
            Ok(ChartOutcome::NoData)
        }
        Err(e) => {
            Logger::error_with_component(COMPONENT, &format!("Error parsing chart data: {}", e));
            draw_placeholder(canvas, ChartPlaceholder::Error)?;
            Ok(ChartOutcome::Error)
        }
    }
}

fn draw_placeholder(canvas: &HtmlCanvasElement, placeholder: ChartPlaceholder) -> anyhow::Result<()> {
    let context = canvas
        .get_context("2d")
        .map_err(js_error)?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("unexpected canvas context type"))?;

    context.set_font(placeholder.font());
    context.set_fill_style_str(placeholder.color());
    context.set_text_align("center");
    context
        .fill_text(
            placeholder.text(),
            f64::from(canvas.width()) / 2.0,
            f64::from(canvas.height()) / 2.0,
        )
        .map_err(js_error)
}

fn drawing_error<E: std::fmt::Debug>(error: E) -> anyhow::Error {
    anyhow!("chart drawing failed: {:?}", error)
}

fn rgb(hex: &str) -> RGBColor {
    let (r, g, b) = parse_hex_color(hex);
    RGBColor(r, g, b)
}

/// Points along a circle of `radius` between two angles, inclusive.
fn arc(center: (f64, f64), radius: f64, start: f64, end: f64) -> Vec<(i32, i32)> {
    // about one point per two degrees
    let steps = ((end - start).abs() / (std::f64::consts::PI / 90.0)).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|step| {
            let angle = start + (end - start) * step as f64 / steps as f64;
            (
                (center.0 + radius * angle.cos()).round() as i32,
                (center.1 + radius * angle.sin()).round() as i32,
            )
        })
        .collect()
}

fn draw_doughnut(
    canvas: &HtmlCanvasElement,
    data: &CategoryChartData,
    theme: &ChartTheme,
) -> anyhow::Result<()> {
    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());

    let backend = CanvasBackend::with_canvas_object(canvas.clone())
        .ok_or_else(|| anyhow!("canvas backend unavailable"))?;
    let root = backend.into_drawing_area();

    // Legend sits to the right of the ring
    let legend_width = (width * 0.4).max(120.0).min(width / 2.0);
    let ring_width = width - legend_width;
    let center = (ring_width / 2.0, height / 2.0);
    let outer_radius = (ring_width.min(height) / 2.0 - 10.0).max(1.0);
    let inner_radius = outer_radius * theme.cutout;

    for ((start, end), color) in segment_angles(&data.amounts).into_iter().zip(&data.colors) {
        if end <= start {
            continue;
        }
        let mut points = arc(center, outer_radius, start, end);
        let mut inner = arc(center, inner_radius, start, end);
        inner.reverse();
        points.extend(inner);

        root.draw(&Polygon::new(points, rgb(color).filled()))
            .map_err(drawing_error)?;
    }

    let label_color = rgb(&theme.label_color);
    let font = (theme.font_family.as_str(), f64::from(theme.font_size))
        .into_font()
        .color(&label_color);
    let box_width = theme.legend_box_width as i32;
    let box_height = theme.legend_box_height as i32;
    let row_height = box_height + theme.legend_padding as i32;
    let rows = data.categories.len() as i32;

    let left = ring_width as i32 + theme.legend_padding as i32;
    let top = ((height as i32 - rows * row_height) / 2).max(0) + theme.legend_padding as i32 / 2;

    for (index, (category, color)) in data.categories.iter().zip(&data.colors).enumerate() {
        let y = top + index as i32 * row_height;
        root.draw(&Rectangle::new(
            [(left, y), (left + box_width, y + box_height)],
            rgb(color).filled(),
        ))
        .map_err(drawing_error)?;
        root.draw(&Text::new(
            category.clone(),
            (left + box_width + theme.legend_padding as i32 / 2, y),
            font.clone(),
        ))
        .map_err(drawing_error)?;
    }

    root.present().map_err(drawing_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::dom::test_support::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas() -> (web_sys::Element, HtmlCanvasElement) {
        let container = fixture(r#"<canvas width="400" height="200"></canvas>"#);
        let canvas = container
            .first_element_child()
            .unwrap()
            .dyn_into::<HtmlCanvasElement>()
            .unwrap();
        (container, canvas)
    }

    #[wasm_bindgen_test]
    fn test_arc_endpoints() {
        let points = arc((0.0, 0.0), 10.0, 0.0, std::f64::consts::FRAC_PI_2);
        assert_eq!(points.first(), Some(&(10, 0)));
        assert_eq!(points.last(), Some(&(0, 10)));
        assert!(points.len() > 2);
    }

    #[wasm_bindgen_test]
    fn test_renders_doughnut_for_valid_payload() {
        let (container, canvas) = canvas();
        let raw = r##"{"categories":["Food","Rent"],"amounts":[20,80],"colors":["#10b981","#ef4444"]}"##;
        let outcome = render(&canvas, raw, &ChartTheme::default()).unwrap();
        assert_eq!(outcome, ChartOutcome::Rendered);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_empty_amounts_draws_placeholder() {
        let (container, canvas) = canvas();
        let raw = r##"{"categories":["Food"],"amounts":[],"colors":["#10b981"]}"##;
        let outcome = render(&canvas, raw, &ChartTheme::default()).unwrap();
        assert_eq!(outcome, ChartOutcome::NoData);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_malformed_json_draws_error() {
        let (container, canvas) = canvas();
        let outcome = render(&canvas, "{categories:", &ChartTheme::default()).unwrap();
        assert_eq!(outcome, ChartOutcome::Error);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_misaligned_payload_is_treated_as_error() {
        let (container, canvas) = canvas();
        let raw = r##"{"categories":["Food","Rent"],"amounts":[1],"colors":["#fff"]}"##;
        let outcome = render(&canvas, raw, &ChartTheme::default()).unwrap();
        assert_eq!(outcome, ChartOutcome::Error);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_bind_without_attribute_is_noop() {
        let container = fixture(r#"<canvas id="categoryChart"></canvas>"#);
        bind(&document(), &UiConfig::default()).unwrap();
        container.remove();
    }
}
