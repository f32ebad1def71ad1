use serde::Deserialize;
use std::f64::consts::{FRAC_PI_2, TAU};
use thiserror::Error;

/// Colour used when a category colour cannot be read.
pub const PRIMARY_GREEN: (u8, u8, u8) = (16, 185, 129);

/// Spending per category, as embedded in the chart canvas `data-chart` attribute.
///
/// The three sequences are parallel: entry `i` of each describes one category.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CategoryChartData {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub amounts: Vec<f64>,
    #[serde(default)]
    pub colors: Vec<String>,
}

impl CategoryChartData {
    pub fn has_data(&self) -> bool {
        !self.categories.is_empty() && !self.amounts.is_empty() && !self.colors.is_empty()
    }

    pub fn is_aligned(&self) -> bool {
        self.categories.len() == self.amounts.len() && self.amounts.len() == self.colors.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartPayload {
    Ready(CategoryChartData),
    /// At least one of the sequences is empty.
    Empty,
}

#[derive(Debug, Error)]
pub enum ChartPayloadError {
    #[error("invalid chart JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("chart sequences differ in length: {categories} categories, {amounts} amounts, {colors} colors")]
    ShapeMismatch {
        categories: usize,
        amounts: usize,
        colors: usize,
    },
}

/// Parse and validate the `data-chart` attribute.
///
/// Emptiness is checked before alignment: a payload with an empty `amounts`
/// list is `Empty`, not a shape error.
pub fn parse_chart_payload(raw: &str) -> Result<ChartPayload, ChartPayloadError> {
    let data: CategoryChartData = serde_json::from_str(raw)?;

    if !data.has_data() {
        return Ok(ChartPayload::Empty);
    }

    if !data.is_aligned() {
        return Err(ChartPayloadError::ShapeMismatch {
            categories: data.categories.len(),
            amounts: data.amounts.len(),
            colors: data.colors.len(),
        });
    }

    Ok(ChartPayload::Ready(data))
}

/// Parse `#RGB` or `#RRGGBB` (hash optional), falling back to the primary green.
pub fn parse_hex_color(raw: &str) -> (u8, u8, u8) {
    let hex = raw.trim().trim_start_matches('#');
    let expanded: String = if hex.len() == 3 {
        hex.chars().flat_map(|ch| [ch, ch]).collect()
    } else {
        hex.to_string()
    };

    if expanded.len() != 6 || !expanded.is_ascii() {
        return PRIMARY_GREEN;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&expanded[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => (r, g, b),
        _ => PRIMARY_GREEN,
    }
}

/// Start and end angle (radians) of each doughnut segment.
///
/// Segments start at twelve o'clock and run clockwise in screen coordinates
/// (y grows downwards). Non-positive amounts get zero-width segments.
pub fn segment_angles(amounts: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = amounts.iter().filter(|a| **a > 0.0).sum();
    let mut angle = -FRAC_PI_2;

    amounts
        .iter()
        .map(|amount| {
            let sweep = if total > 0.0 && *amount > 0.0 {
                amount / total * TAU
            } else {
                0.0
            };
            let segment = (angle, angle + sweep);
            angle += sweep;
            segment
        })
        .collect()
}

/// Global chart styling, shared by the in-crate renderer and Chart.js.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub font_family: String,
    pub font_size: u32,
    pub label_color: String,
    pub legend_padding: u32,
    pub legend_box_width: u32,
    pub legend_box_height: u32,
    /// Inner radius as a fraction of the outer radius.
    pub cutout: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            font_family: "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif"
                .to_string(),
            font_size: 13,
            label_color: "#6b7280".to_string(),
            legend_padding: 15,
            legend_box_width: 15,
            legend_box_height: 15,
            cutout: 0.5,
        }
    }
}

/// Static text drawn on the canvas instead of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPlaceholder {
    NoData,
    Error,
}

impl ChartPlaceholder {
    pub fn text(self) -> &'static str {
        match self {
            ChartPlaceholder::NoData => "No expense data available",
            ChartPlaceholder::Error => "Error loading chart",
        }
    }

    pub fn font(self) -> &'static str {
        match self {
            ChartPlaceholder::NoData => "16px Inter, sans-serif",
            ChartPlaceholder::Error => "14px Inter, sans-serif",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ChartPlaceholder::NoData => "#6b7280",
            ChartPlaceholder::Error => "#ef4444",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ready_payload() {
        let raw = r##"{"categories":["Food","Rent"],"amounts":[120.5,800],"colors":["#10b981","#f00"]}"##;
        match parse_chart_payload(raw).unwrap() {
            ChartPayload::Ready(data) => {
                assert_eq!(data.categories, vec!["Food", "Rent"]);
                assert_eq!(data.amounts, vec![120.5, 800.0]);
                assert_eq!(data.colors.len(), 2);
            }
            other => panic!("expected ready payload, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_amounts_is_placeholder_not_error() {
        let raw = r##"{"categories":["Food"],"amounts":[],"colors":["#10b981"]}"##;
        assert_eq!(parse_chart_payload(raw).unwrap(), ChartPayload::Empty);
    }

    #[test]
    fn test_missing_fields_are_empty() {
        assert_eq!(parse_chart_payload("{}").unwrap(), ChartPayload::Empty);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = parse_chart_payload("{not json").unwrap_err();
        assert!(matches!(err, ChartPayloadError::InvalidJson(_)));
    }

    #[test]
    fn test_wrong_types_are_error() {
        let raw = r#"{"categories":["Food"],"amounts":["lots"],"colors":["red"]}"#;
        assert!(matches!(
            parse_chart_payload(raw),
            Err(ChartPayloadError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_misaligned_sequences_are_error() {
        let raw = r##"{"categories":["Food","Rent"],"amounts":[1],"colors":["#fff","#000"]}"##;
        match parse_chart_payload(raw) {
            Err(ChartPayloadError::ShapeMismatch {
                categories,
                amounts,
                colors,
            }) => {
                assert_eq!((categories, amounts, colors), (2, 1, 2));
            }
            other => panic!("expected shape mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#10b981"), (16, 185, 129));
        assert_eq!(parse_hex_color("ef4444"), (239, 68, 68));
        assert_eq!(parse_hex_color("#fff"), (255, 255, 255));
        assert_eq!(parse_hex_color("#zzzzzz"), PRIMARY_GREEN);
        assert_eq!(parse_hex_color("rgb(1,2,3)"), PRIMARY_GREEN);
        assert_eq!(parse_hex_color(""), PRIMARY_GREEN);
    }

    #[test]
    fn test_segment_angles_cover_full_circle() {
        let angles = segment_angles(&[1.0, 1.0, 2.0]);
        assert_eq!(angles.len(), 3);
        assert!((angles[0].0 + FRAC_PI_2).abs() < 1e-9);
        assert!((angles[2].1 - (TAU - FRAC_PI_2)).abs() < 1e-9);
        // contiguous
        assert!((angles[0].1 - angles[1].0).abs() < 1e-9);
        assert!((angles[1].1 - angles[2].0).abs() < 1e-9);
        // proportional
        let sweep = |(start, end): (f64, f64)| end - start;
        assert!((sweep(angles[2]) - 2.0 * sweep(angles[0])).abs() < 1e-9);
    }

    #[test]
    fn test_segment_angles_ignore_non_positive_amounts() {
        let angles = segment_angles(&[0.0, -5.0, 10.0]);
        assert_eq!(angles[0].0, angles[0].1);
        assert_eq!(angles[1].0, angles[1].1);
        assert!((angles[2].1 - angles[2].0 - TAU).abs() < 1e-9);

        let all_zero = segment_angles(&[0.0, 0.0]);
        assert!(all_zero.iter().all(|(start, end)| start == end));
    }

    #[test]
    fn test_chart_theme_defaults() {
        let theme = ChartTheme::default();
        assert_eq!(theme.font_size, 13);
        assert_eq!(theme.label_color, "#6b7280");
        assert_eq!(theme.legend_padding, 15);
        assert_eq!(theme.legend_box_width, 15);
        assert_eq!(theme.legend_box_height, 15);
    }
}
