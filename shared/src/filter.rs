/// Case-insensitive substring match of a table row against the search box.
///
/// An empty query matches every row.
pub fn row_matches(row_text: &str, query: &str) -> bool {
    row_text.to_lowercase().contains(&query.to_lowercase())
}

/// Inline `display` value for a row: empty restores the stylesheet default.
pub fn row_display(matches: bool) -> &'static str {
    if matches {
        ""
    } else {
        "none"
    }
}
