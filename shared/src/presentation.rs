//! Small display rules for the form and navigation enhancements.

pub const DEFAULT_CONFIRM_MESSAGE: &str =
    "Are you sure you want to delete this? This action cannot be undone.";

pub fn confirmation_message(custom: Option<&str>) -> &str {
    match custom {
        Some(message) if !message.is_empty() => message,
        _ => DEFAULT_CONFIRM_MESSAGE,
    }
}

/// Selector to scroll to for an in-page link, or `None` for the `#` and `#!`
/// placeholders and for links that leave the page.
pub fn scroll_target_selector(href: &str) -> Option<&str> {
    if !href.starts_with('#') || href == "#" || href == "#!" {
        None
    } else {
        Some(href)
    }
}

pub fn frequency_display(recurring: bool) -> &'static str {
    if recurring {
        "block"
    } else {
        "none"
    }
}

/// Width a progress bar animates to: its `data-width`, else its inline width.
pub fn reveal_target_width(data_width: Option<String>, inline_width: String) -> String {
    match data_width {
        Some(width) if !width.is_empty() => width,
        _ => inline_width,
    }
}
