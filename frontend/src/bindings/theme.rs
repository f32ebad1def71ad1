use anyhow::anyhow;
use shared::{Theme, UiConfig, DARK_MODE_CLASS, THEME_STORAGE_KEY};
use web_sys::{Document, Element, HtmlElement, Storage};

use crate::selectors::THEME_TOGGLE_ID;
use crate::services::dom::{js_error, listen};
use crate::services::logging::Logger;

/// Owns the body class, the stored preference and the toggle button label.
#[derive(Clone)]
pub struct ThemeController {
    body: HtmlElement,
    toggle: Option<Element>,
    storage: Storage,
}

impl ThemeController {
    pub fn new(body: HtmlElement, toggle: Option<Element>, storage: Storage) -> Self {
        Self {
            body,
            toggle,
            storage,
        }
    }

    pub fn stored_theme(&self) -> anyhow::Result<Theme> {
        let stored = self.storage.get_item(THEME_STORAGE_KEY).map_err(js_error)?;
        Ok(Theme::from_stored(stored.as_deref()))
    }

    /// Apply the stored preference (light when none) without writing it back.
    pub fn load(&self) -> anyhow::Result<Theme> {
        let theme = self.stored_theme()?;
        self.body
            .class_list()
            .toggle_with_force(DARK_MODE_CLASS, theme.is_dark())
            .map_err(js_error)?;
        self.update_toggle(theme);
        Ok(theme)
    }

    pub fn toggle(&self) -> anyhow::Result<Theme> {
        let is_dark = self
            .body
            .class_list()
            .toggle(DARK_MODE_CLASS)
            .map_err(js_error)?;
        let theme = Theme::from_dark_flag(is_dark);
        self.storage
            .set_item(THEME_STORAGE_KEY, theme.as_str())
            .map_err(js_error)?;
        self.update_toggle(theme);
        Ok(theme)
    }

    fn update_toggle(&self, theme: Theme) {
        if let Some(toggle) = &self.toggle {
            toggle.set_inner_html(&theme.toggle_button_html());
        }
    }
}

pub fn bind(document: &Document, _config: &UiConfig) -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    // An unavailable localStorage aborts the theme handler
    let storage = window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| anyhow!("localStorage unavailable"))?;
    let body = document.body().ok_or_else(|| anyhow!("no <body>"))?;
    let toggle = document.get_element_by_id(THEME_TOGGLE_ID);

    let controller = ThemeController::new(body, toggle.clone(), storage);
    controller.load()?;

    if let Some(toggle) = toggle {
        listen(&toggle, "click", move |_| {
            if let Err(e) = controller.toggle() {
                Logger::error_with_component("theme", &format!("Toggle failed: {:#}", e));
            }
        })?;
    }
    Ok(())
}
