/// localStorage key holding the literal `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<body>` while the dark theme is active.
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Anything other than `"dark"` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The toggle button offers the opposite theme.
    pub fn toggle_icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }

    /// Markup written into the toggle button.
    pub fn toggle_button_html(self) -> String {
        format!(
            "<i class=\"{}\"></i> {}",
            self.toggle_icon_class(),
            self.toggle_label()
        )
    }
}
