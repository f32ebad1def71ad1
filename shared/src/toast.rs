/// Bootstrap contextual colour of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl ToastKind {
    /// Unknown names fall back to `Info`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => ToastKind::Success,
            "warning" => ToastKind::Warning,
            "danger" | "error" => ToastKind::Danger,
            _ => ToastKind::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Danger => "danger",
        }
    }

    pub fn container_class(self) -> String {
        format!(
            "alert alert-{} position-fixed top-0 end-0 m-3 fade show",
            self.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown_kinds() {
        assert_eq!(ToastKind::parse("success"), ToastKind::Success);
        assert_eq!(ToastKind::parse("Warning"), ToastKind::Warning);
        assert_eq!(ToastKind::parse("danger"), ToastKind::Danger);
        assert_eq!(ToastKind::parse("error"), ToastKind::Danger);
        assert_eq!(ToastKind::parse(""), ToastKind::Info);
        assert_eq!(ToastKind::parse("sparkly"), ToastKind::Info);
    }

    #[test]
    fn test_container_class() {
        assert_eq!(
            ToastKind::Success.container_class(),
            "alert alert-success position-fixed top-0 end-0 m-3 fade show"
        );
    }
}
