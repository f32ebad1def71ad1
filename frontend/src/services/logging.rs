use shared::LogLevel;
use std::cell::Cell;

thread_local! {
    static MIN_LEVEL: Cell<LogLevel> = Cell::new(LogLevel::Info);
}

/// Console logger tagging every line with the behavior that produced it.
pub struct Logger;

impl Logger {
    pub fn set_level(level: LogLevel) {
        MIN_LEVEL.with(|min| min.set(level));
    }

    pub fn enabled(level: LogLevel) -> bool {
        MIN_LEVEL.with(|min| level >= min.get())
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, component, message);
    }

    fn log(level: LogLevel, component: &str, message: &str) {
        if !Self::enabled(level) {
            return;
        }

        let line = format!("[{}] {}", component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_level_filtering() {
        Logger::set_level(LogLevel::Warn);
        assert!(!Logger::enabled(LogLevel::Debug));
        assert!(!Logger::enabled(LogLevel::Info));
        assert!(Logger::enabled(LogLevel::Warn));
        assert!(Logger::enabled(LogLevel::Error));

        Logger::set_level(LogLevel::Info);
        assert!(Logger::enabled(LogLevel::Info));
    }
}
