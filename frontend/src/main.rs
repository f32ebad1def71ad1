//! Progressive enhancements for the server-rendered Centsible budgeting pages.

mod bindings;
mod components;
mod selectors;
mod services;

use services::logging::Logger;

fn main() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let config = services::config::load_config(&document);
    Logger::set_level(config.log_level);

    if let Err(e) = services::exports::install(&config) {
        Logger::error_with_component("exports", &format!("Failed to install window.Centsible: {:#}", e));
    }

    if services::dom::is_loading(&document) {
        let ready_document = document.clone();
        let listening = services::dom::listen(&document, "DOMContentLoaded", move |_| {
            bindings::bind_all(&ready_document, &config);
        });
        if let Err(e) = listening {
            Logger::error_with_component("startup", &format!("{:#}", e));
        }
    } else {
        bindings::bind_all(&document, &config);
    }
}
