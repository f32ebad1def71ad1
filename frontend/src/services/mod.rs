pub mod animation;
pub mod api;
pub mod bootstrap;
pub mod config;
pub mod debounce;
pub mod dom;
pub mod exports;
pub mod logging;
