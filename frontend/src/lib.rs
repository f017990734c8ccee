pub mod api;
mod components;
pub mod config;
mod pages;
mod shell;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

pub use shell::{app_root, mount_app};

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }

    let config = config::AppConfig::from_environment();
    log::info!("HRMS Lite frontend starting; API base URL: {}", config.api_base_url());
    mount_app(config);
}
