pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use shared::config::load_config;
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};

/// Boot the catalog: logging, configuration, mount, then the initial load.
///
/// Errors are returned to JS so a broken host page fails loudly.
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            _ = console_log::init_with_level(log::Level::Debug);
            log::error!("{}", e);
            return Err(JsValue::from_str(&e.to_string()));
        }
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.level());

    match app::mount_catalog(&config) {
        Ok(controller) => {
            controller.start();
            Ok(())
        }
        Err(e) => {
            log::error!("Catalog start-up failed: {}", e);
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    run()
}
