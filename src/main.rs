mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::LOG_LEVEL) {
        web_sys::console::error_1(&format!("logger already installed: {e}").into());
    }

    match utils::dom::mount_point(config::MOUNT_ELEMENT_ID) {
        Ok(root) => mount_to(root, App).forget(),
        Err(e) => log::error!("cannot start terminal: {}", e),
    }
}
