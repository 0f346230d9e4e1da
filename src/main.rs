//! PM Board Frontend Entry Point

mod actions;
mod api;
mod app;
mod board;
mod components;
mod config;
mod context;
mod effects;
mod format;
mod models;
mod query;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if console_logger::init(config.log_level()).is_err() {
        web_sys::console::warn_1(&"[main] logger already installed".into());
    }
    log::info!("pm-board starting against {}", config.graphql_endpoint);

    mount_to_body(move || view! { <App config=config /> });
}
