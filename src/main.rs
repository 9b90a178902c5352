#![allow(warnings)]
//! TaskSphere Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod debounce;
mod error;
mod filter;
mod format;
mod forms;
mod markdown;
mod models;
mod pages;
mod permissions;
mod route;
mod services;
mod session;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(e) = console_logger::init(config.log_level, console_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    log::info!("TaskSphere starting, api at {}", config.api_base_url);

    mount_to_body(App);
}
