//! SityakaTyatodo Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod models;
mod state;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(AppConfig::default().log_level).expect("Failed to init logger");
    mount_to_body(App);
}
