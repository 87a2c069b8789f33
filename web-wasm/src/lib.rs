//! Crime Predict Web App (Leptos + WASM)

mod app;
pub mod api;
pub mod components;

use wasm_bindgen::prelude::*;

pub use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log_level()));
    log::info!("prediction endpoint: {}", api::endpoint().predict_url());
    leptos::mount::mount_to_body(app::App);
}

/// デバッグビルドのみ詳細ログ
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
