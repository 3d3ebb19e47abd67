//! Signup Codes Admin Frontend Entry Point

mod models;
mod config;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    if let Err(e) = start() {
        log::error!("[APP] Startup failed: {}", e);
        wasm_bindgen::throw_str(&e);
    }
}

/// Mount the Leptos page when the server shipped the codes as JSON,
/// otherwise enhance the server-rendered markup in place.
fn start() -> Result<(), String> {
    let doc = form_enhance::dom::document().map_err(|e| e.to_string())?;
    let config = config::load_config(&doc)?;

    match config::load_signup_codes(&doc)? {
        Some(codes) => {
            log::info!("[APP] Mounting table for {} signup codes", codes.len());
            let loader = config.loader;
            mount_to_body(move || view! { <App codes=codes loader=loader /> });
        }
        None => {
            form_enhance::dom::enhance_document(&config).map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}
