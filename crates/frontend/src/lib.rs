//! BusManager - Yew WASM Frontend
//!
//! Fleet administration UI: an animated landing page plus dashboard,
//! bus, route and schedule views behind a client-side navigation shell.

mod app;
mod components;
mod pages;
mod state;
mod timers;

#[cfg(test)]
mod test_support;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("BusManager starting");

    yew::Renderer::<App>::new().render();
}
