pub mod bridge;
pub mod components;
pub mod content;
pub mod controller;
pub mod haptics;
pub mod logging;
pub mod pages;
pub mod telegram;
pub mod theme;

use leptos::*;
use pages::ComingSoonPage;
use telegram::TelegramBridge;
use wasm_bindgen::prelude::*;

/// Mount the application to the DOM.
///
/// Outside the host app nothing is mounted and startup fails with a
/// JS exception; there is no fallback screen.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init();

    controller::launch(TelegramBridge::acquire(), |controller| {
        mount_to_body(move || view! { <ComingSoonPage controller=controller/> })
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))
}
