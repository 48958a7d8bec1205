//! Binding to the host's `window.Telegram.WebApp` object.
//!
//! The host injects the object before the page's wasm starts. Methods the
//! host version doesn't support throw; those are logged and dropped, since
//! every request is advisory anyway.

use crate::bridge::HostBridge;
use crate::haptics::ImpactStyle;
use crate::theme::ColorScheme;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    pub type WebApp;

    #[wasm_bindgen(method, catch)]
    fn expand(this: &WebApp) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = showAlert)]
    fn show_alert(this: &WebApp, message: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, getter = colorScheme)]
    fn color_scheme(this: &WebApp) -> Option<String>;

    pub type HapticFeedback;

    #[wasm_bindgen(method, catch, js_name = impactOccurred)]
    fn impact_occurred(this: &HapticFeedback, style: &str) -> Result<(), JsValue>;
}

/// Read `target[key]`, treating `undefined` and `null` as absent.
fn lookup(target: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn log_rejected(call: &str, err: JsValue) {
    tracing::warn!(call, error = ?err, "host rejected request");
}

/// [`HostBridge`] backed by the live host object.
pub struct TelegramBridge {
    web_app: WebApp,
}

impl TelegramBridge {
    /// Look up the host object on the global scope.
    ///
    /// Returns `None` when the page was loaded outside the host app.
    pub fn acquire() -> Option<Self> {
        let telegram = lookup(&js_sys::global(), "Telegram")?;
        let web_app = lookup(&telegram, "WebApp")?;
        Some(Self {
            web_app: web_app.unchecked_into(),
        })
    }
}

impl HostBridge for TelegramBridge {
    fn expand(&self) {
        if let Err(e) = self.web_app.expand() {
            log_rejected("expand", e);
        }
    }

    fn impact(&self, style: ImpactStyle) {
        // Hosts without haptics support don't expose the object at all
        let Some(haptics) = lookup(&self.web_app, "HapticFeedback") else {
            tracing::debug!("host has no haptic feedback");
            return;
        };
        let haptics: HapticFeedback = haptics.unchecked_into();
        if let Err(e) = haptics.impact_occurred(style.as_str()) {
            log_rejected("impactOccurred", e);
        }
    }

    fn show_alert(&self, message: &str) {
        if let Err(e) = self.web_app.show_alert(message) {
            log_rejected("showAlert", e);
        }
    }

    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::from_host(self.web_app.color_scheme().as_deref())
    }
}
