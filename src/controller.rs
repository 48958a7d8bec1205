use crate::bridge::{BridgeError, HostBridge};
use crate::content::NOTIFY_MESSAGE;
use crate::haptics::NOTIFY_IMPACT;
use crate::theme::ColorScheme;
use std::rc::Rc;

/// Mediates every interaction between the page and the host shell.
///
/// A controller only exists once the bridge has been acquired and the page
/// expanded, so holding one means the page is ready. There is no teardown:
/// the host owns the page's lifetime.
pub struct NotifyController<B> {
    bridge: B,
    color_scheme: ColorScheme,
}

impl<B: HostBridge> NotifyController<B> {
    /// Run once at page load.
    ///
    /// Fails with [`BridgeError::MissingHostBridge`] without touching the
    /// host when no bridge was provided.
    pub fn initialize(bridge: Option<B>) -> Result<Self, BridgeError> {
        let Some(bridge) = bridge else {
            tracing::error!("host bridge not found, page is not running inside the host app");
            return Err(BridgeError::MissingHostBridge);
        };

        bridge.expand();

        // Observed only; nothing branches on the theme yet.
        let color_scheme = bridge.color_scheme();
        tracing::debug!(?color_scheme, "host color scheme");

        tracing::info!("mini app ready");
        Ok(Self {
            bridge,
            color_scheme,
        })
    }

    /// Handle a tap on the notify button: haptic first, then the alert.
    ///
    /// Nothing is recorded, so repeated taps repeat both effects.
    pub fn register_interest(&self) {
        tracing::debug!("notify requested");
        self.bridge.impact(NOTIFY_IMPACT);
        self.bridge.show_alert(NOTIFY_MESSAGE);
    }

    /// Theme the host reported at startup
    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }
}

/// Page startup: initialize once, then hand the ready controller to `mount`.
///
/// `mount` is where the UI and its handlers get built. Without a bridge it
/// never runs, so nothing on the page becomes interactive.
pub fn launch<B, F>(bridge: Option<B>, mount: F) -> Result<(), BridgeError>
where
    B: HostBridge,
    F: FnOnce(Rc<NotifyController<B>>),
{
    let controller = NotifyController::initialize(bridge)?;
    mount(Rc::new(controller));
    Ok(())
}
