//! The capability surface the host shell lends to the page.
//!
//! Every call is a one-way request. The host may ignore any of them and never
//! reports back, so none of the methods return anything.

use crate::haptics::ImpactStyle;
use crate::theme::ColorScheme;
use std::rc::Rc;

pub trait HostBridge {
    /// Ask the host to present the page at full height.
    fn expand(&self);

    /// Ask the host for a haptic impact.
    fn impact(&self, style: ImpactStyle);

    /// Show a host-native modal alert. Dismissal is owned by the host.
    fn show_alert(&self, message: &str);

    /// Current host theme.
    fn color_scheme(&self) -> ColorScheme;
}

impl<B: HostBridge + ?Sized> HostBridge for Rc<B> {
    fn expand(&self) {
        (**self).expand()
    }

    fn impact(&self, style: ImpactStyle) {
        (**self).impact(style)
    }

    fn show_alert(&self, message: &str) {
        (**self).show_alert(message)
    }

    fn color_scheme(&self) -> ColorScheme {
        (**self).color_scheme()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// The page was loaded outside the host shell.
    #[error("host bridge unavailable: this page must be opened inside the app")]
    MissingHostBridge,
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    /// One request made against a [`RecordingBridge`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum BridgeCall {
        Expand,
        Impact(ImpactStyle),
        ShowAlert(String),
        ReadColorScheme,
    }

    /// Fake host that records every request in order.
    pub struct RecordingBridge {
        scheme: ColorScheme,
        calls: RefCell<Vec<BridgeCall>>,
    }

    impl RecordingBridge {
        pub fn new(scheme: ColorScheme) -> Self {
            Self {
                scheme,
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<BridgeCall> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: BridgeCall) {
            self.calls.borrow_mut().push(call);
        }
    }

    impl HostBridge for RecordingBridge {
        fn expand(&self) {
            self.record(BridgeCall::Expand);
        }

        fn impact(&self, style: ImpactStyle) {
            self.record(BridgeCall::Impact(style));
        }

        fn show_alert(&self, message: &str) {
            self.record(BridgeCall::ShowAlert(message.to_owned()));
        }

        fn color_scheme(&self) -> ColorScheme {
            self.record(BridgeCall::ReadColorScheme);
            self.scheme
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{BridgeCall, RecordingBridge};
    use super::*;

    #[test]
    fn test_rc_forwards_to_inner_bridge() {
        let bridge = Rc::new(RecordingBridge::new(ColorScheme::Dark));
        let shared = Rc::clone(&bridge);

        shared.expand();
        shared.impact(ImpactStyle::Heavy);
        shared.show_alert("hi");
        assert_eq!(shared.color_scheme(), ColorScheme::Dark);

        assert_eq!(
            bridge.calls(),
            vec![
                BridgeCall::Expand,
                BridgeCall::Impact(ImpactStyle::Heavy),
                BridgeCall::ShowAlert("hi".to_string()),
                BridgeCall::ReadColorScheme,
            ]
        );
    }

    #[test]
    fn test_missing_bridge_message() {
        let msg = BridgeError::MissingHostBridge.to_string();
        assert!(msg.contains("host bridge unavailable"), "got: {}", msg);
    }
}
