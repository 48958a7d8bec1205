use crate::content::NOTIFY_BUTTON_LABEL;
use crate::controller::NotifyController;
use crate::telegram::TelegramBridge;
use leptos::*;
use std::rc::Rc;

/// The one interactive control on the page.
///
/// Only rendered once the controller exists, so the page is already
/// expanded by the time the handler can fire.
#[component]
pub fn NotifyButton(controller: Rc<NotifyController<TelegramBridge>>) -> impl IntoView {
    view! {
        <button
            class="notify-button"
            on:click=move |_| controller.register_interest()
        >
            {NOTIFY_BUTTON_LABEL}
        </button>
    }
}
