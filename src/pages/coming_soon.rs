use crate::components::NotifyButton;
use crate::content::{HEADLINE, TAGLINE};
use crate::controller::NotifyController;
use crate::telegram::TelegramBridge;
use leptos::*;
use std::rc::Rc;

#[component]
pub fn ComingSoonPage(controller: Rc<NotifyController<TelegramBridge>>) -> impl IntoView {
    view! {
        <main class="container coming-soon">
            <header>
                <h1>{HEADLINE}</h1>
                <p class="tagline">{TAGLINE}</p>
            </header>
            <NotifyButton controller=controller/>
        </main>
    }
}
