//! Toast notification with auto-dismiss.

use std::time::Duration;

use dioxus::prelude::*;

use crate::state::AppState;

const TOAST_DISMISS_SECS: u64 = 3;

#[component]
pub fn Toast() -> Element {
    let state = use_context::<AppState>();
    let message = (state.notices.toast)();

    // Each new message restarts the dismiss timer.
    use_effect(move || {
        if state.notices.toast.read().is_none() {
            return;
        }
        let shown = state.notices.toast.peek().clone();
        let mut toast = state.notices.toast;
        spawn(async move {
            tokio::time::sleep(Duration::from_secs(TOAST_DISMISS_SECS)).await;
            if *toast.peek() == shown {
                toast.set(None);
            }
        });
    });

    rsx! {
        if let Some(text) = message {
            div { class: "toast-popup", "{text}" }
        }
    }
}
