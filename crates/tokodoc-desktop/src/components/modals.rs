//! Modal overlays: success, error, warning, and logout confirmation.

use dioxus::prelude::*;

use tokodoc_core::models::SessionPersistence;

use crate::services::KeyringSessionStore;
use crate::state::AppState;

#[component]
pub fn SuccessModal() -> Element {
    let state = use_context::<AppState>();
    let mut slot = state.notices.success;

    rsx! {
        if let Some(message) = slot() {
            div { class: "modal-overlay",
                div { class: "modal-box success",
                    div { class: "icon-circle success-icon", "✓" }
                    h3 { "Success" }
                    p { "{message}" }
                    button { class: "btn btn-primary", onclick: move |_| slot.set(None), "OK" }
                }
            }
        }
    }
}

#[component]
pub fn ErrorModal() -> Element {
    let state = use_context::<AppState>();
    let mut slot = state.notices.error;

    rsx! {
        if let Some(message) = slot() {
            div { class: "modal-overlay",
                div { class: "modal-box error",
                    div { class: "icon-circle error-icon", "!" }
                    h3 { "Error" }
                    p { "{message}" }
                    button { class: "btn btn-primary", onclick: move |_| slot.set(None), "OK" }
                }
            }
        }
    }
}

/// Warning surface: duplicate uploads and the auto-logout notice.
#[component]
pub fn WarningModal() -> Element {
    let state = use_context::<AppState>();
    let mut slot = state.notices.warning;

    rsx! {
        if let Some(message) = slot() {
            div { class: "modal-overlay",
                div { class: "modal-box warning",
                    div { class: "icon-circle warning-icon", "!" }
                    h3 { "Warning" }
                    p { "{message}" }
                    button { class: "btn-warning-close", onclick: move |_| slot.set(None), "OK" }
                }
            }
        }
    }
}

/// Logout confirmation; on confirm the stored session is cleared too.
#[component]
pub fn LogoutModal() -> Element {
    let mut state = use_context::<AppState>();

    let confirm = move |_| {
        if let Err(error) = KeyringSessionStore::default().clear() {
            tracing::warn!("Failed to clear stored session: {error}");
        }
        state.sign_out();
    };

    rsx! {
        if (state.logout_prompt)() {
            div { class: "modal-overlay",
                div { class: "modal-box",
                    h3 { "Log out?" }
                    p { "You will be signed out of the current account." }
                    div { class: "modal-actions",
                        button { class: "btn-confirm", onclick: confirm, "Yes, log out" }
                        button {
                            class: "btn-cancel",
                            onclick: move |_| state.logout_prompt.set(false),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
