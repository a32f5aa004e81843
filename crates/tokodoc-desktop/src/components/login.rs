//! Login surface with operational-hours lockout.

use dioxus::prelude::*;

use tokodoc_core::models::SessionPersistence;

use crate::services::KeyringSessionStore;
use crate::state::AppState;

#[component]
pub fn Login() -> Element {
    let mut state = use_context::<AppState>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut login_error = use_signal(|| None::<String>);

    let gate_open = (state.gate_open)();
    let gate_message = (state.gate_message)();

    let submit = move |_| {
        if busy() || !(state.gate_open)() {
            return;
        }
        busy.set(true);
        login_error.set(None);

        let client = (state.api)();
        let user = username();
        let pass = password();
        spawn(async move {
            match client.login(&user, &pass).await {
                Ok(session) => {
                    if let Err(error) = KeyringSessionStore::default().save(&session) {
                        tracing::warn!("Failed to persist session: {error}");
                    }
                    tracing::info!("Signed in as {} ({})", session.email, session.branch);
                    state.session.set(Some(session));
                }
                Err(error) => {
                    tracing::warn!("Login failed: {error}");
                    login_error.set(Some(error.to_string()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "login-screen",
            div { class: "login-card",
                h2 { "Building & Maintenance" }
                p { class: "login-subtitle", "Store Document Archive" }

                if let Some(message) = gate_message {
                    div { class: "gate-banner", "{message}" }
                }

                div { class: "form-group",
                    label { "Username" }
                    input {
                        r#type: "email",
                        placeholder: "Enter username",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { "Password" }
                    input {
                        r#type: "password",
                        placeholder: "Enter password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                if let Some(message) = login_error() {
                    div { class: "login-error", "{message}" }
                }

                button {
                    class: "btn-primary-login",
                    disabled: busy() || !gate_open,
                    onclick: submit,
                    if busy() { "Signing in..." } else { "Login" }
                }
            }
        }
    }
}
