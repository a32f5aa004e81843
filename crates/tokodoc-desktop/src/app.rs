//! Main application component

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use dioxus::prelude::*;

use tokodoc_core::gate::{OperationalWindow, CHECK_INTERVAL_SECS};
use tokodoc_core::models::SessionPersistence;
use tokodoc_core::reconciler::AttachmentSet;

use crate::components::{ErrorModal, Login, LogoutModal, SuccessModal, Toast, WarningModal};
use crate::services::{api_client_from_env, KeyringSessionStore};
use crate::state::{AppState, Notices, Page};
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let window = OperationalWindow::default();

    // Restore the persisted session once; absence means logged out.
    let session = use_signal(|| match KeyringSessionStore::default().load() {
        Ok(stored) => stored,
        Err(error) => {
            tracing::warn!("Failed to restore session: {error}");
            None
        }
    });

    let now = Utc::now();
    let docs = use_signal(Vec::new);
    let page = use_signal(|| Page::List);
    let editing_doc = use_signal(|| None);
    let search_query = use_signal(String::new);
    let table_page = use_signal(|| 1);
    let refresh_version = use_signal(|| 0u64);
    let attachments = use_signal(AttachmentSet::new);
    let saving = use_signal(|| false);
    let gate_open = use_signal(|| window.is_within(now));
    let gate_message =
        use_signal(|| (!window.is_within(now)).then(|| window.lockout_message(now)));
    let logout_prompt = use_signal(|| false);
    let notices = Notices {
        toast: use_signal(|| None),
        success: use_signal(|| None),
        error: use_signal(|| None),
        warning: use_signal(|| None),
    };
    let api = use_signal(|| Arc::new(api_client_from_env()));

    let mut state = AppState {
        session,
        docs,
        page,
        editing_doc,
        search_query,
        table_page,
        refresh_version,
        attachments,
        saving,
        gate_open,
        gate_message,
        logout_prompt,
        notices,
        api,
        window,
    };

    use_context_provider(|| state);

    // Re-evaluate the operational window every minute. Outside the window,
    // login is locked; an active session is warned and terminated.
    use_future(move || async move {
        loop {
            let now = Utc::now();
            let open = state.window.is_within(now);
            state.gate_open.set(open);
            state
                .gate_message
                .set((!open).then(|| state.window.lockout_message(now)));

            if !open && state.session.peek().is_some() {
                tracing::info!("Operational window closed, terminating session");
                if let Err(error) = KeyringSessionStore::default().clear() {
                    tracing::warn!("Failed to clear stored session: {error}");
                }
                state.sign_out();
                state.notices.show_warning(format!(
                    "{}\nYou have been signed out.",
                    state.window.lockout_message(now)
                ));
            }

            tokio::time::sleep(Duration::from_secs(CHECK_INTERVAL_SECS)).await;
        }
    });

    // Fetch the document list whenever the session or refresh version
    // changes. Failures surface once and leave an empty list.
    use_effect(move || {
        let _version = (state.refresh_version)();
        let Some(current) = (state.session)() else {
            return;
        };
        let client = (state.api)();
        spawn(async move {
            match client.documents_for(&current).await {
                Ok(items) => {
                    tracing::debug!("Loaded {} documents", items.len());
                    state.docs.set(items);
                }
                Err(error) => {
                    tracing::error!("Failed to load documents: {error}");
                    state.docs.set(Vec::new());
                    state
                        .notices
                        .show_error("Could not load documents from the server.");
                }
            }
        });
    });

    let signed_in = (state.session)().is_some();

    rsx! {
        div { class: "app-container",
            if signed_in {
                Home {}
            } else {
                Login {}
            }

            Toast {}
            SuccessModal {}
            ErrorModal {}
            WarningModal {}
            LogoutModal {}
        }
    }
}
