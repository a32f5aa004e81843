//! Signed-in main view: header plus the list/form surfaces.

use dioxus::prelude::*;

use crate::components::{DocumentTable, StoreForm};
use crate::state::{AppState, Page};

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<AppState>();
    let session = (state.session)();
    let display_name = session
        .as_ref()
        .map(|current| {
            if current.name.is_empty() {
                current.email.clone()
            } else {
                current.name.clone()
            }
        })
        .unwrap_or_default();
    let can_edit = session.as_ref().is_some_and(tokodoc_core::Session::can_edit);
    let current_page = (state.page)();

    rsx! {
        header { class: "app-header",
            h1 { "STORE DOCUMENT ARCHIVE" }
            div { class: "header-bottom",
                span { class: "header-left",
                    "Building & Maintenance - "
                    strong { "{display_name}" }
                }
                button {
                    class: "btn-logout",
                    onclick: move |_| state.logout_prompt.set(true),
                    "Logout"
                }
            }
        }

        main { class: "main-content",
            if current_page == Page::List {
                section { class: "card",
                    div { class: "card-title-row",
                        h2 { "Documents" }
                        // Head office gets a read-only projection.
                        if can_edit {
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| {
                                    state.editing_doc.set(None);
                                    state.attachments.write().clear();
                                    state.page.set(Page::Form);
                                },
                                "Add document"
                            }
                        }
                    }
                    DocumentTable {}
                }
            } else {
                section { class: "card",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| state.page.set(Page::List),
                        "← Back to list"
                    }
                    StoreForm {}
                }
            }
        }
    }
}
