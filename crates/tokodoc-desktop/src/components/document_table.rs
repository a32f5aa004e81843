//! Document list: search, table, pagination, edit action.

use dioxus::prelude::*;

use tokodoc_core::models::format_area;
use tokodoc_core::Session;

use crate::state::{AppState, Page};

#[component]
pub fn DocumentTable() -> Element {
    let mut state = use_context::<AppState>();
    let can_edit = (state.session)().as_ref().is_some_and(Session::can_edit);

    let filtered = state.filtered_docs();
    let visible = state.visible_docs();
    let total_pages = state.table_pages();
    let current = (state.table_page)();

    let open_for_edit = move |store_code: String| {
        let client = (state.api)();
        spawn(async move {
            match client.document(&store_code).await {
                Ok(doc) => {
                    state
                        .notices
                        .show_toast(format!("Loaded {} into the form", doc.store_code));
                    state.editing_doc.set(Some(doc));
                    state.page.set(Page::Form);
                }
                Err(error) => {
                    tracing::error!("Failed to load document {store_code}: {error}");
                    state.notices.show_error("Could not load the document detail.");
                }
            }
        });
    };

    rsx! {
        div { class: "table-card",
            div { class: "search-box",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search store code or name...",
                    value: "{state.search_query}",
                    // Every keystroke refilters and resets to page 1.
                    oninput: move |evt| {
                        state.search_query.set(evt.value());
                        state.table_page.set(1);
                    },
                }
            }

            if filtered.is_empty() {
                div { class: "empty", "No documents yet." }
            } else {
                table { class: "table",
                    thead {
                        tr {
                            th { "Code" }
                            th { "Name" }
                            th { "Branch" }
                            th { "Sales" }
                            th { "Parking" }
                            th { "Warehouse" }
                            th { "Folder" }
                            if can_edit {
                                th { "Actions" }
                            }
                        }
                    }
                    tbody {
                        for doc in visible {
                            {
                                let store_code = doc.store_code.clone();
                                rsx! {
                                    tr { key: "{doc.store_code}",
                                        td { "{doc.store_code}" }
                                        td { "{doc.store_name}" }
                                        td { "{doc.branch}" }
                                        td { {format_area(&doc.sales_area)} " m²" }
                                        td { {format_area(&doc.parking_area)} " m²" }
                                        td { {format_area(&doc.warehouse_area)} " m²" }
                                        td {
                                            if let Some(link) = doc.folder_link.clone() {
                                                a { href: "{link}", "Open folder" }
                                            } else {
                                                "-"
                                            }
                                        }
                                        if can_edit {
                                            td {
                                                button {
                                                    class: "btn btn-sm btn-primary",
                                                    onclick: move |_| open_for_edit(store_code.clone()),
                                                    "Edit"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "pagination",
                    button {
                        class: "btn btn-sm",
                        disabled: current <= 1,
                        onclick: move |_| state.table_page.set(current.saturating_sub(1).max(1)),
                        "‹"
                    }
                    span { "Page {current} of {total_pages.max(1)}" }
                    button {
                        class: "btn btn-sm",
                        disabled: current >= total_pages || total_pages == 0,
                        onclick: move |_| state.table_page.set(current + 1),
                        "›"
                    }
                }
            }
        }
    }
}
