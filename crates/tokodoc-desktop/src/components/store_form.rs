//! Store document edit form: create/edit state machine, masked inputs,
//! atomic validation, and the save/update submission protocol.

use std::time::Duration;

use dioxus::prelude::*;

use tokodoc_core::api::SaveDocument;
use tokodoc_core::models::{format_area, parse_file_links};
use tokodoc_core::validate::{
    mask_area, mask_store_code, mask_store_name, validate_fields, FieldErrors, FormFields,
};
use tokodoc_core::Error;

use super::UploadSection;
use crate::state::{AppState, Page};

/// Delay between a successful save and the return to the list view.
const SAVED_NAVIGATION_DELAY_SECS: u64 = 3;

#[component]
pub fn StoreForm() -> Element {
    let mut state = use_context::<AppState>();
    let mut fields = use_signal(FormFields::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut is_editing = use_signal(|| false);
    let mut loaded_code = use_signal(|| None::<String>);

    let branch = (state.session)().map(|session| session.branch).unwrap_or_default();

    // Seed the form and the attachment previews when a record is opened
    // for editing; fall back to the empty create state otherwise.
    use_effect(move || {
        let editing = (state.editing_doc)();
        match editing {
            Some(doc) => {
                if loaded_code.peek().as_deref() == Some(doc.store_code.as_str()) {
                    return;
                }
                fields.set(FormFields {
                    store_code: doc.store_code.clone(),
                    store_name: doc.store_name.clone(),
                    sales_area: format_area(&doc.sales_area),
                    parking_area: format_area(&doc.parking_area),
                    warehouse_area: format_area(&doc.warehouse_area),
                });
                let refs = doc
                    .file_links
                    .as_deref()
                    .map(parse_file_links)
                    .unwrap_or_default();
                state.attachments.write().load_all_existing(&refs);
                errors.set(FieldErrors::default());
                is_editing.set(true);
                loaded_code.set(Some(doc.store_code));
            }
            None => {
                if loaded_code.peek().is_some() {
                    fields.set(FormFields::default());
                    errors.set(FieldErrors::default());
                    is_editing.set(false);
                    loaded_code.set(None);
                }
            }
        }
    });

    let reset_form = move |_| {
        fields.set(FormFields::default());
        errors.set(FieldErrors::default());
        is_editing.set(false);
        loaded_code.set(None);
        state.editing_doc.set(None);
        state.attachments.write().clear();
    };

    let submit = move |_| {
        if (state.saving)() {
            return;
        }
        state.saving.set(true);

        let current = fields();
        let found = validate_fields(&current);
        if !found.is_empty() {
            // No network call; all field errors show at once.
            errors.set(found);
            state
                .notices
                .show_error("Please fix the highlighted fields before saving.");
            state.saving.set(false);
            return;
        }
        errors.set(FieldErrors::default());

        let Some(session) = (state.session)() else {
            state.saving.set(false);
            return;
        };

        let payload = SaveDocument {
            store_code: current.store_code,
            store_name: current.store_name,
            branch: session.branch,
            sales_area: current.sales_area,
            parking_area: current.parking_area,
            warehouse_area: current.warehouse_area,
            files: state.attachments.peek().payload(),
        };
        let editing = is_editing();
        let client = (state.api)();

        spawn(async move {
            let result = if editing {
                client.update_document(&payload.store_code, &payload).await
            } else {
                client.create_document(&payload).await
            };
            state.saving.set(false);

            match result {
                Ok(message) => {
                    tracing::info!("Saved document {}", payload.store_code);
                    state.notices.show_success(message);
                    state.attachments.write().clear();
                    fields.set(FormFields::default());
                    errors.set(FieldErrors::default());
                    is_editing.set(false);
                    loaded_code.set(None);

                    tokio::time::sleep(Duration::from_secs(SAVED_NAVIGATION_DELAY_SECS)).await;
                    state.editing_doc.set(None);
                    state.request_refresh();
                    state.page.set(Page::List);
                }
                Err(error) => {
                    tracing::error!("Failed to save document: {error}");
                    // Form state is preserved for correction and resubmit.
                    state.notices.show_error(match error {
                        Error::Api(message) => message,
                        _ => "Could not reach the server.".to_string(),
                    });
                }
            }
        });
    };

    let editing = is_editing();
    let current = fields();
    let current_errors = errors();
    let saving = (state.saving)();

    rsx! {
        div { class: "store-form",
            h3 { class: "section-title",
                if editing { "Edit store record" } else { "Store record" }
            }
            div { class: "grid",
                div { class: "field",
                    label { "Branch" }
                    input { class: "input", r#type: "text", readonly: true, value: "{branch}" }
                }
                div { class: "field",
                    label { "Store code" }
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: "AB12",
                        readonly: editing,
                        value: "{current.store_code}",
                        oninput: move |evt| fields.write().store_code = mask_store_code(&evt.value()),
                    }
                    if let Some(message) = current_errors.store_code.clone() {
                        div { class: "error", "{message}" }
                    }
                }
                div { class: "field",
                    label { "Store name" }
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: "ALFAMART SUDIRMAN",
                        value: "{current.store_name}",
                        oninput: move |evt| fields.write().store_name = mask_store_name(&evt.value()),
                    }
                    if let Some(message) = current_errors.store_name.clone() {
                        div { class: "error", "{message}" }
                    }
                }
                div { class: "field",
                    label { "Sales (m²)" }
                    input {
                        class: "input",
                        placeholder: "120,50",
                        value: "{current.sales_area}",
                        oninput: move |evt| fields.write().sales_area = mask_area(&evt.value()),
                    }
                    if let Some(message) = current_errors.sales_area.clone() {
                        div { class: "error", "{message}" }
                    }
                }
                div { class: "field",
                    label { "Parking (m²)" }
                    input {
                        class: "input",
                        placeholder: "80,00",
                        value: "{current.parking_area}",
                        oninput: move |evt| fields.write().parking_area = mask_area(&evt.value()),
                    }
                    if let Some(message) = current_errors.parking_area.clone() {
                        div { class: "error", "{message}" }
                    }
                }
                div { class: "field",
                    label { "Warehouse (m²)" }
                    input {
                        class: "input",
                        placeholder: "30,25",
                        value: "{current.warehouse_area}",
                        oninput: move |evt| fields.write().warehouse_area = mask_area(&evt.value()),
                    }
                    if let Some(message) = current_errors.warehouse_area.clone() {
                        div { class: "error", "{message}" }
                    }
                }
            }

            h3 { class: "section-title",
                if editing { "Add new documents (optional)" } else { "Upload documents & photos" }
            }
            UploadSection {}

            div { class: "actions",
                button {
                    class: "btn btn-primary",
                    disabled: saving,
                    onclick: submit,
                    if saving {
                        "Saving..."
                    } else if editing {
                        "Update document"
                    } else {
                        "Save document"
                    }
                }
                button { class: "btn btn-outline", onclick: reset_form, "Reset" }
            }
        }
    }
}
