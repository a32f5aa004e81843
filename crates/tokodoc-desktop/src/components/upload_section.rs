//! Per-category attachment rows: file picking, previews, removal.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use dioxus::prelude::*;
use rfd::AsyncFileDialog;

use tokodoc_core::models::FileCategory;
use tokodoc_core::reconciler::{AttachmentEntry, LocalFile};

use crate::state::AppState;

/// File-picker extension filter per category.
const fn extensions(category: FileCategory) -> &'static [&'static str] {
    match category {
        FileCategory::OriginalPhoto | FileCategory::RenovationPhoto => &["jpg", "jpeg", "png"],
        FileCategory::MechanicalElectrical | FileCategory::Civil | FileCategory::InitialSketch => {
            &["pdf", "dwg", "dxf", "jpg", "jpeg", "png"]
        }
        FileCategory::Supporting => &["pdf", "jpg", "jpeg", "png"],
    }
}

#[component]
pub fn UploadSection() -> Element {
    rsx! {
        div { class: "upload-section",
            div { class: "subpanel",
                div { class: "subpanel-title", "a) Photos" }
                FileRow { category: FileCategory::OriginalPhoto }
                FileRow { category: FileCategory::RenovationPhoto }
            }
            div { class: "subpanel",
                div { class: "subpanel-title", "b) Drawings" }
                FileRow { category: FileCategory::MechanicalElectrical }
                FileRow { category: FileCategory::Civil }
                FileRow { category: FileCategory::InitialSketch }
            }
            div { class: "subpanel",
                div { class: "subpanel-title", "c) Supporting documents" }
                FileRow { category: FileCategory::Supporting }
            }
        }
    }
}

#[component]
fn FileRow(category: FileCategory) -> Element {
    let mut state = use_context::<AppState>();
    let entries = (state.attachments)().entries(category).to_vec();

    let pick_files = move |_| {
        spawn(async move {
            let picked = AsyncFileDialog::new()
                .add_filter(category.label(), extensions(category))
                .pick_files()
                .await;
            let Some(handles) = picked else {
                return;
            };

            let mut files = Vec::with_capacity(handles.len());
            for handle in handles {
                let filename = handle.file_name();
                let bytes = handle.read().await;
                let mime_type = mime_guess::from_path(&filename)
                    .first_or_octet_stream()
                    .essence_str()
                    .to_string();
                files.push(LocalFile {
                    filename,
                    mime_type,
                    bytes,
                });
            }
            if files.is_empty() {
                return;
            }

            if let Err(error) = state.attachments.write().add_files(category, files) {
                tracing::debug!("Rejected duplicate upload for {category}: {error}");
                state
                    .notices
                    .show_warning("Duplicate file names are not allowed within one category.");
            }
        });
    };

    rsx! {
        div { class: "file-row",
            label { class: "file-label", {category.label()} }
            button { class: "btn btn-sm", onclick: pick_files, "Add files" }

            if !entries.is_empty() {
                div { class: "preview-grid",
                    for (index, entry) in entries.iter().enumerate() {
                        {
                            let entry = entry.clone();
                            let thumb_key = format!("{category}-{}", entry.filename());
                            rsx! {
                                PreviewThumb { key: "{thumb_key}", category, index, entry }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PreviewThumb(category: FileCategory, index: usize, entry: AttachmentEntry) -> Element {
    let mut state = use_context::<AppState>();

    let body = match &entry {
        // Locally picked images preview from their own bytes.
        AttachmentEntry::Pending {
            filename,
            mime_type,
            bytes,
        } if entry.is_image() => {
            let data_url = format!("data:{mime_type};base64,{}", BASE64.encode(bytes));
            rsx! {
                img { class: "preview-thumb", src: "{data_url}", alt: "{filename}" }
                div { class: "preview-name", "{filename}" }
            }
        }
        // Persisted files and non-image picks get a placeholder tile.
        _ => {
            let icon = if entry.is_image() { "📷" } else { "📄" };
            let filename = entry.filename().to_string();
            rsx! {
                div { class: "preview-placeholder",
                    span { class: "preview-icon", "{icon}" }
                    if let AttachmentEntry::Persisted { url, .. } = &entry {
                        a { class: "preview-name", href: "{url}", "{filename}" }
                    } else {
                        div { class: "preview-name", "{filename}" }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "preview-thumb-container",
            button {
                class: "preview-delete",
                title: "Remove this file",
                // One click retracts the file from the next submission,
                // persisted or local alike.
                onclick: move |_| state.attachments.write().remove(category, index),
                "✕"
            }
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn photo_categories_only_accept_images() {
        assert_eq!(extensions(FileCategory::OriginalPhoto), &["jpg", "jpeg", "png"]);
        assert_eq!(extensions(FileCategory::RenovationPhoto), &["jpg", "jpeg", "png"]);
    }

    #[test]
    fn drawing_categories_accept_cad_formats() {
        for category in [
            FileCategory::MechanicalElectrical,
            FileCategory::Civil,
            FileCategory::InitialSketch,
        ] {
            assert!(extensions(category).contains(&"dwg"));
            assert!(extensions(category).contains(&"pdf"));
        }
    }
}
