//! Attachment reconciliation
//!
//! Tracks, per category, the attachments that will be part of the next
//! save: references already persisted server-side merged with files the
//! user added locally in this editing session. The entry list is the
//! single source of truth — removing an entry retracts it from the next
//! submission whether it was remote or local, and the submission payload
//! is the complete desired file set (the backend replaces, not diffs).

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{filename_is_image, FileCategory, RemoteFileRef};

/// A file selected locally, not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// One attachment in a category's working set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentEntry {
    /// Already stored server-side; carries no binary payload.
    Persisted { filename: String, url: String },
    /// Selected locally; bytes are held until base64 encoding on submit.
    Pending {
        filename: String,
        mime_type: String,
        bytes: Vec<u8>,
    },
}

impl AttachmentEntry {
    #[must_use]
    pub fn filename(&self) -> &str {
        match self {
            Self::Persisted { filename, .. } | Self::Pending { filename, .. } => filename,
        }
    }

    /// Persisted entries judge image-ness by extension, pending ones by
    /// MIME type.
    #[must_use]
    pub fn is_image(&self) -> bool {
        match self {
            Self::Persisted { filename, .. } => filename_is_image(filename),
            Self::Pending { mime_type, .. } => mime_type.starts_with("image/"),
        }
    }
}

/// One entry of the merged submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePayload {
    pub category: String,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "keepExisting", skip_serializing_if = "Option::is_none")]
    pub keep_existing: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Per-category working sets for the edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentSet {
    entries: HashMap<FileCategory, Vec<AttachmentEntry>>,
}

impl AttachmentSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current working set for a category, in insertion order.
    #[must_use]
    pub fn entries(&self, category: FileCategory) -> &[AttachmentEntry] {
        self.entries.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Number of attachments currently staged for a category.
    #[must_use]
    pub fn count(&self, category: FileCategory) -> usize {
        self.entries(category).len()
    }

    /// Total number of attachments across all categories.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Stage locally selected files for a category.
    ///
    /// The whole batch is rejected if any candidate's filename collides
    /// case-insensitively with a current entry (persisted or pending) or
    /// with another candidate in the batch; state is left unchanged.
    pub fn add_files(&mut self, category: FileCategory, files: Vec<LocalFile>) -> Result<()> {
        let mut taken: Vec<String> = self
            .entries(category)
            .iter()
            .map(|entry| entry.filename().to_lowercase())
            .collect();

        let mut duplicates = Vec::new();
        for file in &files {
            let key = file.filename.to_lowercase();
            if taken.contains(&key) {
                duplicates.push(file.filename.clone());
            } else {
                taken.push(key);
            }
        }
        if !duplicates.is_empty() {
            return Err(Error::DuplicateFile(duplicates.join(", ")));
        }

        let slot = self.entries.entry(category).or_default();
        for file in files {
            slot.push(AttachmentEntry::Pending {
                filename: file.filename,
                mime_type: file.mime_type,
                bytes: file.bytes,
            });
        }
        Ok(())
    }

    /// Remove the entry at `index` from a category's working set.
    ///
    /// A single removal fully retracts the file from the pending
    /// submission, persisted or local alike. Out-of-range indices are
    /// ignored.
    pub fn remove(&mut self, category: FileCategory, index: usize) {
        if let Some(slot) = self.entries.get_mut(&category) {
            if index < slot.len() {
                slot.remove(index);
            }
        }
    }

    /// Seed a category from parsed remote references.
    ///
    /// With `reset` the category's current list is replaced; otherwise the
    /// references are appended.
    pub fn load_existing(&mut self, category: FileCategory, refs: &[RemoteFileRef], reset: bool) {
        let slot = self.entries.entry(category).or_default();
        if reset {
            slot.clear();
        }
        slot.extend(refs.iter().map(|reference| AttachmentEntry::Persisted {
            filename: reference.filename.clone(),
            url: reference.url.clone(),
        }));
    }

    /// Seed every category from a full set of remote references,
    /// replacing whatever was staged before.
    pub fn load_all_existing(&mut self, refs: &[RemoteFileRef]) {
        self.entries.clear();
        for reference in refs {
            self.entries
                .entry(reference.category)
                .or_default()
                .push(AttachmentEntry::Persisted {
                    filename: reference.filename.clone(),
                    url: reference.url.clone(),
                });
        }
    }

    /// Drop everything staged, across all categories.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Build the merged, submission-ready file list.
    ///
    /// Persisted entries are emitted by reference with `keepExisting`;
    /// pending entries are base64 encoded. Entries removed earlier are
    /// simply absent, which is the retraction signal.
    #[must_use]
    pub fn payload(&self) -> Vec<FilePayload> {
        let mut out = Vec::with_capacity(self.total());
        for category in FileCategory::ALL {
            for entry in self.entries(category) {
                out.push(match entry {
                    AttachmentEntry::Persisted { filename, url } => FilePayload {
                        category: category.wire_token().to_string(),
                        filename: filename.clone(),
                        url: Some(url.clone()),
                        keep_existing: Some(true),
                        mime_type: None,
                        data: None,
                    },
                    AttachmentEntry::Pending {
                        filename,
                        mime_type,
                        bytes,
                    } => FilePayload {
                        category: category.wire_token().to_string(),
                        filename: filename.clone(),
                        url: None,
                        keep_existing: None,
                        mime_type: Some(mime_type.clone()),
                        data: Some(BASE64.encode(bytes)),
                    },
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn local(name: &str, mime: &str) -> LocalFile {
        LocalFile {
            filename: name.to_string(),
            mime_type: mime.to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    fn remote(category: FileCategory, name: &str, url: &str) -> RemoteFileRef {
        RemoteFileRef {
            category,
            filename: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn add_then_payload_encodes_base64() {
        let mut set = AttachmentSet::new();
        set.add_files(FileCategory::OriginalPhoto, vec![local("front.jpg", "image/jpeg")])
            .unwrap();

        let payload = set.payload();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].category, "fotoAsal");
        assert_eq!(payload[0].filename, "front.jpg");
        assert_eq!(payload[0].mime_type.as_deref(), Some("image/jpeg"));
        assert_eq!(payload[0].data.as_deref(), Some("AQID"));
        assert_eq!(payload[0].url, None);
        assert_eq!(payload[0].keep_existing, None);
    }

    #[test]
    fn duplicate_name_rejects_the_whole_batch() {
        let mut set = AttachmentSet::new();
        set.add_files(FileCategory::OriginalPhoto, vec![local("photo.jpg", "image/jpeg")])
            .unwrap();

        let result = set.add_files(
            FileCategory::OriginalPhoto,
            vec![local("new.jpg", "image/jpeg"), local("PHOTO.JPG", "image/jpeg")],
        );
        assert!(matches!(result, Err(Error::DuplicateFile(_))));
        // Unchanged: the clean candidate from the batch was not kept either.
        assert_eq!(set.count(FileCategory::OriginalPhoto), 1);
    }

    #[test]
    fn duplicate_check_is_per_category() {
        let mut set = AttachmentSet::new();
        set.add_files(FileCategory::OriginalPhoto, vec![local("photo.jpg", "image/jpeg")])
            .unwrap();
        set.add_files(FileCategory::RenovationPhoto, vec![local("photo.jpg", "image/jpeg")])
            .unwrap();
        assert_eq!(set.total(), 2);
    }

    #[test]
    fn duplicate_check_spans_persisted_entries() {
        let mut set = AttachmentSet::new();
        set.load_existing(
            FileCategory::Supporting,
            &[remote(FileCategory::Supporting, "slo.pdf", "https://x/slo.pdf")],
            true,
        );
        let result = set.add_files(FileCategory::Supporting, vec![local("SLO.pdf", "application/pdf")]);
        assert!(result.is_err());
        assert_eq!(set.count(FileCategory::Supporting), 1);
    }

    #[test]
    fn duplicates_inside_one_batch_are_rejected() {
        let mut set = AttachmentSet::new();
        let result = set.add_files(
            FileCategory::Civil,
            vec![local("a.pdf", "application/pdf"), local("A.PDF", "application/pdf")],
        );
        assert!(result.is_err());
        assert_eq!(set.count(FileCategory::Civil), 0);
    }

    #[test]
    fn remove_retracts_persisted_and_pending_alike() {
        let mut set = AttachmentSet::new();
        set.load_existing(
            FileCategory::MechanicalElectrical,
            &[remote(
                FileCategory::MechanicalElectrical,
                "plan.pdf",
                "https://x/plan.pdf",
            )],
            true,
        );
        set.add_files(FileCategory::MechanicalElectrical, vec![local("rev2.pdf", "application/pdf")])
            .unwrap();

        set.remove(FileCategory::MechanicalElectrical, 0);
        let payload = set.payload();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].filename, "rev2.pdf");
        assert!(payload.iter().all(|entry| entry.filename != "plan.pdf"));

        // Out-of-range removal is a no-op.
        set.remove(FileCategory::MechanicalElectrical, 9);
        assert_eq!(set.count(FileCategory::MechanicalElectrical), 1);
    }

    #[test]
    fn load_existing_round_trips_through_payload() {
        let mut set = AttachmentSet::new();
        set.load_existing(
            FileCategory::MechanicalElectrical,
            &[remote(
                FileCategory::MechanicalElectrical,
                "plan.pdf",
                "https://files.example/plan.pdf",
            )],
            true,
        );

        let payload = set.payload();
        assert_eq!(
            payload,
            vec![FilePayload {
                category: "me".to_string(),
                filename: "plan.pdf".to_string(),
                url: Some("https://files.example/plan.pdf".to_string()),
                keep_existing: Some(true),
                mime_type: None,
                data: None,
            }]
        );
    }

    #[test]
    fn load_existing_reset_replaces_and_append_extends() {
        let mut set = AttachmentSet::new();
        set.load_existing(
            FileCategory::Supporting,
            &[remote(FileCategory::Supporting, "old.pdf", "https://x/old.pdf")],
            true,
        );
        set.load_existing(
            FileCategory::Supporting,
            &[remote(FileCategory::Supporting, "extra.pdf", "https://x/extra.pdf")],
            false,
        );
        assert_eq!(set.count(FileCategory::Supporting), 2);

        set.load_existing(
            FileCategory::Supporting,
            &[remote(FileCategory::Supporting, "only.pdf", "https://x/only.pdf")],
            true,
        );
        assert_eq!(set.count(FileCategory::Supporting), 1);
        assert_eq!(set.entries(FileCategory::Supporting)[0].filename(), "only.pdf");
    }

    #[test]
    fn payload_serializes_wire_field_names() {
        let mut set = AttachmentSet::new();
        set.load_existing(
            FileCategory::OriginalPhoto,
            &[remote(FileCategory::OriginalPhoto, "a.jpg", "https://x/a.jpg")],
            true,
        );
        set.add_files(FileCategory::Supporting, vec![local("b.pdf", "application/pdf")])
            .unwrap();

        let json = serde_json::to_value(set.payload()).unwrap();
        assert_eq!(json[0]["keepExisting"], true);
        assert!(json[0].get("data").is_none());
        assert_eq!(json[1]["type"], "application/pdf");
        assert!(json[1].get("keepExisting").is_none());
    }

    #[test]
    fn clear_drops_everything() {
        let mut set = AttachmentSet::new();
        set.add_files(FileCategory::Civil, vec![local("a.pdf", "application/pdf")])
            .unwrap();
        set.clear();
        assert_eq!(set.total(), 0);
        assert!(set.payload().is_empty());
    }

    #[test]
    fn image_kind_follows_mime_for_pending_and_extension_for_persisted() {
        let pending = AttachmentEntry::Pending {
            filename: "noext".to_string(),
            mime_type: "image/png".to_string(),
            bytes: vec![],
        };
        assert!(pending.is_image());
        let persisted = AttachmentEntry::Persisted {
            filename: "scan.BMP".to_string(),
            url: "https://x/scan.BMP".to_string(),
        };
        assert!(persisted.is_image());
    }
}
