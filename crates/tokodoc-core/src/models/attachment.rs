//! Attachment categories and remote file reference parsing
//!
//! Persisted attachments arrive from the backend as a comma-separated
//! `file_links` string. Each entry follows one of three forms:
//!
//! ```text
//! entry := category "|" filename "|" url
//!        | filename "|" url
//!        | url
//! ```
//!
//! Unknown category tokens fall back to [`FileCategory::Supporting`], and a
//! missing filename falls back to the last path segment of the URL.

use std::fmt;

use serde::{Deserialize, Serialize};

/// File extensions rendered as image previews.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Closed set of attachment categories for a store document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileCategory {
    /// Photos of the original store condition (`fotoAsal`)
    OriginalPhoto,
    /// Photos of the renovated condition (`fotoRenovasi`)
    RenovationPhoto,
    /// Mechanical/electrical drawings (`me`)
    MechanicalElectrical,
    /// Civil engineering drawings (`sipil`)
    Civil,
    /// Initial sketches (`sketsaAwal`)
    InitialSketch,
    /// Supporting documents, also the fallback category (`pendukung`)
    Supporting,
}

impl FileCategory {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::OriginalPhoto,
        Self::RenovationPhoto,
        Self::MechanicalElectrical,
        Self::Civil,
        Self::InitialSketch,
        Self::Supporting,
    ];

    /// The token used on the wire and in `file_links` entries.
    #[must_use]
    pub const fn wire_token(self) -> &'static str {
        match self {
            Self::OriginalPhoto => "fotoAsal",
            Self::RenovationPhoto => "fotoRenovasi",
            Self::MechanicalElectrical => "me",
            Self::Civil => "sipil",
            Self::InitialSketch => "sketsaAwal",
            Self::Supporting => "pendukung",
        }
    }

    /// Human-readable label for upload rows.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OriginalPhoto => "Original condition photos (JPEG/PNG)",
            Self::RenovationPhoto => "Renovation photos (JPEG/PNG)",
            Self::MechanicalElectrical => "ME drawings (PDF, AutoCAD, JPEG)",
            Self::Civil => "Civil drawings (PDF, AutoCAD, JPEG)",
            Self::InitialSketch => "Initial sketch (PDF, AutoCAD, JPEG)",
            Self::Supporting => "Supporting documents (PDF/JPEG/PNG)",
        }
    }

    /// Parse a wire token; anything unrecognized is `Supporting`.
    #[must_use]
    pub fn from_wire_token(token: &str) -> Self {
        match token.trim() {
            "fotoAsal" => Self::OriginalPhoto,
            "fotoRenovasi" => Self::RenovationPhoto,
            "me" => Self::MechanicalElectrical,
            "sipil" => Self::Civil,
            "sketsaAwal" => Self::InitialSketch,
            _ => Self::Supporting,
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_token())
    }
}

/// One file already stored server-side, referenced by URL only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFileRef {
    pub category: FileCategory,
    pub filename: String,
    pub url: String,
}

impl RemoteFileRef {
    /// Whether the filename extension is in the image set.
    #[must_use]
    pub fn is_image(&self) -> bool {
        filename_is_image(&self.filename)
    }
}

/// Whether a filename carries an image extension.
#[must_use]
pub fn filename_is_image(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Parse a backend `file_links` value into remote references.
///
/// Blank entries are skipped. See the module docs for the entry grammar.
#[must_use]
pub fn parse_file_links(file_links: &str) -> Vec<RemoteFileRef> {
    file_links
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_entry)
        .collect()
}

fn parse_entry(entry: &str) -> RemoteFileRef {
    let parts: Vec<&str> = entry.split('|').map(str::trim).collect();
    let (category, filename, url) = match parts.as_slice() {
        [category, filename, url] => (FileCategory::from_wire_token(category), *filename, *url),
        [filename, url] => (FileCategory::Supporting, *filename, *url),
        _ => (FileCategory::Supporting, "", entry),
    };

    let filename = if filename.is_empty() {
        filename_from_url(url)
    } else {
        filename.to_string()
    };

    RemoteFileRef {
        category,
        filename,
        url: url.to_string(),
    }
}

fn filename_from_url(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url)
        .split('?')
        .next()
        .unwrap_or(url)
        .to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wire_tokens_round_trip() {
        for category in FileCategory::ALL {
            assert_eq!(FileCategory::from_wire_token(category.wire_token()), category);
        }
    }

    #[test]
    fn unknown_token_falls_back_to_supporting() {
        assert_eq!(FileCategory::from_wire_token("foto"), FileCategory::Supporting);
        assert_eq!(FileCategory::from_wire_token(""), FileCategory::Supporting);
    }

    #[test]
    fn parses_three_part_entry() {
        let refs = parse_file_links("me|plan.pdf|https://files.example/plan.pdf");
        assert_eq!(
            refs,
            vec![RemoteFileRef {
                category: FileCategory::MechanicalElectrical,
                filename: "plan.pdf".to_string(),
                url: "https://files.example/plan.pdf".to_string(),
            }]
        );
    }

    #[test]
    fn parses_two_part_and_bare_url_entries() {
        let refs = parse_file_links(
            "front.jpg|https://files.example/front.jpg, https://files.example/misc/slo.pdf",
        );
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].category, FileCategory::Supporting);
        assert_eq!(refs[0].filename, "front.jpg");
        assert_eq!(refs[1].filename, "slo.pdf");
        assert_eq!(refs[1].url, "https://files.example/misc/slo.pdf");
    }

    #[test]
    fn missing_filename_comes_from_url() {
        let refs = parse_file_links("sipil||https://files.example/denah.dwg?v=2");
        assert_eq!(refs[0].category, FileCategory::Civil);
        assert_eq!(refs[0].filename, "denah.dwg");
    }

    #[test]
    fn skips_blank_entries() {
        let refs = parse_file_links(" , ,fotoAsal|a.jpg|https://x/a.jpg,");
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn image_extension_detection_is_case_insensitive() {
        assert!(filename_is_image("FOTO.JPG"));
        assert!(filename_is_image("scan.webp"));
        assert!(!filename_is_image("plan.pdf"));
        assert!(!filename_is_image("noextension"));
    }
}
