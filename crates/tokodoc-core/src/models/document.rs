//! Store document model and list helpers

use serde::{Deserialize, Serialize};

/// Rows shown per page in the document table.
pub const PAGE_SIZE: usize = 5;

/// One store's stored record, as the backend serializes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    /// 4-character alphanumeric store code, unique and immutable.
    #[serde(rename = "kode_toko", default)]
    pub store_code: String,
    /// Uppercase store name.
    #[serde(rename = "nama_toko", default)]
    pub store_name: String,
    /// Owning branch; set from the session, never user-edited.
    #[serde(rename = "cabang", default)]
    pub branch: String,
    /// Sales area, fixed two-decimal comma string ("120,50").
    #[serde(rename = "luas_sales", default)]
    pub sales_area: String,
    /// Parking area.
    #[serde(rename = "luas_parkir", default)]
    pub parking_area: String,
    /// Warehouse area.
    #[serde(rename = "luas_gudang", default)]
    pub warehouse_area: String,
    /// Comma-separated persisted attachment entries (see models::attachment).
    #[serde(rename = "file_links", default, skip_serializing_if = "Option::is_none")]
    pub file_links: Option<String>,
    /// Backend folder link for the whole document, if any.
    #[serde(rename = "folder_link", default, skip_serializing_if = "Option::is_none")]
    pub folder_link: Option<String>,
}

impl StoreDocument {
    /// Case-insensitive match against store code or name.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.store_code.to_lowercase().contains(&term)
            || self.store_name.to_lowercase().contains(&term)
    }
}

/// Display formatting for area values coming back from the backend.
///
/// The backend may return the raw digit string ("12050") or an already
/// formatted value; either way the result is `int,2-digit-fraction` with the
/// last two digits as the fraction ("120,50", "0,05").
#[must_use]
pub fn format_area(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return "-".to_string();
    }
    if digits.len() <= 2 {
        return format!("0,{digits:0>2}");
    }
    let (int_part, frac_part) = digits.split_at(digits.len() - 2);
    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    format!("{int_part},{frac_part}")
}

/// Client-side filter over store code and name.
#[must_use]
pub fn filter_documents(docs: &[StoreDocument], term: &str) -> Vec<StoreDocument> {
    docs.iter().filter(|doc| doc.matches(term)).cloned().collect()
}

/// Number of pages for a filtered count; an empty list has zero pages.
#[must_use]
pub const fn page_count(filtered: usize) -> usize {
    filtered.div_ceil(PAGE_SIZE)
}

/// The slice of documents visible on a 1-based page.
#[must_use]
pub fn page_slice(docs: &[StoreDocument], page: usize) -> &[StoreDocument] {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    if start >= docs.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(docs.len());
    &docs[start..end]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn doc(code: &str, name: &str) -> StoreDocument {
        StoreDocument {
            store_code: code.to_string(),
            store_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn deserializes_backend_row() {
        let row: StoreDocument = serde_json::from_str(
            r#"{"kode_toko":"AB12","nama_toko":"ALFAMART SUDIRMAN","cabang":"BANDUNG",
                "luas_sales":"120,50","luas_parkir":"80,00","luas_gudang":"30,25",
                "file_links":"fotoAsal|a.jpg|https://x/a.jpg"}"#,
        )
        .unwrap();
        assert_eq!(row.store_code, "AB12");
        assert_eq!(row.branch, "BANDUNG");
        assert_eq!(row.file_links.as_deref(), Some("fotoAsal|a.jpg|https://x/a.jpg"));
    }

    #[test]
    fn filter_matches_code_and_name_case_insensitively() {
        let docs = vec![doc("AB12", "ALFAMART SUDIRMAN"), doc("CD34", "ALFAMART DAGO")];
        assert_eq!(filter_documents(&docs, "ab1").len(), 1);
        assert_eq!(filter_documents(&docs, "alfamart").len(), 2);
        assert_eq!(filter_documents(&docs, "dago").len(), 1);
        assert_eq!(filter_documents(&docs, "zz").len(), 0);
    }

    #[test]
    fn empty_term_matches_everything() {
        let docs = vec![doc("AB12", "ONE"), doc("CD34", "TWO")];
        assert_eq!(filter_documents(&docs, "").len(), 2);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(5), 1);
        assert_eq!(page_count(6), 2);
        assert_eq!(page_count(11), 3);
    }

    #[test]
    fn page_slice_bounds() {
        let docs: Vec<StoreDocument> = (0..7).map(|i| doc(&format!("A{i:03}"), "X")).collect();
        assert_eq!(page_slice(&docs, 1).len(), 5);
        assert_eq!(page_slice(&docs, 2).len(), 2);
        assert_eq!(page_slice(&docs, 2)[0].store_code, "A005");
        assert!(page_slice(&docs, 3).is_empty());
        assert!(page_slice(&[], 1).is_empty());
    }

    #[test]
    fn format_area_pads_and_splits() {
        assert_eq!(format_area("12050"), "120,50");
        assert_eq!(format_area("5"), "0,05");
        assert_eq!(format_area("80,00"), "80,00");
        assert_eq!(format_area(""), "-");
        assert_eq!(format_area("007"), "0,07");
    }
}
