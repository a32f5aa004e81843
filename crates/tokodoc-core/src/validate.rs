//! Field validation and progressive input masking for the edit form

use std::sync::LazyLock;

use regex::Regex;

static STORE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{4}$").expect("valid regex"));
static STORE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s]+$").expect("valid regex"));
static AREA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3},\d{2}$").expect("valid regex"));

/// The user-editable form fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub store_code: String,
    pub store_name: String,
    pub sales_area: String,
    pub parking_area: String,
    pub warehouse_area: String,
}

/// Per-field validation messages; empty means the form may submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub store_code: Option<String>,
    pub store_name: Option<String>,
    pub sales_area: Option<String>,
    pub parking_area: Option<String>,
    pub warehouse_area: Option<String>,
}

impl FieldErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.store_code.is_none()
            && self.store_name.is_none()
            && self.sales_area.is_none()
            && self.parking_area.is_none()
            && self.warehouse_area.is_none()
    }
}

/// Validate every field at once; all errors are reported together.
#[must_use]
pub fn validate_fields(fields: &FormFields) -> FieldErrors {
    let area_error = || "Use the form 120,50 / 80,00 / 1,00".to_string();
    FieldErrors {
        store_code: (!STORE_CODE_RE.is_match(&fields.store_code))
            .then(|| "Store code must be exactly 4 alphanumeric characters".to_string()),
        store_name: (!STORE_NAME_RE.is_match(&fields.store_name))
            .then(|| "Store name allows letters, digits and spaces only".to_string()),
        sales_area: (!AREA_RE.is_match(&fields.sales_area)).then(area_error),
        parking_area: (!AREA_RE.is_match(&fields.parking_area)).then(area_error),
        warehouse_area: (!AREA_RE.is_match(&fields.warehouse_area)).then(area_error),
    }
}

/// Mask a store code as typed: uppercase, alphanumeric only, 4 chars max.
#[must_use]
pub fn mask_store_code(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .take(4)
        .collect()
}

/// Mask a store name as typed: uppercase, letters/digits/spaces only.
#[must_use]
pub fn mask_store_name(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Mask an area as typed: digits and one comma, 3 integer digits,
/// 2 fraction digits; any further commas are dropped.
#[must_use]
pub fn mask_area(input: &str) -> String {
    let clean: String = input.chars().filter(|c| c.is_ascii_digit() || *c == ',').collect();
    let mut parts = clean.splitn(2, ',');
    let int_part: String = parts.next().unwrap_or("").chars().take(3).collect();
    match parts.next() {
        Some(rest) => {
            let frac: String = rest.chars().filter(char::is_ascii_digit).take(2).collect();
            format!("{int_part},{frac}")
        }
        None => int_part,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_fields() -> FormFields {
        FormFields {
            store_code: "AB12".to_string(),
            store_name: "ALFAMART SUDIRMAN".to_string(),
            sales_area: "120,50".to_string(),
            parking_area: "80,00".to_string(),
            warehouse_area: "1,00".to_string(),
        }
    }

    #[test]
    fn accepts_a_fully_valid_form() {
        assert!(validate_fields(&valid_fields()).is_empty());
    }

    #[test]
    fn store_code_must_be_exactly_four_alphanumerics() {
        for bad in ["AB1", "AB123", "AB-1", "", "ab 1"] {
            let fields = FormFields {
                store_code: bad.to_string(),
                ..valid_fields()
            };
            assert!(validate_fields(&fields).store_code.is_some(), "accepted {bad:?}");
        }
        let fields = FormFields {
            store_code: "ab12".to_string(),
            ..valid_fields()
        };
        assert!(validate_fields(&fields).store_code.is_none());
    }

    #[test]
    fn area_pattern_is_one_to_three_int_digits_and_two_fraction_digits() {
        for (value, ok) in [
            ("120,50", true),
            ("1,00", true),
            ("999,99", true),
            ("1200,50", false),
            ("12,5", false),
            ("12", false),
            ("", false),
            ("12,505", false),
        ] {
            let fields = FormFields {
                sales_area: value.to_string(),
                ..valid_fields()
            };
            assert_eq!(validate_fields(&fields).sales_area.is_none(), ok, "value {value:?}");
        }
    }

    #[test]
    fn empty_store_name_is_rejected() {
        let fields = FormFields {
            store_name: String::new(),
            ..valid_fields()
        };
        assert!(validate_fields(&fields).store_name.is_some());
    }

    #[test]
    fn all_errors_are_reported_together() {
        let errors = validate_fields(&FormFields::default());
        assert!(errors.store_code.is_some());
        assert!(errors.store_name.is_some());
        assert!(errors.sales_area.is_some());
        assert!(errors.parking_area.is_some());
        assert!(errors.warehouse_area.is_some());
    }

    #[test]
    fn store_code_mask_uppercases_and_caps_length() {
        assert_eq!(mask_store_code("ab-12x"), "AB12");
        assert_eq!(mask_store_code("a b"), "AB");
    }

    #[test]
    fn store_name_mask_strips_punctuation() {
        assert_eq!(mask_store_name("alfamart, sudirman!"), "ALFAMART SUDIRMAN");
    }

    #[test]
    fn area_mask_caps_digits_and_drops_extra_commas() {
        assert_eq!(mask_area("1234,567"), "123,56");
        assert_eq!(mask_area("12a,5b"), "12,5");
        assert_eq!(mask_area("1,2,3"), "1,23");
        assert_eq!(mask_area("120"), "120");
        assert_eq!(mask_area(",50"), ",50");
    }
}
