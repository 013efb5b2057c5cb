use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};
use validator::ValidationError;

pub mod announcement_schema;
pub mod auth_schema;
pub mod contact_schema;
pub mod document_schema;
pub mod hotline_schema;
pub mod notification_schema;
pub mod profile_schema;
pub mod service_schema;
pub mod thread_schema;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+63|0)[0-9][0-9\-\s]{6,11}$").unwrap());

/// Philippine landline/mobile formats: `+63` or `0` prefix followed by 7-12
/// digits, dashes and spaces allowed.
pub fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(value) {
        return Ok(());
    }

    let mut error = ValidationError::new("phone_format");
    error.message = Some("Invalid contact number format".into());
    Err(error)
}

/// Accepts either a real JSON array or a pre-stringified one. Several legacy
/// clients send `attachments_json`/`requirements_list` as an opaque string;
/// a malformed string is a deserialization error, not an empty list.
pub fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrRaw {
        List(Vec<String>),
        Raw(String),
    }

    match Option::<ListOrRaw>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(ListOrRaw::List(list)) => Ok(list),
        Some(ListOrRaw::Raw(raw)) if raw.is_empty() => Ok(Vec::new()),
        Some(ListOrRaw::Raw(raw)) => {
            serde_json::from_str(&raw).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_string_list")]
        items: Vec<String>,
    }

    #[test]
    fn phone_validation_accepts_local_and_international_forms() {
        assert!(validate_phone_number("09171234567").is_ok());
        assert!(validate_phone_number("+639171234567").is_ok());
        assert!(validate_phone_number("02-8888-1234").is_ok());
        assert!(validate_phone_number("12345").is_err());
        assert!(validate_phone_number("hotline").is_err());
    }

    #[test]
    fn string_list_accepts_array_or_encoded_string() {
        let from_array: Holder =
            serde_json::from_str(r#"{"items": ["a.pdf", "b.pdf"]}"#).unwrap();
        assert_eq!(from_array.items, vec!["a.pdf", "b.pdf"]);

        let from_raw: Holder =
            serde_json::from_str(r#"{"items": "[\"a.pdf\"]"}"#).unwrap();
        assert_eq!(from_raw.items, vec!["a.pdf"]);

        let missing: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert!(missing.items.is_empty());

        let null: Holder = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(null.items.is_empty());
    }

    #[test]
    fn corrupt_encoded_list_is_an_error_not_an_empty_list() {
        let result = serde_json::from_str::<Holder>(r#"{"items": "not-json"}"#);
        assert!(result.is_err());
    }
}
