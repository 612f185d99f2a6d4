//! Codec for list fields persisted as JSON text columns.
//!
//! Writes always go through [`encode`], so stored values are well-formed JSON
//! arrays. Reads go through [`decode`], which never fails: a NULL, blank or
//! malformed column reads back as an empty list.

use serde::{de::DeserializeOwned, Serialize};

use crate::core::error::{AppError, Result};

/// Serialize a list into the text stored in the column
pub fn encode<T: Serialize>(items: &[T]) -> Result<String> {
    serde_json::to_string(items)
        .map_err(|e| AppError::Internal(format!("Failed to encode list field: {}", e)))
}

/// Parse a stored column back into a list
///
/// `field` only feeds the warning emitted for malformed content.
pub fn decode<T: DeserializeOwned>(field: &str, raw: Option<&str>) -> Vec<T> {
    let Some(text) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    match serde_json::from_str::<Option<Vec<T>>>(text) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Malformed JSON in list field '{}': {}", field, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Step {
        title: String,
        description: String,
    }

    #[test]
    fn test_encode_strings() {
        let encoded = encode(&["Spudger".to_string(), "Suction Handle".to_string()]).unwrap();
        assert_eq!(encoded, r#"["Spudger","Suction Handle"]"#);
    }

    #[test]
    fn test_encode_empty_is_empty_array() {
        let encoded = encode::<String>(&[]).unwrap();
        assert_eq!(encoded, "[]");
    }

    #[test]
    fn test_decode_objects() {
        let steps: Vec<Step> = decode(
            "steps",
            Some(r#"[{"title":"Power off","description":"Hold the button"}]"#),
        );
        assert_eq!(
            steps,
            vec![Step {
                title: "Power off".to_string(),
                description: "Hold the button".to_string(),
            }]
        );
    }

    #[test]
    fn test_decode_missing_or_blank_is_empty() {
        assert!(decode::<String>("tools_required", None).is_empty());
        assert!(decode::<String>("tools_required", Some("")).is_empty());
        assert!(decode::<String>("tools_required", Some("   ")).is_empty());
    }

    #[test]
    fn test_decode_json_null_is_empty() {
        assert!(decode::<String>("parts_required", Some("null")).is_empty());
    }

    #[test]
    fn test_decode_malformed_falls_back_to_empty() {
        assert!(decode::<String>("parts_required", Some("[\"Battery\"")).is_empty());
        assert!(decode::<Step>("steps", Some(r#"["not an object"]"#)).is_empty());
    }
}
