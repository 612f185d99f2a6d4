use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope returned by every endpoint
///
/// `data` is always present (`null` on failures). `count` is only emitted for
/// list-shaped payloads and `error` only when `success` is false.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            error: None,
        }
    }

    pub fn with_count(data: T, count: usize) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: Some(count),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            count: None,
            error: Some(message.into()),
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wrap a list, filling `count` from its length
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self::with_count(items, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_envelope_includes_count() {
        let value = serde_json::to_value(ApiResponse::list(vec!["a", "b"])).unwrap();
        assert_eq!(
            value,
            json!({ "success": true, "data": ["a", "b"], "count": 2 })
        );
    }

    #[test]
    fn test_single_envelope_omits_count_and_error() {
        let value = serde_json::to_value(ApiResponse::success(7)).unwrap();
        assert_eq!(value, json!({ "success": true, "data": 7 }));
    }

    #[test]
    fn test_error_envelope() {
        let value = serde_json::to_value(ApiResponse::<()>::error("Guide not found")).unwrap();
        assert_eq!(
            value,
            json!({ "success": false, "data": null, "error": "Guide not found" })
        );
    }
}
