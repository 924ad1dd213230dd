use serde::{Deserialize, Serialize};

use crate::errors::{ApiError, ApiResult};

const fn default_success() -> bool {
    true
}

/// Envelope wrapped around every OmniAdly API payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload.
    ///
    /// # Errors
    /// [`ApiError::Rejected`] when the envelope reports failure, or
    /// [`ApiError::Decode`] when it carries no data.
    pub fn into_data(self) -> ApiResult<T> {
        self.into_data_or("Request failed")
    }

    /// Like [`ApiResponse::into_data`], with `fallback` as the rejection
    /// message when the server gave none.
    ///
    /// # Errors
    /// See [`ApiResponse::into_data`].
    pub fn into_data_or(self, fallback: &str) -> ApiResult<T> {
        if !self.success {
            let message = if self.message.is_empty() {
                self.error
                    .filter(|error| !error.is_empty())
                    .unwrap_or_else(|| fallback.to_string())
            } else {
                self.message
            };
            return Err(ApiError::Rejected { message });
        }
        self.data
            .ok_or_else(|| ApiError::Decode("response envelope carried no data".to_string()))
    }
}

/// Server-side page of results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub has_previous_page: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwraps_successful_payload() {
        let envelope: ApiResponse<Vec<u32>> = serde_json::from_value(json!({
            "success": true,
            "message": "OK",
            "statusCode": 200,
            "data": [1, 2, 3],
            "timestamp": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(envelope.into_data().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_failed_envelope_surfaces_message() {
        let envelope: ApiResponse<u32> = serde_json::from_value(json!({
            "success": false,
            "message": "Invalid email or password",
            "statusCode": 400
        }))
        .unwrap();
        assert_eq!(
            envelope.into_data(),
            Err(ApiError::Rejected {
                message: "Invalid email or password".into()
            })
        );
    }

    #[test]
    fn test_silent_rejection_uses_fallback() {
        let envelope: ApiResponse<u32> =
            serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(
            envelope.into_data_or("Login failed"),
            Err(ApiError::Rejected {
                message: "Login failed".into()
            })
        );
    }

    #[test]
    fn test_missing_data_is_a_decode_error() {
        let envelope: ApiResponse<u32> = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(envelope.into_data(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_paginated_fields_default() {
        let page: PaginatedResponse<u32> =
            serde_json::from_value(json!({ "data": [4, 5] })).unwrap();
        assert_eq!(page.data, vec![4, 5]);
        assert_eq!(page.total_count, 0);
        assert!(!page.has_next_page);
    }
}
