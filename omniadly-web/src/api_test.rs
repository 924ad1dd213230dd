//! Tests for the API client helpers
//!
//! Covers URL joining and envelope decoding, which run without a browser.

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use shared::ApiError;
    use shared::auth::MemorySessionStore;
    use shared::models::{AdminUser, User};

    use crate::api::{AdminClient, decode_envelope, or_empty};

    fn client(base: &str) -> AdminClient {
        AdminClient::new(base, Rc::new(MemorySessionStore::new()))
    }

    /// Tests that paths join the base URL with exactly one slash
    #[test]
    fn test_api_url_joins_paths() {
        let client = client("http://localhost:5283/api/");
        assert_eq!(
            client.api_url("/users/profile/me"),
            "http://localhost:5283/api/users/profile/me"
        );
        assert_eq!(
            client.api_url("payment/payments"),
            "http://localhost:5283/api/payment/payments"
        );
    }

    /// Tests decoding of a current-profile envelope with a numeric role
    #[test]
    fn test_decode_profile_envelope() {
        let body = r#"{
            "success": true,
            "message": "OK",
            "statusCode": 200,
            "data": { "id": "a-1", "email": "root@omniadly.io", "role": 2 },
            "timestamp": "2025-01-01T00:00:00Z"
        }"#;
        let user: AdminUser = decode_envelope(body).unwrap().into_data().unwrap();
        assert!(user.role.is_admin());
        assert_eq!(user.email, "root@omniadly.io");
    }

    /// Tests that a body that is not JSON is a decode error
    #[test]
    fn test_decode_rejects_html() {
        let result = decode_envelope::<AdminUser>("<html>Bad Gateway</html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    /// Tests that a rejected login surfaces the server message
    #[test]
    fn test_rejected_envelope_message() {
        let body = r#"{ "success": false, "message": "Invalid email or password" }"#;
        let result = decode_envelope::<AdminUser>(body)
            .unwrap()
            .into_data_or("Login failed");
        assert_eq!(
            result,
            Err(ApiError::Rejected {
                message: "Invalid email or password".to_string()
            })
        );
    }

    /// Tests that failed list loads degrade to an empty list
    #[test]
    fn test_or_empty() {
        let failed: Result<Vec<User>, ApiError> = Err(ApiError::Network("offline".into()));
        assert!(or_empty(failed, "users").is_empty());

        let loaded = Ok(vec![1, 2, 3]);
        assert_eq!(or_empty(loaded, "numbers"), vec![1, 2, 3]);
    }
}
