use serde::{Serialize, Deserialize};
use validator::Validate;

/// Body of `POST /api/auth/login`.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Enter your username"))]
    pub username: String,
    #[validate(length(min = 1, message = "Enter your password"))]
    pub password: String,
}

/// Body of `POST /api/auth/register`. Limits match what the service enforces
/// so the round trip is saved for obviously bad input.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 3, message = "Username must be at least 3 characters"),
        custom(
            function = "crate::validation::validate_username_chars",
            message = "Username may only contain letters, numbers, and underscores"
        )
    )]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Successful login/register answer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub role: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Error body the auth endpoints return on failure.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiError {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiError {
    /// Whichever message field the service filled in, or a fallback.
    pub fn text(&self, fallback: &str) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Body of `GET /api/v1/users/me`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_enforces_minimum_lengths() {
        let bad = RegisterRequest {
            username: "ab".to_string(),
            password: "secret".to_string(),
        };
        assert!(bad.validate().is_err());

        let ok = RegisterRequest {
            username: "anna".to_string(),
            password: "secret".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn api_error_prefers_the_error_field() {
        let err = ApiError {
            error: Some("bad credentials".to_string()),
            message: Some("ignored".to_string()),
        };
        assert_eq!(err.text("fallback"), "bad credentials");

        let empty = ApiError { error: None, message: None };
        assert_eq!(empty.text("fallback"), "fallback");
    }
}
