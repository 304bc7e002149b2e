//! Data transfer objects for account endpoints.
//!
//! Fields are optional so that missing and `null` values reach the handlers,
//! which answer with their own validation messages instead of a decode error.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::domain::account::User;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request to register a user.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<SecretString>,
}

/// Request to log in. An absent or empty password selects legacy mode.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<SecretString>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Response to a successful signup.
#[derive(Debug, Clone, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl SignupResponse {
    pub fn created(user: User) -> Self {
        Self {
            success: true,
            message: "User created successfully".to_string(),
            user: Some(user),
        }
    }
}

/// Response to a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl LoginResponse {
    pub fn authenticated(token: String) -> Self {
        Self {
            success: true,
            message: "Login successful".to_string(),
            token: Some(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn signup_request_missing_fields_decode_as_none() {
        let request: SignupRequest = serde_json::from_str("{}").unwrap();
        assert!(request.username.is_none());
        assert!(request.password.is_none());
    }

    #[test]
    fn null_fields_decode_as_none() {
        let request: SignupRequest =
            serde_json::from_str(r#"{"username":"u","password":null}"#).unwrap();
        assert_eq!(request.username.as_deref(), Some("u"));
        assert!(request.password.is_none());

        let request: LoginRequest = serde_json::from_str(r#"{"username":null}"#).unwrap();
        assert!(request.username.is_none());
    }

    #[test]
    fn login_request_password_is_optional() {
        let request: LoginRequest = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert!(request.password.is_none());

        let request: LoginRequest =
            serde_json::from_str(r#"{"username":"alice","password":"secret1"}"#).unwrap();
        assert_eq!(request.password.unwrap().expose_secret(), "secret1");
    }

    #[test]
    fn request_debug_does_not_leak_password() {
        let request: SignupRequest =
            serde_json::from_str(r#"{"username":"alice","password":"secret1"}"#).unwrap();
        assert!(!format!("{:?}", request).contains("secret1"));
    }

    #[test]
    fn login_response_shape() {
        let json = serde_json::to_value(LoginResponse::authenticated("demo-token-a".into())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": true, "message": "Login successful", "token": "demo-token-a"})
        );
    }
}
