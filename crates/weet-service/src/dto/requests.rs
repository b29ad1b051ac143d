//! Request DTOs for API endpoints
//!
//! Clients submit their token inside the JSON body as `_token`, so every
//! authenticated request DTO carries a `BodyToken`. All request DTOs
//! implement `Deserialize`; those with shape constraints also implement
//! `Validate`.

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

/// Token field as submitted by clients.
///
/// Arbitrary JSON is tolerated at parse time so that a missing or
/// non-string `_token` falls through the signed-in gate (401) instead of
/// surfacing as a body parse error (400).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct BodyToken(Option<Value>);

impl BodyToken {
    /// The token string, when one was submitted and it is a string
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_ref().and_then(Value::as_str)
    }

    /// Build a token field from a string (test helper and internal use)
    pub fn from_token(token: impl Into<String>) -> Self {
        Self(Some(Value::String(token.into())))
    }
}

// ============================================================================
// Account Requests
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LogInRequest {
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub password: String,
}

/// Body carrying only the authentication token
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenRequest {
    #[serde(rename = "_token", default)]
    pub token: BodyToken,
}

/// Profile update request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(rename = "_token", default)]
    pub token: BodyToken,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub old_password: String,
    pub new_password: Option<String>,
    #[serde(default)]
    pub email: String,
    pub user_description: Option<String>,
    pub profile_picture: Option<String>,
    pub banner_picture: Option<String>,
}

// ============================================================================
// Weet Requests
// ============================================================================

/// Create weet request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWeetRequest {
    #[serde(rename = "_token", default)]
    pub token: BodyToken,

    #[validate(length(min = 1, max = 250, message = "Weet must be 1-250 characters"))]
    #[serde(default)]
    pub weet: String,
}

/// Edit weet request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EditWeetRequest {
    #[serde(rename = "_token", default)]
    pub token: BodyToken,

    #[validate(length(min = 1, max = 250, message = "Weet must be 1-250 characters"))]
    #[serde(default)]
    pub weet: String,
}

// ============================================================================
// Validation Requests
// ============================================================================

/// Sign-up validation request; fields default to empty so a missing field
/// still produces a per-field report rather than a parse error
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateSignUpRequest {
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
}

/// Update-profile validation request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateUpdateProfileRequest {
    #[serde(rename = "_token", default)]
    pub token: BodyToken,
    #[serde(default)]
    pub username: String,
    pub old_password: Option<String>,
    pub new_password: Option<String>,
    #[serde(default)]
    pub email: String,
    pub user_description: Option<String>,
    pub profile_picture: Option<String>,
    pub banner_picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_token_missing() {
        let request: TokenRequest = serde_json::from_str("{}").unwrap();
        assert!(request.token.as_str().is_none());
    }

    #[test]
    fn test_body_token_non_string() {
        let request: TokenRequest = serde_json::from_str(r#"{"_token": 42}"#).unwrap();
        assert!(request.token.as_str().is_none());
    }

    #[test]
    fn test_body_token_string() {
        let request: TokenRequest = serde_json::from_str(r#"{"_token": "abc"}"#).unwrap();
        assert_eq!(request.token.as_str(), Some("abc"));
    }

    #[test]
    fn test_update_profile_camel_case() {
        let request: UpdateProfileRequest = serde_json::from_str(
            r#"{
                "_token": "abc",
                "username": "test username",
                "oldPassword": "Oldpass1!",
                "newPassword": "Newpass1!",
                "email": "test@example.com",
                "userDescription": "hi",
                "profilePicture": "https://cdn.example.com/a.png",
                "bannerPicture": null
            }"#,
        )
        .unwrap();
        assert_eq!(request.old_password, "Oldpass1!");
        assert_eq!(request.new_password.as_deref(), Some("Newpass1!"));
        assert_eq!(request.user_description.as_deref(), Some("hi"));
        assert!(request.banner_picture.is_none());
    }

    #[test]
    fn test_create_weet_length_bounds() {
        use validator::Validate;

        let request = CreateWeetRequest {
            token: BodyToken::from_token("abc"),
            weet: String::new(),
        };
        assert!(request.validate().is_err());

        let request = CreateWeetRequest {
            token: BodyToken::from_token("abc"),
            weet: "x".repeat(251),
        };
        assert!(request.validate().is_err());

        let request = CreateWeetRequest {
            token: BodyToken::from_token("abc"),
            weet: "a perfectly fine weet".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
