//! Wire types for the Identity Toolkit REST API.

use serde::{Deserialize, Serialize};

/// Request body shared by the signUp and signInWithPassword endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

/// Successful response from either credential endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Error envelope returned by the provider on failure.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

/// Turns a provider error code into the human-readable description shown to
/// the user. Codes sometimes arrive with a trailing explanation
/// (`"WEAK_PASSWORD : Password should be..."`); only the leading code is
/// matched. Unknown codes pass through verbatim.
pub fn describe_error_code(raw: &str) -> String {
    let code = raw.split([' ', ':']).next().unwrap_or(raw);
    match code {
        "EMAIL_EXISTS" => "The email address is already in use by another account.".to_string(),
        "INVALID_EMAIL" => "The email address is badly formatted.".to_string(),
        "OPERATION_NOT_ALLOWED" => "Password sign-in is disabled for this project.".to_string(),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "Access temporarily disabled due to many failed attempts. Try again later.".to_string()
        }
        "EMAIL_NOT_FOUND" => "There is no user record corresponding to this email.".to_string(),
        "INVALID_PASSWORD" => "The password is invalid.".to_string(),
        "INVALID_LOGIN_CREDENTIALS" => "The supplied credentials are incorrect.".to_string(),
        "USER_DISABLED" => "The user account has been disabled by an administrator.".to_string(),
        "WEAK_PASSWORD" => "The password must be 6 characters long or more.".to_string(),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_parses() {
        let body = r#"{"error":{"code":400,"message":"EMAIL_EXISTS","errors":[]}}"#;
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "EMAIL_EXISTS");
    }

    #[test]
    fn test_describe_known_codes() {
        assert_eq!(
            describe_error_code("EMAIL_EXISTS"),
            "The email address is already in use by another account."
        );
        assert_eq!(
            describe_error_code("WEAK_PASSWORD : Password should be at least 6 characters"),
            "The password must be 6 characters long or more."
        );
    }

    #[test]
    fn test_describe_unknown_code_passes_through() {
        assert_eq!(describe_error_code("QUOTA_EXCEEDED"), "QUOTA_EXCEEDED");
        assert_eq!(
            describe_error_code("invalid credentials"),
            "invalid credentials"
        );
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = CredentialRequest {
            email: "ana@example.com",
            password: "secret123",
            return_secure_token: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["email"], "ana@example.com");
        assert_eq!(json["returnSecureToken"], true);
    }
}
