//! Credential validation for the account flow.
//!
//! Pure functions, no side effects. All validation runs before any identity
//! provider call is made, so a failed check never leaves the process.

use std::sync::OnceLock;

use regex::Regex;

/// Anchored email pattern. Matching is case-insensitive by construction
/// (both letter cases appear in every class).
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern must compile"))
}

/// A local validation failure. Recovered by showing a message and leaving
/// the form editable; no provider call happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required inputs are blank.
    EmptyField,
    /// The registration email does not match the expected shape.
    InvalidEmailFormat,
}

impl ValidationError {
    /// Returns the user-visible message for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::EmptyField => "Please, complete all fields.",
            ValidationError::InvalidEmailFormat => "Please, enter a valid email.",
        }
    }
}

/// Credentials accepted by `validate_registration`, passed through unmodified.
///
/// The name stays local to the app; only email and password are ever sent
/// to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Credentials accepted by `validate_login`, passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Validates registration input.
///
/// Fields are checked for the exact empty string (no trimming), then the
/// email is matched against the anchored pattern.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
) -> Result<RegistrationCredentials, ValidationError> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ValidationError::EmptyField);
    }

    if !email_regex().is_match(email) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    Ok(RegistrationCredentials {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Validates login input.
///
/// Login only checks for blank fields; malformed emails are left for the
/// provider to reject.
pub fn validate_login(email: &str, password: &str) -> Result<LoginCredentials, ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::EmptyField);
    }

    Ok(LoginCredentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_rejects_any_empty_field() {
        let cases = [
            ("", "a@b.com", "x"),
            ("Ana", "", "x"),
            ("Ana", "a@b.com", ""),
            ("", "", ""),
        ];
        for (name, email, password) in cases {
            assert_eq!(
                validate_registration(name, email, password),
                Err(ValidationError::EmptyField),
                "expected EmptyField for {name:?}/{email:?}/{password:?}"
            );
        }
    }

    #[test]
    fn test_registration_rejects_malformed_emails() {
        let bad = [
            "not-an-email",
            "missing-at.example.com",
            "user@",
            "@example.com",
            "user@example",
            "user@example.c",
            "user@exam ple.com",
            "user@example.com extra",
            " user@example.com",
        ];
        for email in bad {
            assert_eq!(
                validate_registration("Ana", email, "secret123"),
                Err(ValidationError::InvalidEmailFormat),
                "expected InvalidEmailFormat for {email:?}"
            );
        }
    }

    #[test]
    fn test_registration_accepts_valid_emails() {
        let good = [
            "ana@example.com",
            "ANA@EXAMPLE.COM",
            "first.last+tag@sub-domain.example.org",
            "user_%99@a.bc",
        ];
        for email in good {
            let creds = validate_registration("Ana", email, "secret123")
                .unwrap_or_else(|e| panic!("expected success for {email:?}, got {e:?}"));
            assert_eq!(creds.email, email);
        }
    }

    #[test]
    fn test_registration_passes_fields_through_unmodified() {
        let creds = validate_registration("  Ana  ", "ana@example.com", " secret ").unwrap();
        assert_eq!(creds.name, "  Ana  ");
        assert_eq!(creds.password, " secret ");
    }

    #[test]
    fn test_registration_is_idempotent() {
        let first = validate_registration("Ana", "not-an-email", "x");
        let second = validate_registration("Ana", "not-an-email", "x");
        assert_eq!(first, second);

        let first = validate_registration("Ana", "ana@example.com", "x");
        let second = validate_registration("Ana", "ana@example.com", "x");
        assert_eq!(first, second);
    }

    #[test]
    fn test_login_checks_emptiness_only() {
        assert_eq!(
            validate_login("", "secret"),
            Err(ValidationError::EmptyField)
        );
        assert_eq!(
            validate_login("ana@example.com", ""),
            Err(ValidationError::EmptyField)
        );

        // Login intentionally skips the email-format check.
        let creds = validate_login("not-an-email", "secret").unwrap();
        assert_eq!(creds.email, "not-an-email");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::EmptyField.message(),
            "Please, complete all fields."
        );
        assert_eq!(
            ValidationError::InvalidEmailFormat.message(),
            "Please, enter a valid email."
        );
    }
}
