//! Registration feature: form state and reducer.

use exo_core::identity::Identity;
use exo_core::validate::validate_registration;

use crate::effects::UiEffect;
use crate::events::RegistrationEvent;
use crate::state::SubmitState;

/// Transient state of the registration screen.
///
/// Created fresh whenever the screen is entered and mutated on every
/// keystroke; a new entry after leaving gets a fresh form.
#[derive(Debug, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    /// User-visible message for the last failure, if any.
    pub error: Option<String>,
    /// Set once the provider confirms the account.
    pub account_created: bool,
    /// Submission lifecycle; guards against double submits.
    pub submit: SubmitState,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Handles a registration screen event.
///
/// Submit validates locally first; the provider is only called when every
/// check passes, so a failed validation never leaves the process.
pub fn handle_event(form: &mut RegistrationForm, event: RegistrationEvent) -> Vec<UiEffect> {
    match event {
        RegistrationEvent::NameChanged(value) => {
            form.name = value;
            vec![]
        }
        RegistrationEvent::EmailChanged(value) => {
            form.email = value;
            vec![]
        }
        RegistrationEvent::PasswordChanged(value) => {
            form.password = value;
            vec![]
        }
        RegistrationEvent::Submit => {
            if form.submit.is_pending() {
                // A call is already outstanding; ignore the repeat.
                return vec![];
            }

            match validate_registration(&form.name, &form.email, &form.password) {
                Ok(creds) => {
                    form.error = None;
                    form.submit = SubmitState::Pending;
                    vec![UiEffect::CreateAccount {
                        email: creds.email,
                        password: creds.password,
                    }]
                }
                Err(err) => {
                    form.error = Some(err.message().to_string());
                    vec![]
                }
            }
        }
    }
}

/// Handles the create-account result from the provider.
///
/// Returns the identity on success so the caller can transition to Main.
/// On failure the form stays populated for correction and resubmission;
/// nothing is retried automatically.
pub fn handle_result(
    form: &mut RegistrationForm,
    result: Result<Identity, String>,
) -> Option<Identity> {
    form.submit = SubmitState::Idle;
    match result {
        Ok(identity) => {
            form.account_created = true;
            form.error = None;
            Some(identity)
        }
        Err(description) => {
            form.error = Some(format!("Error creating account: {description}"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        for event in [
            RegistrationEvent::NameChanged("Ana".to_string()),
            RegistrationEvent::EmailChanged("ana@example.com".to_string()),
            RegistrationEvent::PasswordChanged("secret123".to_string()),
        ] {
            handle_event(&mut form, event);
        }
        form
    }

    #[test]
    fn test_edits_mutate_fields() {
        let form = filled_form();
        assert_eq!(form.name, "Ana");
        assert_eq!(form.email, "ana@example.com");
        assert_eq!(form.password, "secret123");
    }

    #[test]
    fn test_submit_with_empty_name_shows_message_and_skips_provider() {
        let mut form = filled_form();
        handle_event(&mut form, RegistrationEvent::NameChanged(String::new()));

        let effects = handle_event(&mut form, RegistrationEvent::Submit);

        assert!(effects.is_empty());
        assert_eq!(form.error.as_deref(), Some("Please, complete all fields."));
        assert!(!form.submit.is_pending());
    }

    #[test]
    fn test_submit_with_bad_email_shows_message() {
        let mut form = filled_form();
        handle_event(
            &mut form,
            RegistrationEvent::EmailChanged("not-an-email".to_string()),
        );

        let effects = handle_event(&mut form, RegistrationEvent::Submit);

        assert!(effects.is_empty());
        assert_eq!(form.error.as_deref(), Some("Please, enter a valid email."));
    }

    #[test]
    fn test_valid_submit_emits_create_account_without_name() {
        let mut form = filled_form();

        let effects = handle_event(&mut form, RegistrationEvent::Submit);

        assert_eq!(
            effects,
            vec![UiEffect::CreateAccount {
                email: "ana@example.com".to_string(),
                password: "secret123".to_string(),
            }]
        );
        assert!(form.submit.is_pending());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let mut form = filled_form();
        handle_event(&mut form, RegistrationEvent::Submit);

        let effects = handle_event(&mut form, RegistrationEvent::Submit);

        assert!(effects.is_empty());
    }

    #[test]
    fn test_provider_success_sets_flag_and_clears_error() {
        let mut form = filled_form();
        handle_event(&mut form, RegistrationEvent::Submit);

        let identity = handle_result(
            &mut form,
            Ok(Identity {
                uid: "uid-1".to_string(),
                email: "ana@example.com".to_string(),
            }),
        );

        assert!(identity.is_some());
        assert!(form.account_created);
        assert!(form.error.is_none());
        assert!(!form.submit.is_pending());
    }

    #[test]
    fn test_provider_failure_keeps_form_editable() {
        let mut form = filled_form();
        handle_event(&mut form, RegistrationEvent::Submit);

        let identity = handle_result(&mut form, Err("email already in use".to_string()));

        assert!(identity.is_none());
        assert!(!form.account_created);
        assert_eq!(
            form.error.as_deref(),
            Some("Error creating account: email already in use")
        );
        // Fields stay populated for correction and resubmission.
        assert_eq!(form.email, "ana@example.com");
        assert!(!form.submit.is_pending());
    }
}
