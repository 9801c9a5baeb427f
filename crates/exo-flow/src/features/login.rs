//! Login feature: form state and reducer.

use exo_core::identity::Identity;
use exo_core::validate::validate_login;

use crate::effects::UiEffect;
use crate::events::LoginEvent;
use crate::state::SubmitState;

/// Transient state of the login screen.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// User-visible message for the last failure, if any.
    pub error: Option<String>,
    /// Set once the provider accepts the credentials.
    pub login_succeeded: bool,
    /// Submission lifecycle; guards against double submits.
    pub submit: SubmitState,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Handles a login screen event.
///
/// Login only checks for blank fields before calling the provider; email
/// shape is the provider's problem here.
pub fn handle_event(form: &mut LoginForm, event: LoginEvent) -> Vec<UiEffect> {
    match event {
        LoginEvent::EmailChanged(value) => {
            form.email = value;
            vec![]
        }
        LoginEvent::PasswordChanged(value) => {
            form.password = value;
            vec![]
        }
        LoginEvent::Submit => {
            if form.submit.is_pending() {
                // A call is already outstanding; ignore the repeat.
                return vec![];
            }

            match validate_login(&form.email, &form.password) {
                Ok(creds) => {
                    form.error = None;
                    form.submit = SubmitState::Pending;
                    vec![UiEffect::SignIn {
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

/// Handles the sign-in result from the provider.
///
/// Returns the identity on success so the caller can transition to Main.
pub fn handle_result(form: &mut LoginForm, result: Result<Identity, String>) -> Option<Identity> {
    form.submit = SubmitState::Idle;
    match result {
        Ok(identity) => {
            form.login_succeeded = true;
            form.error = None;
            Some(identity)
        }
        Err(description) => {
            form.error = Some(format!("Login error: {description}"));
            None
        }
    }
}
