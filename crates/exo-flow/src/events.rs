//! Events consumed by the reducer.
//!
//! The rendering collaborator produces the user-initiated events; the
//! runtime produces the provider result events when an async call completes.

use exo_core::identity::Identity;

/// Events processed by [`crate::update::update`].
#[derive(Debug)]
pub enum UiEvent {
    /// An edit or submit on the registration screen.
    Registration(RegistrationEvent),
    /// An edit or submit on the login screen.
    Login(LoginEvent),
    /// "Do you already have an account?" tapped on the registration screen.
    ShowLogin,
    /// Back action (Login → Registration, Main → Registration).
    Back,
    /// Result of an outstanding create-account call.
    CreateAccountResult { result: Result<Identity, String> },
    /// Result of an outstanding sign-in call.
    SignInResult { result: Result<Identity, String> },
}

/// Registration screen events.
#[derive(Debug)]
pub enum RegistrationEvent {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
}

/// Login screen events.
#[derive(Debug)]
pub enum LoginEvent {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
}
