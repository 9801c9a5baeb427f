//! Application state composition.
//!
//! The state hierarchy for the account flow:
//!
//! ```text
//! AppState
//! ├── screen: Screen              (which screen is active)
//! ├── registration: RegistrationForm
//! ├── login: LoginForm
//! └── session: Option<Identity>   (provider-issued handle after success)
//! ```
//!
//! Exactly one screen is active at a time; `Screen::Main` is reachable only
//! through a successful provider call. Forms are owned exclusively by their
//! screen and mutated only on the host's logical thread.

use exo_core::identity::Identity;

use crate::features::login::LoginForm;
use crate::features::registration::RegistrationForm;

/// The single active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Account creation screen (initial).
    #[default]
    Registration,
    /// Login screen for existing accounts.
    Login,
    /// Static informational home screen.
    Main,
}

/// Submission lifecycle for a form.
///
/// `Pending` marks an outstanding provider call; further submits are ignored
/// until the result event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
}

impl SubmitState {
    /// Returns true if a provider call is outstanding.
    pub fn is_pending(self) -> bool {
        matches!(self, SubmitState::Pending)
    }
}

/// Combined application state for the account flow.
#[derive(Debug, Default)]
pub struct AppState {
    /// The active screen.
    pub screen: Screen,
    /// Registration form state.
    pub registration: RegistrationForm,
    /// Login form state.
    pub login: LoginForm,
    /// Identity handle from the last successful provider call.
    ///
    /// Going back from Main does not tear this down; the provider retains
    /// whatever session state it manages.
    pub session: Option<Identity>,
}

impl AppState {
    /// Creates the initial state: registration screen, empty forms.
    pub fn new() -> Self {
        Self::default()
    }
}
