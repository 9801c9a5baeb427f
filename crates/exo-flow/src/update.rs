//! Account flow reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state and for
//! the screen transitions:
//!
//! ```text
//! Registration --(show login)--------> Login
//! Login        --(back)--------------> Registration
//! Registration --(create succeeds)---> Main
//! Login        --(sign-in succeeds)--> Main
//! Main         --(back)--------------> Registration (fresh form)
//! ```
//!
//! The flow is cyclic by design; there is no terminal state.

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::login::LoginForm;
use crate::features::registration::RegistrationForm;
use crate::state::{AppState, Screen};
use crate::{login, registration};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute. Events addressed to an inactive screen are
/// dropped, which also discards provider results that arrive after the user
/// has navigated away.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Registration(ev) => {
            if state.screen != Screen::Registration {
                return vec![];
            }
            registration::handle_event(&mut state.registration, ev)
        }
        UiEvent::Login(ev) => {
            if state.screen != Screen::Login {
                return vec![];
            }
            login::handle_event(&mut state.login, ev)
        }
        UiEvent::ShowLogin => {
            if state.screen == Screen::Registration {
                state.login = LoginForm::new();
                state.screen = Screen::Login;
            }
            vec![]
        }
        UiEvent::Back => {
            match state.screen {
                // Dismissing login discards its form; the registration form
                // underneath keeps whatever was typed.
                Screen::Login => {
                    state.login = LoginForm::new();
                    state.screen = Screen::Registration;
                }
                // Leaving the home screen re-enters registration with a
                // fresh form. The provider session is not torn down.
                Screen::Main => {
                    state.registration = RegistrationForm::new();
                    state.login = LoginForm::new();
                    state.screen = Screen::Registration;
                }
                Screen::Registration => {}
            }
            vec![]
        }
        UiEvent::CreateAccountResult { result } => {
            if state.screen != Screen::Registration || !state.registration.submit.is_pending() {
                return vec![];
            }
            if let Some(identity) = registration::handle_result(&mut state.registration, result) {
                tracing::info!(uid = %identity.uid, "account created");
                state.session = Some(identity);
                state.screen = Screen::Main;
            }
            vec![]
        }
        UiEvent::SignInResult { result } => {
            if state.screen != Screen::Login || !state.login.submit.is_pending() {
                return vec![];
            }
            if let Some(identity) = login::handle_result(&mut state.login, result) {
                tracing::info!(uid = %identity.uid, "login succeeded");
                state.session = Some(identity);
                state.screen = Screen::Main;
            }
            vec![]
        }
    }
}
