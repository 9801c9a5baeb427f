//! Flow runtime - owns state, executes effects, collects async results.
//!
//! This is the boundary where side effects happen. The reducer stays pure
//! and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Provider calls are spawned on the tokio executor and send their result
//! event to an unbounded inbox channel. The host drains the inbox from its
//! own logical thread (`drain_inbox` each frame, or `settle` to block until
//! outstanding calls finish), so every state mutation, including the
//! continuation of an async call, happens on the caller's thread. No
//! locking is needed around form state.
//!
//! No cancellation or timeout is implemented here; any timeout behavior is
//! the provider's.

use std::future::Future;
use std::sync::Arc;

use exo_core::identity::IdentityClient;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::update;

/// Account flow runtime.
///
/// Owns the state and the identity client. The rendering collaborator reads
/// `state` between dispatches and feeds user events in.
pub struct FlowRuntime {
    /// Application state.
    pub state: AppState,
    /// Identity provider client, shared with spawned calls.
    client: Arc<IdentityClient>,
    /// Inbox sender - spawned calls send result events here.
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    /// Inbox receiver - the host drains this.
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
}

impl FlowRuntime {
    /// Creates a runtime in the initial state (registration screen).
    pub fn new(client: IdentityClient) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            client: Arc::new(client),
            inbox_tx,
            inbox_rx,
        }
    }

    /// Runs an event through the reducer and executes the returned effects.
    pub fn dispatch(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Drains completed provider results without blocking.
    pub fn drain_inbox(&mut self) {
        while let Ok(event) = self.inbox_rx.try_recv() {
            self.dispatch(event);
        }
    }

    /// Returns true if either form has a provider call outstanding.
    pub fn is_submitting(&self) -> bool {
        self.state.registration.submit.is_pending() || self.state.login.submit.is_pending()
    }

    /// Waits for outstanding provider calls and dispatches their results.
    ///
    /// Returns once no submission is pending. Hosts with their own event
    /// loop can use `drain_inbox` instead.
    pub async fn settle(&mut self) {
        while self.is_submitting() {
            let Some(event) = self.inbox_rx.recv().await else {
                break;
            };
            self.dispatch(event);
        }
    }

    /// Executes a single effect by spawning the matching provider call.
    fn execute_effect(&self, effect: UiEffect) {
        match effect {
            UiEffect::CreateAccount { email, password } => {
                let client = Arc::clone(&self.client);
                self.spawn_effect(move || async move {
                    let result = client
                        .create_account(&email, &password)
                        .await
                        .map_err(|err| format!("{err:#}"));
                    UiEvent::CreateAccountResult { result }
                });
            }
            UiEffect::SignIn { email, password } => {
                let client = Arc::clone(&self.client);
                self.spawn_effect(move || async move {
                    let result = client
                        .sign_in(&email, &password)
                        .await
                        .map_err(|err| format!("{err:#}"));
                    UiEvent::SignInResult { result }
                });
            }
        }
    }

    /// Spawns an async effect, sending the result event into the inbox when
    /// complete.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }
}

#[cfg(test)]
mod tests {
    use exo_core::identity::IdentityConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::events::{LoginEvent, RegistrationEvent};
    use crate::state::Screen;

    fn runtime_for(server: &MockServer) -> FlowRuntime {
        FlowRuntime::new(IdentityClient::new(IdentityConfig {
            api_key: "test-key".to_string(),
            base_url: server.uri(),
        }))
    }

    #[tokio::test]
    async fn test_registration_round_trip_reaches_main() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signUp"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"localId":"uid-123","email":"ana@example.com","idToken":"tok"}"#,
            ))
            .mount(&server)
            .await;

        let mut runtime = runtime_for(&server);
        for event in [
            RegistrationEvent::NameChanged("Ana".to_string()),
            RegistrationEvent::EmailChanged("ana@example.com".to_string()),
            RegistrationEvent::PasswordChanged("secret123".to_string()),
            RegistrationEvent::Submit,
        ] {
            runtime.dispatch(UiEvent::Registration(event));
        }
        assert!(runtime.is_submitting());

        runtime.settle().await;

        assert_eq!(runtime.state.screen, Screen::Main);
        assert!(runtime.state.registration.account_created);
        assert_eq!(runtime.state.session.as_ref().unwrap().uid, "uid-123");
    }

    #[tokio::test]
    async fn test_rejected_sign_in_surfaces_provider_description() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(400).set_body_string(
                r#"{"error":{"code":400,"message":"INVALID_LOGIN_CREDENTIALS"}}"#,
            ))
            .mount(&server)
            .await;

        let mut runtime = runtime_for(&server);
        runtime.dispatch(UiEvent::ShowLogin);
        for event in [
            LoginEvent::EmailChanged("ana@example.com".to_string()),
            LoginEvent::PasswordChanged("wrong".to_string()),
            LoginEvent::Submit,
        ] {
            runtime.dispatch(UiEvent::Login(event));
        }

        runtime.settle().await;

        assert_eq!(runtime.state.screen, Screen::Login);
        assert_eq!(
            runtime.state.login.error.as_deref(),
            Some("Login error: The supplied credentials are incorrect.")
        );
    }

    #[tokio::test]
    async fn test_validation_failure_never_touches_the_network() {
        // No mock server mounts: any request would 404 and fail the flow.
        let server = MockServer::start().await;

        let mut runtime = runtime_for(&server);
        runtime.dispatch(UiEvent::Registration(RegistrationEvent::Submit));

        assert!(!runtime.is_submitting());
        runtime.settle().await;
        assert_eq!(
            runtime.state.registration.error.as_deref(),
            Some("Please, complete all fields.")
        );
        assert_eq!(server.received_requests().await.unwrap().len(), 0);
    }
}
