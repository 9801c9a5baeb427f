//! Account flow controller for ExoExplorer.
//!
//! Owns the transient form state for the registration and login screens,
//! validates input, delegates to the identity provider, and computes the
//! next screen to display. Rendering is a collaborator: it consumes
//! [`state::AppState`] snapshots and feeds [`events::UiEvent`]s back in.

pub mod effects;
pub mod events;
pub mod features;
pub mod runtime;
pub mod state;
pub mod update;

pub use features::{login, registration};
pub use runtime::FlowRuntime;
