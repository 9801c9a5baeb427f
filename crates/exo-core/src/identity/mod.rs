//! Identity provider collaborator.
//!
//! The provider is an external hosted service (Identity Toolkit REST API)
//! that verifies credentials and issues user identities. This module adapts
//! its two calls, create-account and sign-in, and nothing else; credential
//! verification, token issuance, and session durability all stay on the
//! provider's side.

mod client;
mod types;

pub use client::{DEFAULT_BASE_URL, IdentityClient, IdentityConfig};

/// Opaque user handle issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Provider-assigned user id.
    pub uid: String,
    /// Email the identity was registered under.
    pub email: String,
}
