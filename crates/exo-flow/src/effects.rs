//! Effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent provider calls only (no direct state mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Call the provider's create-account endpoint.
    ///
    /// Only email and password are sent; the name stays local.
    CreateAccount { email: String, password: String },
    /// Call the provider's sign-in endpoint.
    SignIn { email: String, password: String },
}
