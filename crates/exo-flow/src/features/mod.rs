//! Feature slices for the account flow (state/update per slice).

pub mod login;
pub mod registration;
