//! Caller identity as seen by request handlers.
//!
//! Identity is issued by an external auth provider; the server only
//! verifies bearer tokens and turns them into a [`Viewer`]. Handlers call
//! [`Viewer::require_auth`] before touching any owned resource.

mod errors;
mod viewer;

pub use errors::AuthError;
pub use viewer::{AuthenticatedUser, Viewer};
