use thiserror::Error;

/// Authentication failures surfaced by request handlers
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,
}
