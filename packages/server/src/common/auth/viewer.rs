use serde::{Deserialize, Serialize};

use super::AuthError;

/// A caller whose bearer token verified.
///
/// `id` is the auth provider's subject and is what documents are owned by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

/// Who is making the current request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Viewer {
    Authenticated(AuthenticatedUser),
    #[default]
    Unauthenticated,
}

impl Viewer {
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            Viewer::Authenticated(user) => Some(user),
            Viewer::Unauthenticated => None,
        }
    }

    /// Require a verified caller.
    pub fn require_auth(&self) -> Result<&AuthenticatedUser, AuthError> {
        self.user().ok_or(AuthError::AuthenticationRequired)
    }
}
