//! Auth domain - bearer token verification for identities issued by the
//! external auth provider.

pub mod jwt;

pub use jwt::{Claims, JwtService};
