//! Identity provider boundary
//!
//! Access tokens are issued by the external identity provider; this
//! module only verifies them and extracts the caller's identity.

mod identity;

pub use identity::{AuthError, Claims, Identity, IdentityVerifier};
