//! Bearer credential type.
//!
//! An opaque token proving an authenticated session. The client never
//! inspects or validates it locally - validity is the server's concern,
//! discovered when the token is first used.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque bearer token.
///
/// Implements `Debug` manually so the token value never lands in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Create a credential from a raw token string.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// Expose the raw token for use in an `Authorization` header or for
    /// persistence to the credential store.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Convert into the inner token string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}
