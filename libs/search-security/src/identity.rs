use std::fmt;

use serde::{Deserialize, Serialize};

/// `Identity` names the authenticated user behind a request.
///
/// Built by the web layer from the authentication result and attached to the
/// [`RequestContext`](crate::RequestContext) under [`attrs::USER`](crate::attrs::USER).
/// The user name is opaque: it is not validated, normalized or checked for
/// uniqueness here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    username: String,
}

impl Identity {
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Get the user name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}
