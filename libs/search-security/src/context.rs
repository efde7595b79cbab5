use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::attrs;
use crate::identity::Identity;

/// `RequestContext` carries per-request state from the web layer into
/// authorization plugins.
///
/// Created when a request arrives and dropped when it completes. It is owned by
/// the code handling that request and is deliberately not `Clone`: two requests
/// never see the same context.
///
/// Attributes are keyed by string and typed on read. Reading a key whose value
/// has another type behaves exactly like reading a missing key.
#[derive(Default)]
pub struct RequestContext {
    attributes: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl RequestContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that already carries `identity` under [`attrs::USER`].
    #[must_use]
    pub fn with_identity(identity: Identity) -> Self {
        let mut ctx = Self::new();
        ctx.set_identity(identity);
        ctx
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set_attribute<T>(&mut self, key: impl Into<String>, value: T)
    where
        T: Any + Send + Sync,
    {
        self.attributes.insert(key.into(), Box::new(value));
    }

    /// Get the value stored under `key` if it is a `T`.
    #[must_use]
    pub fn attribute<T>(&self, key: &str) -> Option<&T>
    where
        T: Any + Send + Sync,
    {
        self.attributes
            .get(key)
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Remove the value stored under `key`. Returns `true` if there was one.
    pub fn remove_attribute(&mut self, key: &str) -> bool {
        self.attributes.remove(key).is_some()
    }

    #[must_use]
    pub fn contains_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attach the authenticated user. A request carries at most one identity,
    /// so this replaces any identity set earlier.
    pub fn set_identity(&mut self, identity: Identity) {
        self.set_attribute(attrs::USER, identity);
    }

    /// Get the authenticated user, if one is attached.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.attribute::<Identity>(attrs::USER)
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.attributes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("RequestContext")
            .field("attributes", &keys)
            .finish()
    }
}
