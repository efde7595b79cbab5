//! Well-known request attribute keys.
//!
//! Keys are compared bit-exactly. A plugin looking under a key that differs
//! from the one the web layer wrote to sees no identity at all and denies.

/// Slot holding the authenticated [`Identity`](crate::Identity) of the request.
pub const USER: &str = "opengrok.auth.plugin.UserPlugin.user";
