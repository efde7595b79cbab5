#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Request identity for code search authorization.
//!
//! - [`Identity`] - the authenticated user attached to a request
//! - [`RequestContext`] - per-request attribute storage handed to plugins
//! - [`attrs`] - well-known attribute keys shared by the web layer and plugins

pub mod attrs;
pub mod context;
pub mod identity;

pub use context::RequestContext;
pub use identity::Identity;
