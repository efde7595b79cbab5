#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Authorization Plugin SDK
//!
//! This crate provides the contract every code search authorization plugin
//! implements:
//!
//! - [`AuthorizationPlugin`] - Plugin trait (lifecycle + project/group decisions)
//! - [`Resource`], [`Project`], [`Group`] - What access is evaluated against
//! - [`ManagedPlugin`], [`PluginState`] - Explicit load/unload state machine
//! - [`PluginError`], [`fail_closed`] - Internal failures and their conversion to deny
//! - [`config`] - Plugin configuration helpers
//!
//! Decisions are plain `bool`s and fail closed: a missing identity, missing
//! configuration or any internal failure yields `false`.
//!
//! ## Usage
//!
//! ```ignore
//! use authz_plugin_sdk::{AuthorizationPlugin, ManagedPlugin, Project};
//! use search_security::{Identity, RequestContext};
//!
//! let mut plugin = ManagedPlugin::new(Box::new(MyPlugin::default()));
//! plugin.load(None);
//!
//! // Per request
//! let ctx = RequestContext::with_identity(Identity::new("alice"));
//! if !plugin.is_allowed_project(&ctx, &Project::new("kernel")) {
//!     // respond with 403
//! }
//!
//! plugin.unload();
//! ```

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod plugin_api;

#[cfg(feature = "testing")]
pub mod testing;

// Re-export main types at crate root
pub use config::{PluginConfigLoader, parse_config};
pub use error::{PluginError, fail_closed};
pub use lifecycle::{ManagedPlugin, PluginState};
pub use models::{Group, Project, Resource, ResourceKind};
pub use plugin_api::AuthorizationPlugin;
