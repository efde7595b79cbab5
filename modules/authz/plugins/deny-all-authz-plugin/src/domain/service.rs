//! Service implementation for the deny-all plugin.

use authz_plugin_sdk::ResourceKind;
use search_security::RequestContext;

/// Name reported in logs.
pub const PLUGIN_NAME: &str = "deny-all";

/// Deny-all authorization plugin.
///
/// Stateless: loading and unloading change nothing, and every decision is
/// `false`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DenyAllPlugin;

impl DenyAllPlugin {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Decide access to the resource of `kind` named `name`.
    #[must_use]
    #[allow(clippy::unused_self)] // &self kept for parity with stateful plugins
    pub fn decide(&self, ctx: &RequestContext, kind: ResourceKind, name: &str) -> bool {
        tracing::debug!(
            plugin = PLUGIN_NAME,
            user = ctx.identity().map(search_security::Identity::username),
            resource_kind = %kind,
            resource = name,
            "Access denied"
        );
        false
    }
}
