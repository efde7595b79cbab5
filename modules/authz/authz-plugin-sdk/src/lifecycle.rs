//! Explicit load/unload state for a plugin.

use search_security::RequestContext;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::{Group, Project};
use crate::plugin_api::AuthorizationPlugin;

/// Lifecycle state of a [`ManagedPlugin`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PluginState {
    #[default]
    Unloaded,
    Loaded,
}

/// A plugin together with its lifecycle state.
///
/// - `load`: `Unloaded -> Loaded`. A second `load` is ignored.
/// - `unload`: `Loaded -> Unloaded`, or `Unloaded -> Unloaded`. The inner
///   plugin's `unload` runs in both cases.
///
/// Decisions are delegated in either state; an unloaded plugin is expected to
/// deny on its own.
pub struct ManagedPlugin {
    inner: Box<dyn AuthorizationPlugin>,
    state: PluginState,
}

impl ManagedPlugin {
    #[must_use]
    pub fn new(inner: Box<dyn AuthorizationPlugin>) -> Self {
        Self {
            inner,
            state: PluginState::Unloaded,
        }
    }

    #[must_use]
    pub fn state(&self) -> PluginState {
        self.state
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state == PluginState::Loaded
    }
}

impl AuthorizationPlugin for ManagedPlugin {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn load(&mut self, config: Option<&Value>) {
        if self.state == PluginState::Loaded {
            warn!(plugin = self.inner.name(), "Plugin already loaded, ignoring load");
            return;
        }

        self.inner.load(config);
        self.state = PluginState::Loaded;
        info!(
            plugin = self.inner.name(),
            has_config = config.is_some_and(|c| !c.is_null()),
            "Plugin loaded"
        );
    }

    fn unload(&mut self) {
        if self.state == PluginState::Unloaded {
            debug!(plugin = self.inner.name(), "Unloading plugin that was not loaded");
        }

        self.inner.unload();
        self.state = PluginState::Unloaded;
        info!(plugin = self.inner.name(), "Plugin unloaded");
    }

    fn is_allowed_project(&self, ctx: &RequestContext, project: &Project) -> bool {
        self.inner.is_allowed_project(ctx, project)
    }

    fn is_allowed_group(&self, ctx: &RequestContext, group: &Group) -> bool {
        self.inner.is_allowed_group(ctx, group)
    }
}

impl std::fmt::Debug for ManagedPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagedPlugin")
            .field("plugin", &self.inner.name())
            .field("state", &self.state)
            .finish()
    }
}
