//! Plugin API trait for authorization plugin implementations.

use search_security::RequestContext;
use serde_json::Value;

use crate::models::{Group, Project, Resource};

/// Plugin API trait for authorization plugins.
///
/// A plugin is loaded once, queried by many concurrent requests, then unloaded
/// once. `load` and `unload` take `&mut self`, so they cannot overlap with
/// decisions, which only need `&self`.
///
/// Decisions fail closed. Implementations return `false` when no identity is
/// attached to the context, when the identity is unknown, or when anything goes
/// wrong internally; see [`fail_closed`](crate::fail_closed). They must not
/// panic for a context without identity, and must work even if `load` was
/// never called.
pub trait AuthorizationPlugin: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Initialize the plugin.
    ///
    /// `config` is plugin-defined and may be absent; absence means defaults.
    fn load(&mut self, config: Option<&Value>);

    /// Release whatever `load` acquired.
    ///
    /// Must be safe without a prior `load` and after a partial one.
    fn unload(&mut self);

    /// Whether the identity attached to `ctx` may view `project`.
    fn is_allowed_project(&self, ctx: &RequestContext, project: &Project) -> bool;

    /// Whether the identity attached to `ctx` may view `group`.
    fn is_allowed_group(&self, ctx: &RequestContext, group: &Group) -> bool;

    /// Dispatch on the resource kind.
    ///
    /// Each kind is answered by its own method only; a decision about a project
    /// never consults the group of the same name.
    fn is_allowed(&self, ctx: &RequestContext, resource: &Resource) -> bool {
        match resource {
            Resource::Project(project) => self.is_allowed_project(ctx, project),
            Resource::Group(group) => self.is_allowed_group(ctx, group),
        }
    }
}
