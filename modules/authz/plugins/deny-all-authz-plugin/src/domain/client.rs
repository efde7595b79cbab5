//! `AuthorizationPlugin` implementation for the deny-all plugin.

use authz_plugin_sdk::{AuthorizationPlugin, Group, Project, ResourceKind};
use search_security::RequestContext;
use serde_json::Value;
use tracing::info;

use super::service::{DenyAllPlugin, PLUGIN_NAME};

impl AuthorizationPlugin for DenyAllPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn load(&mut self, config: Option<&Value>) {
        info!(
            plugin = PLUGIN_NAME,
            has_config = config.is_some_and(|c| !c.is_null()),
            "Loading deny-all plugin, configuration ignored"
        );
    }

    fn unload(&mut self) {
        info!(plugin = PLUGIN_NAME, "Unloading deny-all plugin");
    }

    fn is_allowed_project(&self, ctx: &RequestContext, project: &Project) -> bool {
        self.decide(ctx, ResourceKind::Project, project.name())
    }

    fn is_allowed_group(&self, ctx: &RequestContext, group: &Group) -> bool {
        self.decide(ctx, ResourceKind::Group, group.name())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use search_security::Identity;
    use serde_json::json;

    #[test]
    fn plugin_trait_denies() {
        let plugin = DenyAllPlugin::new();
        let plugin: &dyn AuthorizationPlugin = &plugin;
        let ctx = RequestContext::with_identity(Identity::new("admin"));

        assert_eq!(plugin.name(), "deny-all");
        assert!(!plugin.is_allowed_project(&ctx, &Project::new("kernel")));
        assert!(!plugin.is_allowed_group(&ctx, &Group::new("infra")));
        assert!(!plugin.is_allowed(&ctx, &Project::new("kernel").into()));
    }

    #[test]
    fn load_accepts_any_configuration() {
        let mut plugin = DenyAllPlugin::new();

        plugin.load(None);
        plugin.load(Some(&Value::Null));
        plugin.load(Some(&json!({ "anything": ["goes", 1, null] })));
        plugin.load(Some(&json!("not even an object")));
        plugin.unload();
    }
}
