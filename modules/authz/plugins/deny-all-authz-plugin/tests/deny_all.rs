#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Behaviour of the deny-all plugin as seen by the web layer.

use authz_plugin_sdk::testing::{
    assert_fail_closed_contract, context_for, random_resources, random_upper,
};
use authz_plugin_sdk::{AuthorizationPlugin, Group, ManagedPlugin, PluginState, Project};
use deny_all_authz_plugin::DenyAllPlugin;
use search_security::RequestContext;

#[test]
fn satisfies_fail_closed_contract() {
    let mut plugin = DenyAllPlugin::new();
    assert_fail_closed_contract(&mut plugin);

    let mut managed = ManagedPlugin::new(Box::new(DenyAllPlugin::new()));
    assert_fail_closed_contract(&mut managed);
    assert_eq!(managed.state(), PluginState::Unloaded);
}

#[test]
fn load_without_configuration_keeps_plugin_usable() {
    let mut plugin = DenyAllPlugin::new();
    plugin.load(None);

    assert!(!plugin.is_allowed_project(&context_for("ABCDEFGH"), &Project::new("P")));
}

#[test]
fn unload_without_load() {
    let mut plugin = DenyAllPlugin::new();
    plugin.unload();

    let mut managed = ManagedPlugin::new(Box::new(DenyAllPlugin::new()));
    managed.unload();
    assert_eq!(managed.state(), PluginState::Unloaded);
}

#[test]
fn random_user_is_denied_any_project() {
    let plugin = DenyAllPlugin::new();
    let ctx = context_for(&random_upper(8));

    let project = Project::new(random_upper(10));
    assert!(
        !plugin.is_allowed_project(&ctx, &project),
        "should not allow random user for random project 1"
    );

    let project = Project::new(random_upper(10));
    assert!(
        !plugin.is_allowed_project(&ctx, &project),
        "should not allow random user for random project 2"
    );
}

#[test]
fn random_user_is_denied_any_group() {
    let plugin = DenyAllPlugin::new();
    let ctx = context_for(&random_upper(8));

    let group = Group::new(random_upper(10));
    assert!(
        !plugin.is_allowed_group(&ctx, &group),
        "should not allow random user for random group 1"
    );

    let group = Group::new(random_upper(10));
    assert!(
        !plugin.is_allowed_group(&ctx, &group),
        "should not allow random user for random group 2"
    );
}

#[test]
fn fixed_user_is_denied_named_projects_and_groups() {
    let plugin = DenyAllPlugin::new();
    let ctx = context_for("ABCDEFGH");

    for name in ["PROJECTNAME1", "PROJECTNAME2"] {
        assert!(!plugin.is_allowed_project(&ctx, &Project::new(name)));
        assert!(!plugin.is_allowed_group(&ctx, &Group::new(name)));
    }
}

#[test]
fn many_random_identities_and_resources_are_denied() {
    let mut plugin = ManagedPlugin::new(Box::new(DenyAllPlugin::new()));
    plugin.load(None);

    for _ in 0..64 {
        let ctx = context_for(&random_upper(8));
        for resource in random_resources() {
            assert!(!plugin.is_allowed(&ctx, &resource), "allowed {resource}");
        }
    }

    plugin.unload();
}

#[test]
fn no_identity_is_denied() {
    let plugin = DenyAllPlugin::new();
    let ctx = RequestContext::new();

    for resource in random_resources() {
        assert!(!plugin.is_allowed(&ctx, &resource));
    }
}
