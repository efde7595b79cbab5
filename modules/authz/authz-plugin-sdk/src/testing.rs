//! Conformance helpers for plugin tests.
//!
//! Enabled with the `testing` feature:
//!
//! ```toml
//! [dev-dependencies]
//! authz-plugin-sdk = { workspace = true, features = ["testing"] }
//! ```

use rand::Rng;
use search_security::{Identity, RequestContext};

use crate::models::{Group, Project, Resource};
use crate::plugin_api::AuthorizationPlugin;

/// Random string of `len` upper-case ASCII letters.
#[must_use]
pub fn random_upper(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
        .collect()
}

/// A request context carrying `username` as its identity.
#[must_use]
pub fn context_for(username: &str) -> RequestContext {
    RequestContext::with_identity(Identity::new(username))
}

/// A project and a group with fresh random names.
#[must_use]
pub fn random_resources() -> [Resource; 2] {
    [
        Project::new(random_upper(10)).into(),
        Group::new(random_upper(10)).into(),
    ]
}

/// Check the parts of the plugin contract every variant must satisfy.
///
/// - `load(None)` does not panic and the plugin keeps answering afterwards
/// - a context without identity is denied for projects and groups
/// - `unload` after `load` does not panic
///
/// # Panics
///
/// Panics with a description of the first violated property.
pub fn assert_fail_closed_contract(plugin: &mut dyn AuthorizationPlugin) {
    let anonymous = RequestContext::new();

    plugin.load(None);

    for resource in random_resources() {
        assert!(
            !plugin.is_allowed(&anonymous, &resource),
            "plugin '{}' allowed {resource} without an identity",
            plugin.name()
        );
    }

    // Same name for both kinds, each asked through its own method.
    let name = random_upper(10);
    assert!(
        !plugin.is_allowed_project(&anonymous, &Project::new(name.as_str())),
        "plugin '{}' allowed project {name} without an identity",
        plugin.name()
    );
    assert!(
        !plugin.is_allowed_group(&anonymous, &Group::new(name.as_str())),
        "plugin '{}' allowed group {name} without an identity",
        plugin.name()
    );

    plugin.unload();
}
