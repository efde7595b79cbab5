//! Resources that access is evaluated against.
//!
//! Projects and groups come from the indexer configuration and outlive any
//! single request. Names are opaque; a project and a group may share a name
//! without being related.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Project,
    Group,
}

impl ResourceKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An indexed project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Project {
    name: String,
}

impl Project {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A named group of projects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    name: String,
}

impl Group {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A project or a group.
///
/// Serialized as `{"kind": "project", "name": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resource {
    Project(Project),
    Group(Group),
}

impl Resource {
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Project(_) => ResourceKind::Project,
            Self::Group(_) => ResourceKind::Group,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Project(p) => p.name(),
            Self::Group(g) => g.name(),
        }
    }
}

impl From<Project> for Resource {
    fn from(project: Project) -> Self {
        Self::Project(project)
    }
}

impl From<Group> for Resource {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.name())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn same_name_different_kind_is_not_equal() {
        let project: Resource = Project::new("X").into();
        let group: Resource = Group::new("X").into();

        assert_eq!(project.name(), group.name());
        assert_ne!(project, group);
        assert_eq!(project.kind(), ResourceKind::Project);
        assert_eq!(group.kind(), ResourceKind::Group);
    }

    #[test]
    fn resource_serde_is_tagged_by_kind() {
        let json = serde_json::to_value(Resource::from(Group::new("infra"))).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "group", "name": "infra" }));

        let back: Resource =
            serde_json::from_value(serde_json::json!({ "kind": "project", "name": "kernel" }))
                .unwrap();
        assert_eq!(back, Resource::Project(Project::new("kernel")));
    }

    #[test]
    fn display_includes_kind() {
        assert_eq!(Resource::from(Project::new("kernel")).to_string(), "project:kernel");
        assert_eq!(Group::new("infra").to_string(), "infra");
    }
}
