//! Plugin configuration helpers.
//!
//! The configuration handed to [`AuthorizationPlugin::load`](crate::AuthorizationPlugin::load)
//! is an opaque JSON value. Plugins with typed settings declare a struct and
//! read it with [`parse_config`]:
//!
//! ```ignore
//! #[derive(Debug, Default, Deserialize)]
//! #[serde(default, deny_unknown_fields)]
//! struct LdapPluginConfig {
//!     url: String,
//!     timeout_secs: u64,
//! }
//!
//! let cfg: LdapPluginConfig = parse_config(config)?;
//! ```
//!
//! Hosts that keep plugin settings in a YAML file and/or the environment can
//! build that value with [`PluginConfigLoader`].

use std::path::PathBuf;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::PluginError;

/// Deserialize a plugin configuration, using defaults when it is absent.
///
/// Both `None` and JSON `null` mean "no configuration".
///
/// # Errors
///
/// Returns [`PluginError::InvalidConfig`] if the value does not match `T`.
pub fn parse_config<T>(config: Option<&Value>) -> Result<T, PluginError>
where
    T: DeserializeOwned + Default,
{
    match config {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => <T as serde::Deserialize>::deserialize(value)
            .map_err(|e| PluginError::InvalidConfig(e.to_string())),
    }
}

/// Builds a plugin configuration from a YAML file and environment variables.
///
/// Environment variables override the file. With prefix `AUTHZ_`, the variable
/// `AUTHZ_LDAP__URL` sets `ldap.url`.
#[derive(Debug, Clone, Default)]
pub struct PluginConfigLoader {
    file: Option<PathBuf>,
    env_prefix: Option<String>,
}

impl PluginConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from this YAML file. A missing file contributes nothing.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Read settings from environment variables starting with `prefix`.
    #[must_use]
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Merge the configured sources.
    ///
    /// Returns `None` when no source supplied any setting, so the plugin sees
    /// the same "absent" configuration as when loaded without one.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::InvalidConfig`] if a source cannot be parsed.
    pub fn load(&self) -> Result<Option<Value>, PluginError> {
        let mut figment = Figment::new();
        if let Some(path) = &self.file {
            figment = figment.merge(Yaml::file(path));
        }
        if let Some(prefix) = &self.env_prefix {
            figment = figment.merge(Env::prefixed(prefix).split("__"));
        }

        let value: Value = figment
            .extract()
            .map_err(|e| PluginError::InvalidConfig(e.to_string()))?;

        let empty = match &value {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if empty {
            tracing::debug!(file = ?self.file, "No plugin configuration found");
            return Ok(None);
        }
        Ok(Some(value))
    }
}
