//! Error types for authorization plugins.

use std::fmt::Display;

use thiserror::Error;

/// Failures inside a plugin.
///
/// These never leave a decision method. Access denial is expressed as `false`,
/// and a plugin that hits one of these while deciding converts it to `false`
/// with [`fail_closed`].
#[derive(Debug, Error)]
pub enum PluginError {
    /// The configuration passed to `load` could not be used.
    #[error("invalid plugin configuration: {0}")]
    InvalidConfig(String),

    /// A lookup backend (directory, database, ...) could not be reached.
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Turn the outcome of a fallible decision into a plain decision.
///
/// `Ok(decision)` is passed through. Any error is logged and becomes a deny.
#[must_use]
pub fn fail_closed<E: Display>(plugin: &str, operation: &str, result: Result<bool, E>) -> bool {
    match result {
        Ok(decision) => decision,
        Err(e) => {
            tracing::warn!(
                plugin,
                operation,
                error = %e,
                "authorization check failed, denying"
            );
            false
        }
    }
}
