#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Deny-All Authorization Plugin
//!
//! The conservative baseline: every project and every group is denied, for
//! every user, whether or not the plugin was loaded.
//!
//! ## Configuration
//!
//! None. Any configuration passed to `load`, including none at all, is
//! accepted and ignored.

pub mod domain;

pub use domain::DenyAllPlugin;
