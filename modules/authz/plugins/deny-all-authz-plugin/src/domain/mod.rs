//! Domain layer for the deny-all plugin.

mod client;
pub mod service;

pub use service::DenyAllPlugin;
