//! tokensmith core library
//!
//! A design-token workbench: a strongly-shaped token configuration with
//! canonical defaults, a store with path-addressed mutation, persistence,
//! and change notification, derived view values, and exporters for
//! Markdown, CSS variable, and Tailwind theme artifacts.

pub mod clipboard;
pub mod config;
pub mod export;
pub mod store;
pub mod view;

// Re-export commonly used types for convenience
pub use config::{TokenConfig, TokenLoader, TOKEN_PATHS};
pub use store::TokenStore;
