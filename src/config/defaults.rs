//! Default token configuration
//!
//! Provides the canonical default configuration instance.

use super::schema::TokenConfig;

/// Get the default token configuration
pub fn default_config() -> TokenConfig {
    TokenConfig::default()
}
