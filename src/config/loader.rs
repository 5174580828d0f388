//! Token file loading and saving
//!
//! Handles reading the persisted token file, falling back to defaults when
//! the file is missing or unreadable, and writing snapshots back to disk.

use super::{defaults, paths, schema::TokenConfig};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Token file loader
pub struct TokenLoader;

impl TokenLoader {
    /// Load the token configuration from the default path
    ///
    /// A missing, unreadable, or corrupt file yields the default
    /// configuration; this never fails outward.
    pub fn load() -> TokenConfig {
        Self::load_from(&paths::tokens_file_path())
    }

    /// Load the token configuration from an explicit path, leniently
    pub fn load_from(path: &PathBuf) -> TokenConfig {
        if !path.exists() {
            tracing::debug!("No token file at {}, using defaults", path.display());
            return Self::load_defaults();
        }

        match Self::load_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Failed to load token file {}, using defaults: {:#}",
                    path.display(),
                    e
                );
                Self::load_defaults()
            }
        }
    }

    /// Load the token configuration from a file, strictly
    pub fn load_file(path: &PathBuf) -> Result<TokenConfig> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Token file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read token file: {}", path.display()))?;

        let config: TokenConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse token file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the token file at a path
    ///
    /// Strict on structure (read and parse errors fail), lenient on values:
    /// unknown selector names, out-of-range weights, and unparseable colors
    /// are returned as warnings. A missing file validates cleanly since the
    /// defaults apply.
    pub fn validate(path: &PathBuf) -> Result<Vec<String>> {
        let config = if path.exists() {
            Self::load_file(path)?
        } else {
            Self::load_defaults()
        };

        Ok(Self::validation_warnings(&config))
    }

    /// Collect value-level warnings for a configuration
    pub fn validation_warnings(config: &TokenConfig) -> Vec<String> {
        let mut warnings = Vec::new();

        let typography = &config.typography;
        if typography
            .font_family
            .get(&typography.base_font_family)
            .is_none()
        {
            warnings.push(format!(
                "typography.baseFontFamily '{}' is not one of sans, serif, mono (sans is used)",
                typography.base_font_family
            ));
        }

        if config
            .ui
            .border_radius
            .get(&config.ui.active_border_radius)
            .is_none()
        {
            warnings.push(format!(
                "ui.activeBorderRadius '{}' is not a known radius name (md is used)",
                config.ui.active_border_radius
            ));
        }

        if !matches!(
            config.ui.shadow_intensity.as_str(),
            "none" | "small" | "medium" | "large"
        ) {
            warnings.push(format!(
                "ui.shadowIntensity '{}' is not one of none, small, medium, large (medium is used)",
                config.ui.shadow_intensity
            ));
        }

        if !matches!(config.theme.as_str(), "dark" | "light") {
            warnings.push(format!(
                "theme '{}' is not 'dark' or 'light' (treated as light)",
                config.theme
            ));
        }

        for (name, weight) in typography.weights.entries() {
            if !(100..=900).contains(&weight) {
                warnings.push(format!(
                    "typography.weights.{} is {} (conventional CSS weights are 100-900)",
                    name, weight
                ));
            }
        }

        for (path, value) in color_entries(config) {
            if csscolorparser::parse(value).is_err() {
                warnings.push(format!("{} '{}' is not a parseable CSS color", path, value));
            }
        }

        warnings
    }

    /// Load the default configuration
    pub fn load_defaults() -> TokenConfig {
        defaults::default_config()
    }

    /// Save the configuration to a file as pretty JSON
    pub fn save(config: &TokenConfig, path: &PathBuf) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(config)
            .context("Failed to serialize token configuration")?;

        std::fs::write(path, json)
            .with_context(|| format!("Failed to write token file: {}", path.display()))?;

        Ok(())
    }

    /// Save the configuration to the default path
    pub fn save_default(config: &TokenConfig) -> Result<()> {
        Self::save(config, &paths::tokens_file_path())
    }
}

/// Dotted path and value for every color leaf
fn color_entries(config: &TokenConfig) -> [(&'static str, &str); 9] {
    let colors = &config.colors;
    [
        ("colors.primary.400", colors.primary.shade_400.as_str()),
        ("colors.primary.600", colors.primary.shade_600.as_str()),
        ("colors.accent.400", colors.accent.shade_400.as_str()),
        ("colors.accent.600", colors.accent.shade_600.as_str()),
        ("colors.surface.bg", colors.surface.bg.as_str()),
        ("colors.surface.main", colors.surface.main.as_str()),
        ("colors.text.primary", colors.text.primary.as_str()),
        ("colors.text.secondary", colors.text.secondary.as_str()),
        ("colors.text.muted", colors.text.muted.as_str()),
    ]
}
