//! Token configuration system
//!
//! Defines the token schema and defaults, the persisted-file loader, and
//! path-addressed access to individual token values. Paths use dot notation
//! with the serialized key names, e.g. "colors.primary.400" or
//! "typography.baseFontFamily".

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::TokenLoader;
pub use schema::TokenConfig;

/// Every editable token path, in display order
pub const TOKEN_PATHS: &[&str] = &[
    "colors.primary.400",
    "colors.primary.600",
    "colors.accent.400",
    "colors.accent.600",
    "colors.surface.bg",
    "colors.surface.main",
    "colors.text.primary",
    "colors.text.secondary",
    "colors.text.muted",
    "typography.fontFamily.sans",
    "typography.fontFamily.serif",
    "typography.fontFamily.mono",
    "typography.baseFontFamily",
    "typography.weights.thin",
    "typography.weights.extraLight",
    "typography.weights.light",
    "typography.weights.normal",
    "typography.weights.medium",
    "typography.weights.semibold",
    "typography.weights.bold",
    "ui.borderRadius.none",
    "ui.borderRadius.sm",
    "ui.borderRadius.md",
    "ui.borderRadius.lg",
    "ui.borderRadius.xl",
    "ui.borderRadius.full",
    "ui.activeBorderRadius",
    "ui.spacing",
    "ui.shadowIntensity",
    "theme",
    "brandName",
    "brandDescription",
];

/// Get a token value by path (dot notation)
pub fn get_token_value(config: &TokenConfig, path: &str) -> anyhow::Result<String> {
    match path {
        "colors.primary.400" => Ok(config.colors.primary.shade_400.clone()),
        "colors.primary.600" => Ok(config.colors.primary.shade_600.clone()),
        "colors.accent.400" => Ok(config.colors.accent.shade_400.clone()),
        "colors.accent.600" => Ok(config.colors.accent.shade_600.clone()),
        "colors.surface.bg" => Ok(config.colors.surface.bg.clone()),
        "colors.surface.main" => Ok(config.colors.surface.main.clone()),
        "colors.text.primary" => Ok(config.colors.text.primary.clone()),
        "colors.text.secondary" => Ok(config.colors.text.secondary.clone()),
        "colors.text.muted" => Ok(config.colors.text.muted.clone()),
        "typography.fontFamily.sans" => Ok(config.typography.font_family.sans.clone()),
        "typography.fontFamily.serif" => Ok(config.typography.font_family.serif.clone()),
        "typography.fontFamily.mono" => Ok(config.typography.font_family.mono.clone()),
        "typography.baseFontFamily" => Ok(config.typography.base_font_family.clone()),
        "typography.weights.thin" => Ok(config.typography.weights.thin.to_string()),
        "typography.weights.extraLight" => Ok(config.typography.weights.extra_light.to_string()),
        "typography.weights.light" => Ok(config.typography.weights.light.to_string()),
        "typography.weights.normal" => Ok(config.typography.weights.normal.to_string()),
        "typography.weights.medium" => Ok(config.typography.weights.medium.to_string()),
        "typography.weights.semibold" => Ok(config.typography.weights.semibold.to_string()),
        "typography.weights.bold" => Ok(config.typography.weights.bold.to_string()),
        "ui.borderRadius.none" => Ok(config.ui.border_radius.none.clone()),
        "ui.borderRadius.sm" => Ok(config.ui.border_radius.sm.clone()),
        "ui.borderRadius.md" => Ok(config.ui.border_radius.md.clone()),
        "ui.borderRadius.lg" => Ok(config.ui.border_radius.lg.clone()),
        "ui.borderRadius.xl" => Ok(config.ui.border_radius.xl.clone()),
        "ui.borderRadius.full" => Ok(config.ui.border_radius.full.clone()),
        "ui.activeBorderRadius" => Ok(config.ui.active_border_radius.clone()),
        "ui.spacing" => Ok(config.ui.spacing.to_string()),
        "ui.shadowIntensity" => Ok(config.ui.shadow_intensity.clone()),
        "theme" => Ok(config.theme.clone()),
        "brandName" => Ok(config.brand_name.clone()),
        "brandDescription" => Ok(config.brand_description.clone()),
        _ => Err(anyhow::anyhow!("Unknown token path: {}", path)),
    }
}

/// Set a token value by path (dot notation)
///
/// Text fields take the value verbatim; weights and spacing are parsed.
/// A parse failure leaves the configuration untouched.
pub fn set_token_value(config: &mut TokenConfig, path: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match path {
        "colors.primary.400" => {
            config.colors.primary.shade_400 = value.to_string();
        }
        "colors.primary.600" => {
            config.colors.primary.shade_600 = value.to_string();
        }
        "colors.accent.400" => {
            config.colors.accent.shade_400 = value.to_string();
        }
        "colors.accent.600" => {
            config.colors.accent.shade_600 = value.to_string();
        }
        "colors.surface.bg" => {
            config.colors.surface.bg = value.to_string();
        }
        "colors.surface.main" => {
            config.colors.surface.main = value.to_string();
        }
        "colors.text.primary" => {
            config.colors.text.primary = value.to_string();
        }
        "colors.text.secondary" => {
            config.colors.text.secondary = value.to_string();
        }
        "colors.text.muted" => {
            config.colors.text.muted = value.to_string();
        }
        "typography.fontFamily.sans" => {
            config.typography.font_family.sans = value.to_string();
        }
        "typography.fontFamily.serif" => {
            config.typography.font_family.serif = value.to_string();
        }
        "typography.fontFamily.mono" => {
            config.typography.font_family.mono = value.to_string();
        }
        "typography.baseFontFamily" => {
            config.typography.base_font_family = value.to_string();
        }
        "typography.weights.thin" => {
            config.typography.weights.thin = value
                .parse()
                .context("typography.weights.thin must be a number")?;
        }
        "typography.weights.extraLight" => {
            config.typography.weights.extra_light = value
                .parse()
                .context("typography.weights.extraLight must be a number")?;
        }
        "typography.weights.light" => {
            config.typography.weights.light = value
                .parse()
                .context("typography.weights.light must be a number")?;
        }
        "typography.weights.normal" => {
            config.typography.weights.normal = value
                .parse()
                .context("typography.weights.normal must be a number")?;
        }
        "typography.weights.medium" => {
            config.typography.weights.medium = value
                .parse()
                .context("typography.weights.medium must be a number")?;
        }
        "typography.weights.semibold" => {
            config.typography.weights.semibold = value
                .parse()
                .context("typography.weights.semibold must be a number")?;
        }
        "typography.weights.bold" => {
            config.typography.weights.bold = value
                .parse()
                .context("typography.weights.bold must be a number")?;
        }
        "ui.borderRadius.none" => {
            config.ui.border_radius.none = value.to_string();
        }
        "ui.borderRadius.sm" => {
            config.ui.border_radius.sm = value.to_string();
        }
        "ui.borderRadius.md" => {
            config.ui.border_radius.md = value.to_string();
        }
        "ui.borderRadius.lg" => {
            config.ui.border_radius.lg = value.to_string();
        }
        "ui.borderRadius.xl" => {
            config.ui.border_radius.xl = value.to_string();
        }
        "ui.borderRadius.full" => {
            config.ui.border_radius.full = value.to_string();
        }
        "ui.activeBorderRadius" => {
            config.ui.active_border_radius = value.to_string();
        }
        "ui.spacing" => {
            config.ui.spacing = value.parse().context("ui.spacing must be a number")?;
        }
        "ui.shadowIntensity" => {
            config.ui.shadow_intensity = value.to_string();
        }
        "theme" => {
            config.theme = value.to_string();
        }
        "brandName" => {
            config.brand_name = value.to_string();
        }
        "brandDescription" => {
            config.brand_description = value.to_string();
        }
        _ => return Err(anyhow::anyhow!("Unknown token path: {}", path)),
    }

    Ok(())
}
