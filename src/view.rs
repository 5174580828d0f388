//! Derived values computed from the token configuration
//!
//! Resolvers turn the loosely-typed selector fields (shadow intensity,
//! active font stack, active radius) into concrete CSS values, falling back
//! to a sensible default when a selector names something unknown. The live
//! variable list is what an embedding layer reapplies on every change.

use crate::config::TokenConfig;

/// Shadow value for the "none" level
pub const SHADOW_NONE: &str = "none";
/// Shadow value for the "small" level
pub const SHADOW_SMALL: &str = "0 1px 2px 0 rgba(0, 0, 0, 0.3)";
/// Shadow value for the "medium" level
pub const SHADOW_MEDIUM: &str =
    "0 4px 6px -1px rgba(0, 0, 0, 0.5), 0 2px 4px -1px rgba(0, 0, 0, 0.3)";
/// Shadow value for the "large" level
pub const SHADOW_LARGE: &str =
    "0 10px 15px -3px rgba(0, 0, 0, 0.7), 0 4px 6px -2px rgba(0, 0, 0, 0.5)";

/// Resolve a shadow intensity name to its CSS box-shadow value
///
/// Unknown names resolve to the medium shadow.
pub fn resolve_shadow(intensity: &str) -> &'static str {
    match intensity {
        "none" => SHADOW_NONE,
        "small" => SHADOW_SMALL,
        "medium" => SHADOW_MEDIUM,
        "large" => SHADOW_LARGE,
        _ => SHADOW_MEDIUM,
    }
}

/// Resolve the active font stack
///
/// An unknown baseFontFamily resolves to the sans stack.
pub fn resolve_font_stack(config: &TokenConfig) -> &str {
    config
        .typography
        .font_family
        .get(&config.typography.base_font_family)
        .unwrap_or(&config.typography.font_family.sans)
}

/// Resolve a radius value by name, defaulting to the active radius
///
/// An unknown name resolves to the md value.
pub fn resolve_radius<'a>(config: &'a TokenConfig, name: Option<&str>) -> &'a str {
    let name = name.unwrap_or(&config.ui.active_border_radius);
    config
        .ui
        .border_radius
        .get(name)
        .unwrap_or(&config.ui.border_radius.md)
}

/// The nine live CSS custom properties, in application order
///
/// These are reapplied by subscribers on every mutation; the exporters add
/// `--border-radius` and `--spacing` on top of this list.
pub fn root_variables(config: &TokenConfig) -> [(&'static str, &str); 9] {
    let colors = &config.colors;
    [
        ("--primary-400", colors.primary.shade_400.as_str()),
        ("--primary-600", colors.primary.shade_600.as_str()),
        ("--accent-400", colors.accent.shade_400.as_str()),
        ("--accent-600", colors.accent.shade_600.as_str()),
        ("--surface-bg", colors.surface.bg.as_str()),
        ("--surface", colors.surface.main.as_str()),
        ("--text-primary", colors.text.primary.as_str()),
        ("--text-secondary", colors.text.secondary.as_str()),
        ("--text-muted", colors.text.muted.as_str()),
    ]
}
