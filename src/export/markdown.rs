//! Markdown design-system document exporter

use crate::config::TokenConfig;
use crate::export::{css, tailwind};
use crate::view;
use chrono::{DateTime, SecondsFormat, Utc};

/// Render the full design-system document
///
/// The document embeds the CSS and Tailwind artifacts in fenced blocks and
/// closes with a derived vibe summary and a session timestamp. The timestamp
/// is injected so rendering stays deterministic; the delivery layer passes
/// the current time.
pub fn render(config: &TokenConfig, generated_at: DateTime<Utc>) -> String {
    let weights_list = config
        .typography
        .weights
        .entries()
        .iter()
        .map(|(name, weight)| format!("- **{}**: {}", name, weight))
        .collect::<Vec<_>>()
        .join("\n");

    let radii_list = config
        .ui
        .border_radius
        .entries()
        .iter()
        .map(|(name, value)| format!("- {}: {}", name, value))
        .collect::<Vec<_>>()
        .join("\n");

    let theme_label = if config.theme == "dark" {
        "Dark mode optimized"
    } else {
        "Light mode optimized"
    };
    let style_label = if matches!(config.ui.active_border_radius.as_str(), "none" | "sm") {
        "Sharp, modern"
    } else {
        "Rounded, friendly"
    };
    let weight_label = if config.typography.weights.normal <= 300 {
        "Thin and elegant"
    } else {
        "Bold and impactful"
    };

    format!(
        "# {brand_name} Design System

{brand_description}

## Color Palette

### Primary Colors
- **Primary 400**: `{primary_400}` - Main brand color, used for primary actions
- **Primary 600**: `{primary_600}` - Darker shade for hover states

### Accent Colors
- **Accent 400**: `{accent_400}` - Secondary accent, used for highlights
- **Accent 600**: `{accent_600}` - Darker accent for emphasis

### Surface Colors
- **Background**: `{surface_bg}` - Main background color
- **Surface**: `{surface_main}` - Card and component backgrounds

### Text Colors
- **Primary Text**: `{text_primary}` - Main text color
- **Secondary Text**: `{text_secondary}` - Subdued text
- **Muted Text**: `{text_muted}` - Placeholder and disabled text

## Typography

### Font Families
- **Sans-serif**: {sans}
- **Serif**: {serif}
- **Monospace**: {mono}

### Active Font Family
{base_font_family}

### Font Weights
{weights_list}

## UI Configuration

### Border Radius
Active style: **{active_radius_name}** ({active_radius_value})

Available radii:
{radii_list}

### Spacing Scale
Base spacing: **{spacing}rem**

### Shadow Intensity
**{shadow_intensity}**

## Component Guidelines

### Buttons
- **Primary**: Use primary-400 background with white text
- **Secondary**: Use surface background with border
- **Outline**: Transparent background with colored border
- **Ghost**: Transparent with hover state

### Form Elements
- Input fields: surface background with border on focus
- Dropdowns: Match input styling with chevron icon
- Checkboxes/Radio: Use accent color for active state
- Toggles: accent-400 for active, gray for inactive

### Cards
- Background: surface color
- Border: Subtle border using muted text color at 20% opacity
- Shadow: Based on shadow intensity setting
- Padding: Based on spacing scale

### Tables
- Header: Slightly lighter surface background
- Rows: Hover state with subtle background change
- Borders: Minimal, using muted colors
- Text: Primary for main content, secondary for metadata

## CSS Variables

```css
{css_block}
```

## Tailwind Configuration

```javascript
{tailwind_block}
```

## Design Vibe

{brand_description}

**Theme**: {theme_label}
**Visual Style**: {style_label}
**Typography Weight**: {weight_label}

---

*Generated by tokensmith*
*Session: {session}*
",
        brand_name = config.brand_name,
        brand_description = config.brand_description,
        primary_400 = config.colors.primary.shade_400,
        primary_600 = config.colors.primary.shade_600,
        accent_400 = config.colors.accent.shade_400,
        accent_600 = config.colors.accent.shade_600,
        surface_bg = config.colors.surface.bg,
        surface_main = config.colors.surface.main,
        text_primary = config.colors.text.primary,
        text_secondary = config.colors.text.secondary,
        text_muted = config.colors.text.muted,
        sans = config.typography.font_family.sans,
        serif = config.typography.font_family.serif,
        mono = config.typography.font_family.mono,
        base_font_family = config.typography.base_font_family,
        weights_list = weights_list,
        active_radius_name = config.ui.active_border_radius,
        active_radius_value = view::resolve_radius(config, None),
        radii_list = radii_list,
        spacing = config.ui.spacing,
        shadow_intensity = config.ui.shadow_intensity,
        css_block = css::render(config),
        tailwind_block = tailwind::render(config),
        theme_label = theme_label,
        style_label = style_label,
        weight_label = weight_label,
        session = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 45).unwrap()
    }

    #[test]
    fn test_render_default_document() {
        let md = render(&TokenConfig::default(), session_time());
        assert!(md.starts_with("# Nova UI Design System\n"));
        assert!(
            md.contains("- **Primary 400**: `#3B85FF` - Main brand color, used for primary actions")
        );
        assert!(md.contains("- **extraLight**: 200"));
        assert!(md.contains("Active style: **md** (0.5rem)"));
        assert!(md.contains("- full: 9999px"));
        assert!(md.contains("Base spacing: **1rem**"));
        assert!(md.contains("*Session: 2025-06-01T12:30:45.000Z*"));
        assert!(md.ends_with("*\n"));
    }

    #[test]
    fn test_render_embeds_artifacts() {
        let config = TokenConfig::default();
        let md = render(&config, session_time());
        assert!(md.contains("```css\n:root {\n"));
        assert!(md.contains("```javascript\nmodule.exports = {\n"));
        // The embedded blocks match the standalone exporters
        assert!(md.contains(&css::render(&config)));
        assert!(md.contains(&tailwind::render(&config)));
    }

    #[test]
    fn test_vibe_labels_for_defaults() {
        let md = render(&TokenConfig::default(), session_time());
        assert!(md.contains("**Theme**: Dark mode optimized"));
        assert!(md.contains("**Visual Style**: Rounded, friendly"));
        assert!(md.contains("**Typography Weight**: Bold and impactful"));
    }

    #[test]
    fn test_vibe_labels_follow_config() {
        let mut config = TokenConfig::default();
        config.theme = "light".to_string();
        config.ui.active_border_radius = "sm".to_string();
        config.typography.weights.normal = 200;

        let md = render(&config, session_time());
        assert!(md.contains("**Theme**: Light mode optimized"));
        assert!(md.contains("**Visual Style**: Sharp, modern"));
        assert!(md.contains("**Typography Weight**: Thin and elegant"));
    }

    #[test]
    fn test_weight_boundary_at_300() {
        let mut config = TokenConfig::default();
        config.typography.weights.normal = 300;
        let md = render(&config, session_time());
        assert!(md.contains("**Typography Weight**: Thin and elegant"));

        config.typography.weights.normal = 301;
        let md = render(&config, session_time());
        assert!(md.contains("**Typography Weight**: Bold and impactful"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = TokenConfig::default();
        let first = render(&config, session_time());
        let second = render(&config, session_time());
        assert_eq!(first, second);
    }
}
