//! CSS custom-property exporter

use crate::config::TokenConfig;
use crate::view;

/// Render the token configuration as a `:root` variable block
///
/// Emits the nine live variables followed by the resolved active radius and
/// the spacing unit in rem.
pub fn render(config: &TokenConfig) -> String {
    let mut lines = Vec::with_capacity(13);
    lines.push(":root {".to_string());
    for (name, value) in view::root_variables(config) {
        lines.push(format!("  {}: {};", name, value));
    }
    lines.push(format!(
        "  --border-radius: {};",
        view::resolve_radius(config, None)
    ));
    lines.push(format!("  --spacing: {}rem;", config.ui.spacing));
    lines.push("}".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default() {
        let css = render(&TokenConfig::default());
        assert!(css.starts_with(":root {\n  --primary-400: #3B85FF;"));
        assert!(css.contains("  --border-radius: 0.5rem;"));
        assert!(css.contains("  --spacing: 1rem;"));
        assert!(css.ends_with("}"));
    }

    #[test]
    fn test_render_has_one_declaration_per_line() {
        let css = render(&TokenConfig::default());
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], ":root {");
        assert_eq!(lines[12], "}");
        for line in &lines[1..12] {
            assert!(line.starts_with("  --"));
            assert!(line.ends_with(';'));
        }
    }

    #[test]
    fn test_render_resolves_active_radius() {
        let mut config = TokenConfig::default();
        config.ui.active_border_radius = "full".to_string();
        let css = render(&config);
        assert!(css.contains("  --border-radius: 9999px;"));
    }

    #[test]
    fn test_spacing_formats_without_trailing_zero() {
        let mut config = TokenConfig::default();
        config.ui.spacing = 1.25;
        let css = render(&config);
        assert!(css.contains("  --spacing: 1.25rem;"));

        config.ui.spacing = 2.0;
        let css = render(&config);
        assert!(css.contains("  --spacing: 2rem;"));
    }
}
