//! Tailwind theme-extension exporter

use crate::config::TokenConfig;
use crate::view;

/// Render the token configuration as a Tailwind `module.exports` block
///
/// Colors map into `theme.extend.colors`, font stacks become quoted arrays,
/// and the resolved radius and spacing land under the `'design'` key.
pub fn render(config: &TokenConfig) -> String {
    let colors = &config.colors;
    let fonts = &config.typography.font_family;

    let mut lines = Vec::with_capacity(36);
    lines.push("module.exports = {".to_string());
    lines.push("  theme: {".to_string());
    lines.push("    extend: {".to_string());
    lines.push("      colors: {".to_string());
    lines.push("        primary: {".to_string());
    lines.push(format!("          400: '{}',", colors.primary.shade_400));
    lines.push(format!("          600: '{}',", colors.primary.shade_600));
    lines.push("        },".to_string());
    lines.push("        accent: {".to_string());
    lines.push(format!("          400: '{}',", colors.accent.shade_400));
    lines.push(format!("          600: '{}',", colors.accent.shade_600));
    lines.push("        },".to_string());
    lines.push("        surface: {".to_string());
    lines.push(format!("          bg: '{}',", colors.surface.bg));
    lines.push(format!("          main: '{}',", colors.surface.main));
    lines.push("        },".to_string());
    lines.push("        text: {".to_string());
    lines.push(format!("          primary: '{}',", colors.text.primary));
    lines.push(format!("          secondary: '{}',", colors.text.secondary));
    lines.push(format!("          muted: '{}',", colors.text.muted));
    lines.push("        }".to_string());
    lines.push("      },".to_string());
    lines.push("      fontFamily: {".to_string());
    lines.push(format!("        sans: [{}],", quote_font_list(&fonts.sans)));
    lines.push(format!("        serif: [{}],", quote_font_list(&fonts.serif)));
    lines.push(format!("        mono: [{}],", quote_font_list(&fonts.mono)));
    lines.push("      },".to_string());
    lines.push("      borderRadius: {".to_string());
    lines.push(format!(
        "        'design': '{}',",
        view::resolve_radius(config, None)
    ));
    lines.push("      },".to_string());
    lines.push("      spacing: {".to_string());
    lines.push(format!("        'design': '{}rem',", config.ui.spacing));
    lines.push("      }".to_string());
    lines.push("    }".to_string());
    lines.push("  }".to_string());
    lines.push("}".to_string());
    lines.join("\n")
}

/// Split a comma-separated font stack into quoted array elements
///
/// Each piece is trimmed but otherwise kept verbatim, so empty segments
/// survive as `''`.
fn quote_font_list(stack: &str) -> String {
    stack
        .split(',')
        .map(|font| format!("'{}'", font.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}
