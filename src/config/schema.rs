//! Design-token schema definitions
//!
//! Defines the shape of the token configuration using serde for serialization.
//! The persisted form uses camelCase keys and numeric shade names ("400", "600")
//! so existing token files remain readable by other tooling.

use serde::{Deserialize, Serialize};

/// Root token configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
    /// Color palette
    #[serde(default)]
    pub colors: ColorTokens,

    /// Typography settings
    #[serde(default)]
    pub typography: TypographyTokens,

    /// UI chrome parameters
    #[serde(default)]
    pub ui: UiTokens,

    /// Theme mode ("dark" or "light" by convention)
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Brand name used in exported documents
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    /// One-line brand description
    #[serde(default = "default_brand_description")]
    pub brand_description: String,
}

/// Color palette, grouped by role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorTokens {
    /// Primary brand colors
    pub primary: ColorScale,

    /// Accent colors
    pub accent: ColorScale,

    /// Background and surface colors
    pub surface: SurfaceColors,

    /// Text colors
    pub text: TextColors,
}

/// A two-shade color scale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorScale {
    /// Base shade
    #[serde(rename = "400")]
    pub shade_400: String,

    /// Darker shade for hover and emphasis
    #[serde(rename = "600")]
    pub shade_600: String,
}

/// Background and surface colors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfaceColors {
    /// Page background
    pub bg: String,

    /// Card and component surfaces
    pub main: String,
}

/// Text colors by prominence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub muted: String,
}

/// Typography settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    /// Named font stacks
    pub font_family: FontFamilies,

    /// Which font stack is active ("sans", "serif", or "mono")
    pub base_font_family: String,

    /// Named font weights
    pub weights: FontWeights,
}

/// Named font stacks, each a comma-separated CSS font list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontFamilies {
    pub sans: String,
    pub serif: String,
    pub mono: String,
}

impl FontFamilies {
    /// Look up a stack by name
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "sans" => Some(&self.sans),
            "serif" => Some(&self.serif),
            "mono" => Some(&self.mono),
            _ => None,
        }
    }
}

/// Named font weights
///
/// Values are conventional CSS weights (100-900) but the store does not
/// range-check them; `validate` reports out-of-range values as warnings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FontWeights {
    pub thin: u16,
    pub extra_light: u16,
    pub light: u16,
    pub normal: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

impl FontWeights {
    /// All weights in display order, with their serialized names
    pub fn entries(&self) -> [(&'static str, u16); 7] {
        [
            ("thin", self.thin),
            ("extraLight", self.extra_light),
            ("light", self.light),
            ("normal", self.normal),
            ("medium", self.medium),
            ("semibold", self.semibold),
            ("bold", self.bold),
        ]
    }
}

/// UI chrome parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiTokens {
    /// Named border radii
    pub border_radius: RadiusScale,

    /// Which radius is active ("none" through "full")
    pub active_border_radius: String,

    /// Base spacing unit in rem
    pub spacing: f64,

    /// Shadow level ("none", "small", "medium", or "large")
    pub shadow_intensity: String,
}

/// Named border radii, smallest to largest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RadiusScale {
    pub none: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    pub full: String,
}

impl RadiusScale {
    /// All radii in scale order, with their names
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("none", &self.none),
            ("sm", &self.sm),
            ("md", &self.md),
            ("lg", &self.lg),
            ("xl", &self.xl),
            ("full", &self.full),
        ]
    }

    /// Look up a radius value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "none" => Some(&self.none),
            "sm" => Some(&self.sm),
            "md" => Some(&self.md),
            "lg" => Some(&self.lg),
            "xl" => Some(&self.xl),
            "full" => Some(&self.full),
            _ => None,
        }
    }
}

// Default value functions
fn default_theme() -> String {
    "dark".to_string()
}

fn default_brand_name() -> String {
    "Nova UI".to_string()
}

fn default_brand_description() -> String {
    "A professional dark design system with blue and purple accents".to_string()
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            colors: ColorTokens::default(),
            typography: TypographyTokens::default(),
            ui: UiTokens::default(),
            theme: default_theme(),
            brand_name: default_brand_name(),
            brand_description: default_brand_description(),
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            primary: ColorScale {
                shade_400: "#3B85FF".to_string(),
                shade_600: "#0066BB".to_string(),
            },
            accent: ColorScale {
                shade_400: "#8533FF".to_string(),
                shade_600: "#6600CC".to_string(),
            },
            surface: SurfaceColors {
                bg: "#0A0A0A".to_string(),
                main: "#141414".to_string(),
            },
            text: TextColors {
                primary: "#FFFFFF".to_string(),
                secondary: "#A0A0A0".to_string(),
                muted: "#666666".to_string(),
            },
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: FontFamilies {
                sans: "Inter, system-ui, sans-serif".to_string(),
                serif: "Georgia, serif".to_string(),
                mono: "Monaco, monospace".to_string(),
            },
            base_font_family: "sans".to_string(),
            weights: FontWeights::default(),
        }
    }
}

impl Default for FontWeights {
    fn default() -> Self {
        Self {
            thin: 100,
            extra_light: 200,
            light: 300,
            normal: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
        }
    }
}

impl Default for UiTokens {
    fn default() -> Self {
        Self {
            border_radius: RadiusScale::default(),
            active_border_radius: "md".to_string(),
            spacing: 1.0,
            shadow_intensity: "medium".to_string(),
        }
    }
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            none: "0".to_string(),
            sm: "0.25rem".to_string(),
            md: "0.5rem".to_string(),
            lg: "0.75rem".to_string(),
            xl: "1rem".to_string(),
            full: "9999px".to_string(),
        }
    }
}
