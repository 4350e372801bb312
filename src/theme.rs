//! Theme resolution for the HTML renderer.
//!
//! A theme is a small set of rendering parameters (colours, font stacks,
//! content measure, highlighting theme). Themes come from a package
//! descriptor's `theme` key, from a standalone document's embedded `theme`
//! metadata, or fall back to the built-in default.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::package::Package;

/// Raw theme parameters as they appear in a descriptor or document header.
///
/// Every field is optional; unset fields fall back to the default theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub accent: Option<String>,
    pub body_font: Option<String>,
    pub code_font: Option<String>,
    pub measure: Option<String>,
    pub code_theme: Option<String>,
}

/// Fully resolved theme consumed by the HTML renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Body text colour.
    pub foreground: String,
    /// Page background colour.
    pub background: String,
    /// Accent colour for headings and links.
    pub accent: String,
    /// Font stack for prose.
    pub body_font: String,
    /// Font stack for code blocks.
    pub code_font: String,
    /// Maximum content width.
    pub measure: String,
    /// Name of the syntax-highlighting theme for code blocks.
    pub code_theme: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: "#1f2328".to_string(),
            background: "#ffffff".to_string(),
            accent: "#0969da".to_string(),
            body_font: "Georgia, 'Iowan Old Style', serif".to_string(),
            code_font: "'SF Mono', Menlo, Consolas, monospace".to_string(),
            measure: "42rem".to_string(),
            code_theme: "InspiredGitHub".to_string(),
        }
    }
}

impl Theme {
    /// Build a theme from raw parameters, defaulting unset fields.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let defaults = Theme::default();
        Self {
            foreground: config.foreground.clone().unwrap_or(defaults.foreground),
            background: config.background.clone().unwrap_or(defaults.background),
            accent: config.accent.clone().unwrap_or(defaults.accent),
            body_font: config.body_font.clone().unwrap_or(defaults.body_font),
            code_font: config.code_font.clone().unwrap_or(defaults.code_font),
            measure: config.measure.clone().unwrap_or(defaults.measure),
            code_theme: config.code_theme.clone().unwrap_or(defaults.code_theme),
        }
    }

    /// Pick the effective theme for a render.
    ///
    /// Standalone input honours the document's embedded theme metadata;
    /// package input only honours the descriptor's `theme` key, so an
    /// embedded document theme can never override a package's choice.
    pub fn resolve(standalone_input: bool, document: &Document, package: &Package) -> Self {
        let config = if standalone_input {
            document.meta.theme.as_ref()
        } else {
            package.theme.as_ref()
        };

        config.map(Theme::from_config).unwrap_or_default()
    }
}
