//! Rendering module for bks.
//!
//! Each output format is a `Renderer` implementation dispatched through
//! the `Format` enum. All per-render inputs are resolved into an
//! immutable `RenderContext` before any renderer runs.

mod context;
mod html;
mod inspect;
mod json;
mod kfg;

pub use context::{RenderContext, Stylesheets};
pub use html::HtmlRenderer;
pub use inspect::InspectRenderer;
pub use json::JsonRenderer;
pub use kfg::KfgRenderer;

use crate::error::{BksError, Result};

/// Output format tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Json,
    Kfg,
    Inspect,
}

impl Format {
    /// Parse a format name, case-insensitively.
    ///
    /// Unknown names are rejected here, at the argument boundary, so the
    /// renderer registry itself never sees user input.
    pub fn parse(name: &str) -> Result<Format> {
        match name.to_ascii_lowercase().as_str() {
            "html" => Ok(Format::Html),
            "json" => Ok(Format::Json),
            "kfg" => Ok(Format::Kfg),
            "inspect" => Ok(Format::Inspect),
            _ => Err(BksError::Usage {
                message: format!("Unsupported format '{}'", name),
                help: Some("Supported formats: html, json, kfg, inspect".to_string()),
            }),
        }
    }

    /// The renderer for this format.
    pub fn renderer(self) -> &'static dyn Renderer {
        match self {
            Format::Html => &HtmlRenderer,
            Format::Json => &JsonRenderer,
            Format::Kfg => &KfgRenderer,
            Format::Inspect => &InspectRenderer,
        }
    }
}

/// A renderer turns a resolved context into one output string.
pub trait Renderer {
    fn render(&self, context: &RenderContext) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Format::parse("HTML").unwrap(), Format::Html);
        assert_eq!(Format::parse("html").unwrap(), Format::Html);
        assert_eq!(Format::parse("Inspect").unwrap(), Format::Inspect);
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = Format::parse("xml").unwrap_err();

        assert!(matches!(err, BksError::Usage { .. }));
        assert!(err.to_string().contains("'xml'"));
    }

    #[test]
    fn test_every_format_has_a_renderer() {
        for format in [Format::Html, Format::Json, Format::Kfg, Format::Inspect] {
            // Dispatch must not panic.
            let _ = format.renderer();
        }
    }
}
