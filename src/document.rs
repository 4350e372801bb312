//! The structured document produced by the bks parser.
//!
//! A document is a metadata header plus an ordered list of body blocks.
//! The whole tree serializes with serde, which is what the json and kfg
//! renderers rely on.

use serde::{Deserialize, Serialize};

use crate::theme::ThemeConfig;

/// Metadata header of a document.
///
/// Parsed from the optional YAML section between `---` markers at the top
/// of a source file. Documents without a header get an empty default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Document title, used for the HTML `<title>` element.
    pub title: Option<String>,

    /// Document author.
    pub author: Option<String>,

    /// Embedded theme parameters.
    ///
    /// Only honoured for standalone input; a package descriptor's `theme`
    /// key always takes precedence over this.
    pub theme: Option<ThemeConfig>,
}

/// A single body block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    /// Section heading, levels 1-6.
    Heading { level: u8, text: String },

    /// Plain prose paragraph.
    Paragraph { text: String },

    /// Unordered list.
    List { items: Vec<String> },

    /// Quoted passage, one entry per source line.
    Quote { lines: Vec<String> },

    /// Fenced code block with an optional language tag.
    Code {
        language: Option<String>,
        source: String,
    },
}

/// A parsed bks document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub meta: Metadata,
    pub blocks: Vec<Block>,
}

impl Document {
    /// Effective document title, falling back to the first heading.
    pub fn title(&self) -> Option<&str> {
        if let Some(title) = &self.meta.title {
            return Some(title);
        }
        self.blocks.iter().find_map(|block| match block {
            Block::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
