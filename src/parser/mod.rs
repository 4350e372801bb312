//! Parser for bks markup documents.
//!
//! # Document Structure
//!
//! A document has:
//! - An optional YAML metadata header between `---` markers (title,
//!   author, embedded theme)
//! - A body of blocks: headings, paragraphs, unordered lists, quotes,
//!   and fenced code blocks
//!
//! # Usage
//!
//! ```ignore
//! use bks::parser::parse_document;
//!
//! let source = std::fs::read_to_string("chapters/intro.bks")?;
//! let document = parse_document(&source)?;
//!
//! println!("{} block(s)", document.blocks.len());
//! ```

mod block;
mod metadata;

pub use block::parse_blocks;
pub use metadata::extract_metadata;

use crate::document::Document;
use crate::error::Result;

/// Parse a raw content blob into a structured document.
///
/// The metadata header is parsed with the same configuration-language
/// parser used for package descriptors.
pub fn parse_document(source: &str) -> Result<Document> {
    let (meta, body) = extract_metadata(source)?;
    let blocks = parse_blocks(body);

    Ok(Document { meta, blocks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Block;

    #[test]
    fn test_parse_full_document() {
        let source = r#"---
title: Field Notes
author: M. Reyes
---

# Day One

Arrived at the station before dawn. The generators were
still running.

- fuel: 80%
- water: full

> Nothing moves out here.

```rust
fn main() {}
```
"#;

        let doc = parse_document(source).unwrap();

        assert_eq!(doc.meta.title.as_deref(), Some("Field Notes"));
        assert_eq!(doc.meta.author.as_deref(), Some("M. Reyes"));
        assert_eq!(doc.blocks.len(), 5);
        assert_eq!(
            doc.blocks[0],
            Block::Heading {
                level: 1,
                text: "Day One".to_string()
            }
        );
        assert!(matches!(doc.blocks[1], Block::Paragraph { .. }));
        assert!(matches!(doc.blocks[2], Block::List { .. }));
        assert!(matches!(doc.blocks[3], Block::Quote { .. }));
        assert!(matches!(doc.blocks[4], Block::Code { .. }));
    }

    #[test]
    fn test_parse_document_without_metadata() {
        let doc = parse_document("# Title\n\nBody text.\n").unwrap();

        assert_eq!(doc.meta, Default::default());
        assert_eq!(doc.blocks.len(), 2);
    }

    #[test]
    fn test_parse_document_with_embedded_theme() {
        let source = "---\ntitle: T\ntheme:\n  accent: \"#bf3989\"\n---\nBody.\n";

        let doc = parse_document(source).unwrap();
        let theme = doc.meta.theme.unwrap();

        assert_eq!(theme.accent.as_deref(), Some("#bf3989"));
    }

    #[test]
    fn test_parse_empty_document() {
        let doc = parse_document("").unwrap();

        assert_eq!(doc.meta, Default::default());
        assert!(doc.blocks.is_empty());
    }

    #[test]
    fn test_parse_concatenated_sources() {
        // Two aggregated sources: only the leading header is metadata; a
        // later `---` line inside prose is ordinary body content.
        let source = "---\ntitle: Book\n---\nFirst chapter.\n# Second\nMore text.\n";

        let doc = parse_document(source).unwrap();

        assert_eq!(doc.meta.title.as_deref(), Some("Book"));
        assert_eq!(doc.blocks.len(), 3);
    }
}
