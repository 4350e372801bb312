//! Post-filter registry and application.
//!
//! Post-filters are named transformations applied to a document's prose
//! text before rendering. They touch headings, paragraphs, list items,
//! and quotes; code blocks and metadata are never filtered.
//!
//! Names are resolved before anything runs, so an unknown name fails the
//! whole invocation instead of silently passing through.

use crate::document::{Block, Document};
use crate::error::{BksError, Result};

/// A named prose transformation.
#[derive(Debug, Clone, Copy)]
pub struct PostFilter {
    /// Filter name as written in descriptors and on the command line.
    pub name: &'static str,

    /// One-line description for help output.
    pub description: &'static str,

    run: fn(&str) -> String,
}

impl PostFilter {
    /// Apply the filter to one piece of prose text.
    pub fn apply(&self, text: &str) -> String {
        (self.run)(text)
    }
}

const FILTERS: &[PostFilter] = &[
    PostFilter {
        name: "smart-quotes",
        description: "replace straight quotes with typographic quotes",
        run: smart_quotes,
    },
    PostFilter {
        name: "dashes",
        description: "replace -- and --- with en and em dashes",
        run: dashes,
    },
    PostFilter {
        name: "ellipsis",
        description: "replace ... with a horizontal ellipsis",
        run: ellipsis,
    },
];

/// The built-in post-filter table.
pub struct BuiltinFilters;

impl BuiltinFilters {
    /// All registered filters.
    pub fn all() -> &'static [PostFilter] {
        FILTERS
    }

    /// Look up a filter by name.
    pub fn get(name: &str) -> Option<&'static PostFilter> {
        Self::all().iter().find(|f| f.name == name)
    }

    /// All registered filter names, for help output.
    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(|f| f.name).collect()
    }
}

/// Resolve filter names into filters, in order.
///
/// Duplicates are kept; a duplicated name runs twice.
pub fn resolve(names: &[String]) -> Result<Vec<&'static PostFilter>> {
    names
        .iter()
        .map(|name| {
            BuiltinFilters::get(name).ok_or_else(|| BksError::Usage {
                message: format!("Unknown post-filter '{}'", name),
                help: Some(format!(
                    "Available post-filters:\n  {}",
                    BuiltinFilters::all()
                        .iter()
                        .map(|f| format!("{} - {}", f.name, f.description))
                        .collect::<Vec<_>>()
                        .join("\n  ")
                )),
            })
        })
        .collect()
}

/// Run each filter over the document's prose, in order.
pub fn apply(document: &mut Document, filters: &[&PostFilter]) {
    for filter in filters {
        for block in &mut document.blocks {
            match block {
                Block::Heading { text, .. } | Block::Paragraph { text } => {
                    *text = filter.apply(text);
                }
                Block::List { items } => {
                    for item in items {
                        *item = filter.apply(item);
                    }
                }
                Block::Quote { lines } => {
                    for line in lines {
                        *line = filter.apply(line);
                    }
                }
                Block::Code { .. } => {}
            }
        }
    }
}

fn smart_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;

    for c in text.chars() {
        let replaced = match c {
            '"' => {
                if opens_quote(prev) {
                    '\u{201c}'
                } else {
                    '\u{201d}'
                }
            }
            '\'' => {
                if opens_quote(prev) {
                    '\u{2018}'
                } else {
                    '\u{2019}'
                }
            }
            other => other,
        };
        out.push(replaced);
        prev = Some(c);
    }

    out
}

/// A quote opens after nothing, whitespace, or an opening bracket.
fn opens_quote(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, '(' | '[' | '{'),
    }
}

fn dashes(text: &str) -> String {
    // Longest match first so --- never becomes an en dash plus a hyphen.
    text.replace("---", "\u{2014}").replace("--", "\u{2013}")
}

fn ellipsis(text: &str) -> String {
    text.replace("...", "\u{2026}")
}
