//! bks - Markup document renderer
//!
//! A library for loading bks markup documents (or multi-document
//! packages), filtering them, and rendering them to HTML and other
//! formats.

pub mod cli;
pub mod document;
pub mod error;
pub mod filter;
pub mod output;
pub mod package;
pub mod parser;
pub mod render;
pub mod source;
pub mod theme;

pub use cli::{run, Cli};
pub use document::{Block, Document, Metadata};
pub use error::{BksError, Result};
pub use filter::{BuiltinFilters, PostFilter};
pub use package::{CssConfig, LoadedPackage, Package};
pub use parser::parse_document;
pub use render::{Format, RenderContext, Renderer, Stylesheets};
pub use theme::{Theme, ThemeConfig};
