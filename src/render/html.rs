//! HTML rendering.
//!
//! Standalone mode emits a full HTML5 page: head with the document
//! title, theme variables as CSS custom properties, and the three
//! stylesheet blobs. Fragment mode emits the rendered blocks only, for
//! embedding in a host page.
//!
//! Code blocks are highlighted with syntect, keyed by the fence's
//! language tag; unrecognized tags fall back to an escaped plain block.

use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::document::{Block, Document};
use crate::error::{BksError, Result};
use crate::theme::Theme;

use super::{RenderContext, Renderer};

/// Built-in page chrome for standalone documents.
pub(crate) const DEFAULT_STANDALONE_CSS: &str = "\
html {
  background: var(--bks-background);
}
body {
  margin: 0;
  padding: 2rem 1rem;
  display: flex;
  justify-content: center;
}
main.bks-document {
  width: 100%;
  max-width: var(--bks-measure);
}
";

/// Built-in core typography.
pub(crate) const DEFAULT_CORE_CSS: &str = "\
.bks-document {
  color: var(--bks-foreground);
  font-family: var(--bks-body-font);
  line-height: 1.6;
}
.bks-document h1,
.bks-document h2,
.bks-document h3,
.bks-document h4,
.bks-document h5,
.bks-document h6 {
  color: var(--bks-accent);
  line-height: 1.25;
}
.bks-document ul {
  padding-left: 1.5rem;
}
.bks-document blockquote {
  margin: 1rem 0;
  padding-left: 1rem;
  border-left: 3px solid var(--bks-accent);
  font-style: italic;
}
";

/// Built-in code block styling.
pub(crate) const DEFAULT_CODE_CSS: &str = "\
.bks-document pre {
  font-family: var(--bks-code-font);
  font-size: 0.9rem;
  line-height: 1.45;
  padding: 1rem;
  border-radius: 6px;
  overflow-x: auto;
}
.bks-document code {
  font-family: var(--bks-code-font);
}
";

/// Highlighting theme used when the requested one is not installed.
const FALLBACK_CODE_THEME: &str = "InspiredGitHub";

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let body = render_blocks(&context.document, &context.theme)?;

        if !context.standalone {
            return Ok(body);
        }

        Ok(standalone_page(context, &body))
    }
}

fn render_blocks(document: &Document, theme: &Theme) -> Result<String> {
    let highlighter = Highlighter::new();
    let mut out = String::new();

    for block in &document.blocks {
        match block {
            Block::Heading { level, text } => {
                let level = (*level).clamp(1, 6);
                out.push_str(&format!(
                    "<h{level}>{}</h{level}>\n",
                    html_escape::encode_text(text)
                ));
            }
            Block::Paragraph { text } => {
                out.push_str(&format!("<p>{}</p>\n", html_escape::encode_text(text)));
            }
            Block::List { items } => {
                out.push_str("<ul>\n");
                for item in items {
                    out.push_str(&format!("<li>{}</li>\n", html_escape::encode_text(item)));
                }
                out.push_str("</ul>\n");
            }
            Block::Quote { lines } => {
                out.push_str("<blockquote>\n");
                for line in lines.iter().filter(|l| !l.is_empty()) {
                    out.push_str(&format!("<p>{}</p>\n", html_escape::encode_text(line)));
                }
                out.push_str("</blockquote>\n");
            }
            Block::Code { language, source } => {
                out.push_str(&highlighter.highlight(
                    language.as_deref(),
                    source,
                    &theme.code_theme,
                )?);
            }
        }
    }

    Ok(out)
}

fn standalone_page(context: &RenderContext, body: &str) -> String {
    let title = context.document.title().unwrap_or("bks document");
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    page.push_str(&format!(
        "<title>{}</title>\n",
        html_escape::encode_text(title)
    ));
    if let Some(author) = &context.document.meta.author {
        page.push_str(&format!(
            "<meta name=\"author\" content=\"{}\">\n",
            html_escape::encode_double_quoted_attribute(author)
        ));
    }

    push_style(&mut page, &theme_variables(&context.theme));
    push_style(&mut page, &context.stylesheets.standalone);
    push_style(&mut page, &context.stylesheets.core);
    push_style(&mut page, &context.stylesheets.code);

    page.push_str("</head>\n<body>\n<main class=\"bks-document\">\n");
    page.push_str(body);
    page.push_str("</main>\n</body>\n</html>\n");

    page
}

fn push_style(page: &mut String, css: &str) {
    page.push_str("<style>\n");
    page.push_str(css);
    if !css.ends_with('\n') {
        page.push('\n');
    }
    page.push_str("</style>\n");
}

/// Theme parameters exposed to the stylesheets as custom properties.
fn theme_variables(theme: &Theme) -> String {
    format!(
        ":root {{\n  --bks-foreground: {};\n  --bks-background: {};\n  --bks-accent: {};\n  --bks-body-font: {};\n  --bks-code-font: {};\n  --bks-measure: {};\n}}\n",
        theme.foreground,
        theme.background,
        theme.accent,
        theme.body_font,
        theme.code_font,
        theme.measure,
    )
}

/// Code block highlighter, built once per render.
struct Highlighter {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl Highlighter {
    fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }

    /// Highlight one code block, keyed by its language tag.
    fn highlight(&self, language: Option<&str>, source: &str, theme_name: &str) -> Result<String> {
        let syntax = language.and_then(|token| self.syntaxes.find_syntax_by_token(token));

        let Some(syntax) = syntax else {
            return Ok(format!(
                "<pre><code>{}</code></pre>\n",
                html_escape::encode_text(source)
            ));
        };

        let theme = self
            .themes
            .themes
            .get(theme_name)
            .or_else(|| self.themes.themes.get(FALLBACK_CODE_THEME))
            .ok_or_else(|| BksError::Parse {
                message: format!("Unknown highlighting theme '{}'", theme_name),
                help: None,
            })?;

        highlighted_html_for_string(source, &self.syntaxes, syntax, theme).map_err(|e| {
            BksError::Parse {
                message: format!("Failed to highlight code block: {}", e),
                help: None,
            }
        })
    }
}
