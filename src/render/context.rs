//! Render context resolution.
//!
//! Gathers everything a renderer needs into one immutable value: the
//! filtered document, the effective theme, the three stylesheet blobs,
//! and the standalone flag.

use std::path::Path;

use crate::document::Document;
use crate::error::{BksError, Result};
use crate::package::{CssConfig, LoadedPackage};
use crate::theme::Theme;

use super::html;

/// The three stylesheet blobs consumed by the HTML renderer.
///
/// Each is either read from a path declared in the package's `css` key
/// or taken from the built-in defaults.
#[derive(Debug, Clone)]
pub struct Stylesheets {
    /// Page chrome for standalone documents.
    pub standalone: String,
    /// Core typography.
    pub core: String,
    /// Code block styling.
    pub code: String,
}

impl Default for Stylesheets {
    fn default() -> Self {
        Self {
            standalone: html::DEFAULT_STANDALONE_CSS.to_string(),
            core: html::DEFAULT_CORE_CSS.to_string(),
            code: html::DEFAULT_CODE_CSS.to_string(),
        }
    }
}

impl Stylesheets {
    /// Resolve a package's `css` key into concrete blobs.
    ///
    /// A bare string overrides only the core stylesheet. Relative paths
    /// resolve against the package's base directory.
    pub fn resolve(spec: Option<&CssConfig>, base_dir: &Path) -> Result<Stylesheets> {
        let (standalone, core, code) = match spec {
            None => (None, None, None),
            Some(CssConfig::Core(path)) => (None, Some(path.as_str()), None),
            Some(CssConfig::Sections {
                standalone,
                core,
                code,
            }) => (
                standalone.as_deref(),
                core.as_deref(),
                code.as_deref(),
            ),
        };

        Ok(Stylesheets {
            standalone: read_or_default(standalone, base_dir, html::DEFAULT_STANDALONE_CSS)?,
            core: read_or_default(core, base_dir, html::DEFAULT_CORE_CSS)?,
            code: read_or_default(code, base_dir, html::DEFAULT_CODE_CSS)?,
        })
    }
}

fn read_or_default(path: Option<&str>, base_dir: &Path, default: &str) -> Result<String> {
    let Some(path) = path else {
        return Ok(default.to_string());
    };

    let resolved = if Path::new(path).is_absolute() {
        Path::new(path).to_path_buf()
    } else {
        base_dir.join(path)
    };

    std::fs::read_to_string(&resolved).map_err(|e| BksError::Io {
        path: resolved,
        message: format!("Failed to read stylesheet: {}", e),
    })
}

/// Everything a renderer needs, resolved once before dispatch.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub document: Document,
    pub theme: Theme,
    pub stylesheets: Stylesheets,

    /// False in fragment mode; suppresses the standalone HTML shell.
    pub standalone: bool,
}

impl RenderContext {
    /// Build the context for one render.
    ///
    /// The document is expected to be fully parsed and filtered.
    pub fn resolve(document: Document, loaded: &LoadedPackage, fragment: bool) -> Result<Self> {
        let theme = Theme::resolve(loaded.standalone_input, &document, &loaded.package);
        let stylesheets = Stylesheets::resolve(loaded.package.css.as_ref(), &loaded.base_dir)?;

        Ok(Self {
            document,
            theme,
            stylesheets,
            standalone: !fragment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::Package;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn loaded_with_css(css: Option<CssConfig>, base_dir: PathBuf) -> LoadedPackage {
        LoadedPackage {
            package: Package {
                sources: vec!["a".to_string()],
                css,
                ..Default::default()
            },
            base_dir,
            standalone_input: false,
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let sheets = Stylesheets::resolve(None, Path::new(".")).unwrap();

        assert_eq!(sheets.standalone, html::DEFAULT_STANDALONE_CSS);
        assert_eq!(sheets.core, html::DEFAULT_CORE_CSS);
        assert_eq!(sheets.code, html::DEFAULT_CODE_CSS);
    }

    #[test]
    fn test_resolve_core_shorthand() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("site.css"), "body { color: red }").unwrap();

        let spec = CssConfig::Core("site.css".to_string());
        let sheets = Stylesheets::resolve(Some(&spec), dir.path()).unwrap();

        assert_eq!(sheets.core, "body { color: red }");
        // Shorthand only replaces the core sheet.
        assert_eq!(sheets.standalone, html::DEFAULT_STANDALONE_CSS);
        assert_eq!(sheets.code, html::DEFAULT_CODE_CSS);
    }

    #[test]
    fn test_resolve_sections() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("code.css"), "pre { margin: 0 }").unwrap();

        let spec = CssConfig::Sections {
            standalone: None,
            core: None,
            code: Some("code.css".to_string()),
        };
        let sheets = Stylesheets::resolve(Some(&spec), dir.path()).unwrap();

        assert_eq!(sheets.code, "pre { margin: 0 }");
        assert_eq!(sheets.core, html::DEFAULT_CORE_CSS);
    }

    #[test]
    fn test_resolve_missing_stylesheet() {
        let spec = CssConfig::Core("missing.css".to_string());
        let err = Stylesheets::resolve(Some(&spec), Path::new("/nonexistent")).unwrap_err();

        assert!(matches!(err, BksError::Io { .. }));
    }

    #[test]
    fn test_context_standalone_is_inverse_of_fragment() {
        let loaded = loaded_with_css(None, PathBuf::from("."));

        let ctx = RenderContext::resolve(Document::default(), &loaded, true).unwrap();
        assert!(!ctx.standalone);

        let ctx = RenderContext::resolve(Document::default(), &loaded, false).unwrap();
        assert!(ctx.standalone);
    }

    #[test]
    fn test_context_reads_css_from_base_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("site.css"), "main { padding: 0 }").unwrap();

        let loaded = loaded_with_css(
            Some(CssConfig::Core("site.css".to_string())),
            dir.path().to_path_buf(),
        );
        let ctx = RenderContext::resolve(Document::default(), &loaded, false).unwrap();

        assert_eq!(ctx.stylesheets.core, "main { padding: 0 }");
    }
}
