//! Package descriptor loading.
//!
//! The tool accepts either a standalone `.bks` document or a package
//! descriptor (`.kfg` or `.json`) enumerating one or more sources plus
//! optional rendering parameters. Standalone input gets a synthesized
//! single-source package.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BksError, Result};
use crate::theme::ThemeConfig;

/// A package descriptor.
///
/// Recognized keys: `sources` (required, non-empty), `postFilters`,
/// `theme`, and `css`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    /// Source paths, resolved against the package's base directory.
    pub sources: Vec<String>,

    /// Post-filter names applied before any CLI-declared ones.
    #[serde(rename = "postFilters")]
    pub post_filters: Vec<String>,

    /// Theme parameters for the HTML renderer.
    pub theme: Option<ThemeConfig>,

    /// Stylesheet overrides.
    pub css: Option<CssConfig>,
}

/// Stylesheet configuration in a package descriptor.
///
/// A bare string is shorthand for overriding just the core stylesheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssConfig {
    /// Path to the core stylesheet.
    Core(String),

    /// Per-section stylesheet paths; unset sections use the built-ins.
    Sections {
        standalone: Option<String>,
        core: Option<String>,
        code: Option<String>,
    },
}

/// A loaded package plus the context needed to resolve its sources.
#[derive(Debug)]
pub struct LoadedPackage {
    pub package: Package,

    /// Directory that relative `sources` entries resolve against.
    pub base_dir: PathBuf,

    /// True when the input was a standalone `.bks` document rather than
    /// a descriptor. Controls whether embedded document themes apply.
    pub standalone_input: bool,
}

/// Load a package from the CLI source path.
///
/// The file extension decides the input mode. It is matched verbatim
/// after the final dot, so `.BKS` is not a bks document.
pub fn load(source: &Path) -> Result<LoadedPackage> {
    let ext = source.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "bks" => Ok(LoadedPackage {
            package: Package {
                sources: vec![source.display().to_string()],
                ..Default::default()
            },
            base_dir: PathBuf::from("."),
            standalone_input: true,
        }),
        "kfg" => {
            let content = read_descriptor(source)?;
            let package = serde_yaml::from_str(&content).map_err(|e| BksError::Parse {
                message: format!("Invalid package descriptor: {}", e),
                help: Some(format!("Check {} syntax", source.display())),
            })?;
            descriptor_package(package, source)
        }
        "json" => {
            let content = read_descriptor(source)?;
            let package = serde_json::from_str(&content).map_err(|e| BksError::Parse {
                message: format!("Invalid package descriptor: {}", e),
                help: Some(format!("Check {} syntax", source.display())),
            })?;
            descriptor_package(package, source)
        }
        _ => Err(BksError::Usage {
            message: format!("Cannot load file with extension .{}", ext),
            help: Some("Supported extensions: .bks, .kfg, .json".to_string()),
        }),
    }
}

fn read_descriptor(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| BksError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read package descriptor: {}", e),
    })
}

fn descriptor_package(package: Package, source: &Path) -> Result<LoadedPackage> {
    if package.sources.is_empty() {
        return Err(BksError::Usage {
            message: "No source specified in the package".to_string(),
            help: Some("Add a non-empty sources list to the descriptor".to_string()),
        });
    }

    let base_dir = source.parent().unwrap_or(Path::new(".")).to_path_buf();

    Ok(LoadedPackage {
        package,
        base_dir,
        standalone_input: false,
    })
}
