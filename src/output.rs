//! Output sink and terminal status formatting.
//!
//! The rendered artifact goes to stdout or to the requested file; stdout
//! is reserved for it exclusively. Status lines use Cargo-style
//! right-aligned coloured verbs and go to stderr.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::error::{BksError, Result};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Write the rendered string to stdout, exactly as produced.
pub fn write_stdout(rendered: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Write the rendered string to a file as UTF-8, overwriting.
pub fn write_file(rendered: &str, path: &Path) -> Result<()> {
    fs::write(path, rendered).map_err(|e| BksError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write output: {}", e),
    })
}

/// Terminal-aware status printer.
///
/// Prints Cargo-style status lines to stderr with optional ANSI
/// colours. Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "    Rendered book.kfg (2 sources) -> book.html"
    pub fn status(&self, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{GREEN}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "source", "sources")` → "1 source".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}
