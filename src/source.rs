//! Source aggregation.
//!
//! Resolves each package source entry against the base directory and
//! concatenates the file contents into one raw blob for the parser.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BksError, Result};

/// Read and concatenate all source files, in list order.
///
/// Relative entries are joined with `base_dir`; entries without an
/// extension get `.bks` appended. Contents are joined with a single
/// newline between consecutive sources. The first read failure aborts
/// the whole aggregation, reporting the entry as written in the package.
pub fn aggregate(sources: &[String], base_dir: &Path) -> Result<String> {
    let mut content = String::new();

    for (i, entry) in sources.iter().enumerate() {
        let path = resolve_entry(entry, base_dir);

        let text = fs::read_to_string(&path).map_err(|e| BksError::Io {
            path: PathBuf::from(entry),
            message: format!("Failed to read source: {}", e),
        })?;

        if i > 0 {
            content.push('\n');
        }
        content.push_str(&text);
    }

    Ok(content)
}

/// Resolve a single source entry to a readable path.
fn resolve_entry(entry: &str, base_dir: &Path) -> PathBuf {
    let mut path = PathBuf::from(entry);

    if !path.is_absolute() {
        path = base_dir.join(path);
    }

    if path.extension().is_none() {
        path.set_extension("bks");
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_appends_default_extension() {
        let path = resolve_entry("intro", Path::new("book"));
        assert_eq!(path, PathBuf::from("book/intro.bks"));
    }

    #[test]
    fn test_resolve_keeps_existing_extension() {
        let path = resolve_entry("notes.txt", Path::new("book"));
        assert_eq!(path, PathBuf::from("book/notes.txt"));
    }

    #[test]
    fn test_resolve_absolute_entry_ignores_base() {
        let path = resolve_entry("/srv/docs/intro.bks", Path::new("book"));
        assert_eq!(path, PathBuf::from("/srv/docs/intro.bks"));
    }

    #[test]
    fn test_aggregate_joins_with_single_newlines() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.bks"), "alpha").unwrap();
        fs::write(dir.path().join("b.bks"), "bravo").unwrap();
        fs::write(dir.path().join("c.bks"), "charlie").unwrap();

        let sources = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let content = aggregate(&sources, dir.path()).unwrap();

        // Exactly N-1 separators, in list order.
        assert_eq!(content, "alpha\nbravo\ncharlie");
    }

    #[test]
    fn test_aggregate_single_source() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("only.bks"), "solo\n").unwrap();

        let content = aggregate(&["only".to_string()], dir.path()).unwrap();
        assert_eq!(content, "solo\n");
    }

    #[test]
    fn test_aggregate_mixes_absolute_and_relative() {
        let dir = tempdir().unwrap();
        let other = tempdir().unwrap();
        fs::write(dir.path().join("a.bks"), "one").unwrap();
        let abs = other.path().join("b.bks");
        fs::write(&abs, "two").unwrap();

        let sources = vec!["a".to_string(), abs.display().to_string()];
        let content = aggregate(&sources, dir.path()).unwrap();

        assert_eq!(content, "one\ntwo");
    }

    #[test]
    fn test_aggregate_read_failure_names_original_entry() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.bks"), "one").unwrap();

        let sources = vec!["a".to_string(), "missing".to_string()];
        let err = aggregate(&sources, dir.path()).unwrap_err();

        // The unjoined entry, not the resolved path.
        match err {
            BksError::Io { path, .. } => assert_eq!(path, PathBuf::from("missing")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
