//! Metadata header extraction.

use crate::document::Metadata;
use crate::error::{BksError, Result};

/// Split the metadata header off a raw document.
///
/// A header is a YAML mapping between `---` marker lines at the very top
/// of the document. Returns the parsed metadata and the remaining body;
/// documents that do not open with `---` get default metadata and keep
/// their full content as body.
pub fn extract_metadata(source: &str) -> Result<(Metadata, &str)> {
    let trimmed = source.trim_start();

    if trimmed.lines().next().map(str::trim) != Some("---") {
        return Ok((Metadata::default(), source));
    }

    // Skip the opening marker line.
    let rest = match trimmed.find('\n') {
        Some(i) => &trimmed[i + 1..],
        None => "",
    };

    let closing = find_closing_marker(rest).ok_or_else(|| BksError::Parse {
        message: "Unclosed metadata header: missing closing ---".to_string(),
        help: Some("Add --- after the metadata".to_string()),
    })?;

    let meta = parse_metadata(&rest[..closing])?;

    // Body starts after the closing marker line.
    let after_closing = &rest[closing..];
    let body = match after_closing.find('\n') {
        Some(i) => &after_closing[i + 1..],
        None => "",
    };

    Ok((meta, body))
}

/// Find the byte offset of the closing `---` line.
fn find_closing_marker(s: &str) -> Option<usize> {
    let mut offset = 0;
    for line in s.lines() {
        if line.trim() == "---" {
            return Some(offset);
        }
        offset += line.len() + 1; // +1 for newline
    }
    None
}

fn parse_metadata(yaml: &str) -> Result<Metadata> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| BksError::Parse {
        message: format!("Invalid YAML in metadata header: {}", e),
        help: None,
    })?;

    match value {
        serde_yaml::Value::Null => Ok(Metadata::default()),
        value @ serde_yaml::Value::Mapping(_) => {
            serde_yaml::from_value(value).map_err(|e| BksError::Parse {
                message: format!("Invalid metadata header: {}", e),
                help: None,
            })
        }
        _ => Err(BksError::Parse {
            message: "Metadata header must be a YAML mapping".to_string(),
            help: Some("Use key: value format".to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_header() {
        let source = "---\ntitle: Notes\nauthor: M. Reyes\n---\nbody content";

        let (meta, body) = extract_metadata(source).unwrap();

        assert_eq!(meta.title.as_deref(), Some("Notes"));
        assert_eq!(meta.author.as_deref(), Some("M. Reyes"));
        assert_eq!(body, "body content");
    }

    #[test]
    fn test_extract_no_header() {
        let source = "just a paragraph\nand another line";

        let (meta, body) = extract_metadata(source).unwrap();

        assert_eq!(meta, Metadata::default());
        assert_eq!(body, source);
    }

    #[test]
    fn test_extract_empty_header() {
        let (meta, body) = extract_metadata("---\n---\nbody").unwrap();

        assert_eq!(meta, Metadata::default());
        assert_eq!(body, "body");
    }

    #[test]
    fn test_extract_unclosed_header() {
        let result = extract_metadata("---\ntitle: Notes\nbody content");
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_non_mapping_header() {
        let result = extract_metadata("---\n- just\n- a list\n---\nbody");
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_header_with_leading_whitespace() {
        let (meta, _) = extract_metadata("\n\n---\ntitle: T\n---\n").unwrap();
        assert_eq!(meta.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_extract_closing_marker_at_end_of_input() {
        let (meta, body) = extract_metadata("---\ntitle: T\n---").unwrap();

        assert_eq!(meta.title.as_deref(), Some("T"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (meta, _) = extract_metadata("---\ntitle: T\nedition: 3\n---\n").unwrap();
        assert_eq!(meta.title.as_deref(), Some("T"));
    }
}
