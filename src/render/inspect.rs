//! Colorized inspection dump of the structured document.
//!
//! Debug format: a deep, human-readable tree with ANSI colours, in the
//! spirit of a debugger's value printer. Not meant to be parsed back.

use serde_json::Value;

use crate::error::{BksError, Result};

use super::{RenderContext, Renderer};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";

/// Nesting cap. Effectively unbounded for real documents; stops the
/// printer on pathological input.
const MAX_DEPTH: usize = 64;

pub struct InspectRenderer;

impl Renderer for InspectRenderer {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let value = serde_json::to_value(&context.document).map_err(|e| BksError::Parse {
            message: format!("Failed to serialize document: {}", e),
            help: None,
        })?;

        let mut out = String::new();
        write_value(&mut out, &value, 0);
        out.push('\n');

        Ok(out)
    }
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    if depth > MAX_DEPTH {
        out.push_str(&format!("{DIM}...{RESET}"));
        return;
    }

    match value {
        Value::Null => out.push_str(&format!("{MAGENTA}null{RESET}")),
        Value::Bool(b) => out.push_str(&format!("{YELLOW}{b}{RESET}")),
        Value::Number(n) => out.push_str(&format!("{YELLOW}{n}{RESET}")),
        Value::String(s) => out.push_str(&format!("{GREEN}{s:?}{RESET}")),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                indent(out, depth + 1);
                write_value(out, item, depth + 1);
                out.push_str(if i + 1 < items.len() { ",\n" } else { "\n" });
            }
            indent(out, depth);
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{\n");
            for (i, (key, item)) in map.iter().enumerate() {
                indent(out, depth + 1);
                out.push_str(&format!("{CYAN}{key}{RESET}: "));
                write_value(out, item, depth + 1);
                out.push_str(if i + 1 < map.len() { ",\n" } else { "\n" });
            }
            indent(out, depth);
            out.push('}');
        }
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}
