//! JSON rendering for debugging and downstream tooling.

use crate::error::{BksError, Result};

use super::{RenderContext, Renderer};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    /// Serialize the structured document as indented JSON.
    fn render(&self, context: &RenderContext) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(&context.document).map_err(|e| BksError::Parse {
                message: format!("Failed to serialize document: {}", e),
                help: None,
            })?;
        out.push('\n');

        Ok(out)
    }
}
