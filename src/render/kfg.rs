//! Configuration-language rendering for debugging and inspection.

use crate::error::{BksError, Result};

use super::{RenderContext, Renderer};

pub struct KfgRenderer;

impl Renderer for KfgRenderer {
    /// Serialize the structured document with the configuration-language
    /// stringifier, the same dialect package descriptors are written in.
    fn render(&self, context: &RenderContext) -> Result<String> {
        serde_yaml::to_string(&context.document).map_err(|e| BksError::Parse {
            message: format!("Failed to serialize document: {}", e),
            help: None,
        })
    }
}
