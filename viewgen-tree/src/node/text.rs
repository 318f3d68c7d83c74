use serde::Serialize;
use viewgen_codegen::builder::CodeBuilder;
use viewgen_core::Destination;

use super::Render;

/// Literal text, rendered verbatim on its own line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLeaf {
    text: String,
}

impl TextLeaf {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Render for TextLeaf {
    fn render(&self, out: &mut CodeBuilder, _destination: Destination) {
        out.push_line(&self.text);
    }
}
