use serde::Serialize;
use viewgen_codegen::{builder::CodeBuilder, dialect::DialectTemplates};
use viewgen_core::{Destination, NameKind, Result, validate_name};

use super::Render;

/// A named piece of mutable state scoped to a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatefulField {
    name: String,
}

impl StatefulField {
    pub(crate) fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name, NameKind::Field)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Render for StatefulField {
    fn render(&self, out: &mut CodeBuilder, destination: Destination) {
        let templates = DialectTemplates::for_destination(destination);
        out.push_line(&(templates.stateful_field)(&self.name));
    }
}
