use serde::Serialize;
use viewgen_codegen::{builder::CodeBuilder, dialect::DialectTemplates};
use viewgen_core::{Destination, NameKind, Result, validate_name};

use super::{DependencyGroup, Node, Render, Stack, StatefulField, render_children};

/// A page-like construct: a SwiftUI view or a Compose composable.
///
/// The closing brace is not followed by a newline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    name: String,
    children: Vec<Node>,
}

impl Container {
    pub(crate) fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name, NameKind::Container)?;
        Ok(Self {
            name,
            children: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Declare a stateful field.
    pub fn add_field(&mut self, name: impl Into<String>) -> Result<&mut StatefulField> {
        let field = StatefulField::new(name)?;
        Ok(attach!(self.children, Field(field)))
    }

    /// Add a dependency group and fill it in `configure`.
    pub fn add_dependency_group<F>(&mut self, configure: F) -> Result<&mut DependencyGroup>
    where
        F: FnOnce(&mut DependencyGroup) -> Result<()>,
    {
        let mut group = DependencyGroup::new();
        configure(&mut group)?;
        Ok(attach!(self.children, DependencyGroup(group)))
    }

    /// Add a vertical stack and fill it in `configure`.
    pub fn add_stack<F>(&mut self, configure: F) -> Result<&mut Stack>
    where
        F: FnOnce(&mut Stack) -> Result<()>,
    {
        let mut stack = Stack::new();
        configure(&mut stack)?;
        Ok(attach!(self.children, Stack(stack)))
    }
}

impl Render for Container {
    fn render(&self, out: &mut CodeBuilder, destination: Destination) {
        tracing::debug!(container = %self.name, %destination, "rendering container");
        let templates = DialectTemplates::for_destination(destination);
        out.push_lines(&(templates.container_open)(&self.name));
        out.indented(|out| render_children(&self.children, out, destination));
        out.push_unterminated(templates.container_close);
    }
}
