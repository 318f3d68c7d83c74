use serde::Serialize;
use viewgen_codegen::{builder::CodeBuilder, dialect::DialectTemplates};
use viewgen_core::{Destination, NameKind, Result, validate_name};

use super::{Node, Render, TextLeaf, render_children};

/// A group of dependency declarations and literal text.
///
/// The group has no text of its own: children render at the group's
/// indentation, not one level deeper.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyGroup {
    children: Vec<Node>,
}

impl DependencyGroup {
    pub(crate) fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Declare a dependency.
    pub fn add_dependency(&mut self, name: impl Into<String>) -> Result<&mut Dependency> {
        let dependency = Dependency::new(name)?;
        Ok(attach!(self.children, Dependency(dependency)))
    }

    /// Add a line of literal text.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(Node::Text(TextLeaf::new(text)));
        self
    }
}

impl Render for DependencyGroup {
    fn render(&self, out: &mut CodeBuilder, destination: Destination) {
        render_children(&self.children, out, destination);
    }
}

/// A dependency declaration.
///
/// The rendered declaration is the same fixed `poetryReader` line for every
/// name; the name is kept for inspection only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    name: String,
}

impl Dependency {
    pub(crate) fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name, NameKind::Dependency)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Render for Dependency {
    fn render(&self, out: &mut CodeBuilder, destination: Destination) {
        let templates = DialectTemplates::for_destination(destination);
        out.push_line(&(templates.dependency)(&self.name));
    }
}
