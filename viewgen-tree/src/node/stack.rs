use serde::Serialize;
use viewgen_codegen::builder::CodeBuilder;
use viewgen_core::{Destination, Result};

use super::{Node, Render, TextLeaf, render_children};

/// Vertical stack of text lines and buttons.
///
/// Like [`super::DependencyGroup`], a stack emits only its children, at its
/// own indentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stack {
    children: Vec<Node>,
}

impl Stack {
    pub(crate) fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Add a line of text.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(Node::Text(TextLeaf::new(text)));
        self
    }

    /// Add a button and configure its label.
    pub fn add_button<F>(&mut self, configure: F) -> Result<&mut Button>
    where
        F: FnOnce(&mut Button) -> Result<()>,
    {
        let mut button = Button::new();
        configure(&mut button)?;
        Ok(attach!(self.children, Button(button)))
    }
}

impl Render for Stack {
    fn render(&self, out: &mut CodeBuilder, destination: Destination) {
        render_children(&self.children, out, destination);
    }
}

/// A button whose label is made of text lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    children: Vec<Node>,
}

impl Button {
    pub(crate) fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Add a line of label text.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(Node::Text(TextLeaf::new(text)));
        self
    }
}

impl Render for Button {
    fn render(&self, out: &mut CodeBuilder, destination: Destination) {
        render_children(&self.children, out, destination);
    }
}

#[cfg(test)]
mod tests {
    use viewgen_core::NameKind;

    use super::*;

    #[test]
    fn test_stack_renders_children_in_order() {
        let mut stack = Stack::new();
        stack.add_text("Poem of the day");
        stack
            .add_button(|button| {
                button.add_text("Next");
                Ok(())
            })
            .unwrap();
        stack.add_text("by anonymous");

        assert_eq!(
            stack.to_text(Destination::SwiftUi),
            "Poem of the day\nNext\nby anonymous\n"
        );
    }

    #[test]
    fn test_add_button_returns_configured_button() {
        let mut stack = Stack::new();
        let button = stack
            .add_button(|button| {
                button.add_text("Next").add_text("poem");
                Ok(())
            })
            .unwrap();
        assert_eq!(button.children().len(), 2);
    }

    #[test]
    fn test_button_is_transparent() {
        let mut button = Button::new();
        button.add_text("Tap");

        let mut out = CodeBuilder::default();
        out.push_indent();
        button.render(&mut out, Destination::JetpackCompose);
        assert_eq!(out.build(), "  Tap\n");
    }

    #[test]
    fn test_failed_button_is_not_attached() {
        let mut stack = Stack::new();
        stack.add_text("Poem of the day");
        let result = stack.add_button(|button| {
            button.add_text("Next");
            Err(viewgen_core::Error::invalid_name("1", NameKind::Field, "starts with a digit"))
        });
        assert!(result.is_err());
        assert_eq!(stack.children().len(), 1);
        assert_eq!(stack.to_text(Destination::SwiftUi), "Poem of the day\n");
    }
}
