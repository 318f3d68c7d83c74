//! Node kinds and the rendering contract.
//!
//! The tree is a strict ownership forest: every node is owned by exactly one
//! parent and children keep their attachment order, which is also the order
//! they are rendered in.

/// Push a node onto a child list and hand back a mutable reference to it.
macro_rules! attach {
    ($children:expr, $variant:ident($node:expr)) => {{
        $children.push(Node::$variant($node));
        match $children.last_mut() {
            Some(Node::$variant(node)) => node,
            _ => unreachable!(concat!("a ", stringify!($variant), " was just attached")),
        }
    }};
}

mod container;
mod dependency;
mod field;
mod stack;
mod tag;
mod text;

use serde::Serialize;
use viewgen_codegen::builder::CodeBuilder;
use viewgen_core::Destination;

pub use container::Container;
pub use dependency::{Dependency, DependencyGroup};
pub use field::StatefulField;
pub use stack::{Button, Stack};
pub use tag::Tag;
pub use text::TextLeaf;

/// Something that can append its text to a [`CodeBuilder`].
///
/// `render` writes at the builder's current indentation and must not
/// change anything but the builder. Composite nodes render their children
/// one level deeper unless documented otherwise.
pub trait Render {
    /// Append this node's text for `destination`.
    fn render(&self, out: &mut CodeBuilder, destination: Destination);

    /// Render into a fresh buffer at zero indentation.
    fn to_text(&self, destination: Destination) -> String {
        let mut out = CodeBuilder::default();
        self.render(&mut out, destination);
        out.build()
    }
}

/// A child in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Field(StatefulField),
    DependencyGroup(DependencyGroup),
    Dependency(Dependency),
    Stack(Stack),
    Button(Button),
    Tag(Tag),
    Text(TextLeaf),
}

impl Render for Node {
    fn render(&self, out: &mut CodeBuilder, destination: Destination) {
        match self {
            Node::Field(node) => node.render(out, destination),
            Node::DependencyGroup(node) => node.render(out, destination),
            Node::Dependency(node) => node.render(out, destination),
            Node::Stack(node) => node.render(out, destination),
            Node::Button(node) => node.render(out, destination),
            Node::Tag(node) => node.render(out, destination),
            Node::Text(node) => node.render(out, destination),
        }
    }
}

/// Render children in order at the builder's current indentation.
fn render_children(children: &[Node], out: &mut CodeBuilder, destination: Destination) {
    for child in children {
        child.render(out, destination);
    }
}
