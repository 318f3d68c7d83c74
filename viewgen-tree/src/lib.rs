//! In-memory document tree with per-destination renderers.
//!
//! A tree is assembled with nested builder callbacks and then rendered to
//! text for a [`Destination`]:
//!
//! ```
//! use viewgen_tree::{Destination, Render, build_container};
//!
//! let view = build_container("Poem", |view| {
//!     view.add_dependency_group(|deps| {
//!         deps.add_dependency("poetryReader")?;
//!         Ok(())
//!     })?;
//!     view.add_field("poem")?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     view.to_text(Destination::JetpackCompose),
//!     "@Composable\nfun PoemContent() {\n  val poetryReader = PoetryReader()\n  var poem by remember { mutableStateOf(\"\") }\n}"
//! );
//! ```
//!
//! Building and rendering are separate phases. The build functions return a
//! [`Document`], which can be rendered any number of times but no longer
//! mutated.

mod build;
mod document;
mod node;

pub use build::{build_container, build_tag};
pub use document::Document;
pub use node::{
    Button, Container, Dependency, DependencyGroup, Node, Render, Stack, StatefulField, Tag,
    TextLeaf,
};
pub use viewgen_core::{Destination, Error, NameKind, Result};
