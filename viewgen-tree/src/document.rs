//! Finished trees.

use std::ops::Deref;

use serde::Serialize;
use viewgen_codegen::builder::CodeBuilder;
use viewgen_core::Destination;

use crate::Render;

/// A tree whose build phase is over.
///
/// Returned by [`crate::build_container`] and [`crate::build_tag`]. It only
/// hands out shared references to the root, so nothing can be attached
/// once the tree may be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document<T> {
    root: T,
}

impl<T> Document<T> {
    pub(crate) fn new(root: T) -> Self {
        Self { root }
    }

    /// Get the root node.
    pub fn root(&self) -> &T {
        &self.root
    }
}

impl<T> Deref for Document<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.root
    }
}

impl<T: Render> Render for Document<T> {
    fn render(&self, out: &mut CodeBuilder, destination: Destination) {
        self.root.render(out, destination);
    }
}
