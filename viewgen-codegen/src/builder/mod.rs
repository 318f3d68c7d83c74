//! Output building blocks.
//!
//! - [`CodeBuilder`] - Append-only buffer with a two-space indentation prefix

mod code_builder;

pub use code_builder::CodeBuilder;
