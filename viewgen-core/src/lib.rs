//! Core types for the viewgen document builder.
//!
//! This crate provides the pieces shared by the tree, the renderer and the
//! CLI: the closed set of output [`Destination`]s, the [`Error`] type, name
//! validation, and `viewgen.toml` [`Config`] parsing.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod destination;
mod error;
mod validate;

pub use config::{CONFIG_FILE, Config};
pub use destination::Destination;
pub use error::{Error, NameKind, Result};
pub use validate::{is_reserved_keyword, validate_name};
