//! Rendering utilities shared by every viewgen node kind.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented output buffer ([`CodeBuilder`])
//! - [`dialect`] - Per-destination templates ([`DialectTemplates`])
//! - [`markup`] - Destination-independent tag syntax
//!
//! [`CodeBuilder`]: builder::CodeBuilder
//! [`DialectTemplates`]: dialect::DialectTemplates

pub mod builder;
pub mod dialect;
pub mod markup;
