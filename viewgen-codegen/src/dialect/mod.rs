//! Per-destination text templates.
//!
//! Every structural node kind whose text depends on the destination looks
//! its template up in a [`DialectTemplates`] table. There is one table per
//! [`Destination`]; the set is closed.

mod compose;
mod swiftui;

use viewgen_core::Destination;

/// Text templates for one destination dialect.
///
/// Templates return the text without indentation or trailing newline;
/// the caller places it at the current indentation.
#[derive(Debug, Clone, Copy)]
pub struct DialectTemplates {
    /// Opening text of a container, may span several lines.
    pub container_open: fn(&str) -> String,
    /// Closing text of a container.
    pub container_close: &'static str,
    /// Declaration of a stateful field.
    pub stateful_field: fn(&str) -> String,
    /// Declaration of a dependency.
    pub dependency: fn(&str) -> String,
}

impl DialectTemplates {
    /// SwiftUI templates.
    pub const SWIFTUI: Self = swiftui::TEMPLATES;

    /// Jetpack Compose templates.
    pub const JETPACK_COMPOSE: Self = compose::TEMPLATES;

    /// Look up the table for a destination.
    pub fn for_destination(destination: Destination) -> &'static Self {
        match destination {
            Destination::SwiftUi => &Self::SWIFTUI,
            Destination::JetpackCompose => &Self::JETPACK_COMPOSE,
        }
    }
}
