//! SwiftUI dialect.

use super::DialectTemplates;

pub(super) const TEMPLATES: DialectTemplates = DialectTemplates {
    container_open,
    container_close: "}",
    stateful_field,
    dependency,
};

fn container_open(name: &str) -> String {
    format!("struct {name}View: View {{")
}

fn stateful_field(name: &str) -> String {
    format!("@State var {name} = \"\"")
}

// The declared name is not used; every dependency renders as the poetry reader.
fn dependency(_name: &str) -> String {
    "let poetryReader = PoetryReader()".to_string()
}
