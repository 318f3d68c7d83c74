//! Jetpack Compose dialect.

use super::DialectTemplates;

pub(super) const TEMPLATES: DialectTemplates = DialectTemplates {
    container_open,
    container_close: "}",
    stateful_field,
    dependency,
};

fn container_open(name: &str) -> String {
    format!("@Composable\nfun {name}Content() {{")
}

fn stateful_field(name: &str) -> String {
    format!("var {name} by remember {{ mutableStateOf(\"\") }}")
}

// Same fixed declaration as SwiftUI, see `swiftui::dependency`.
fn dependency(_name: &str) -> String {
    "val poetryReader = PoetryReader()".to_string()
}
