//! Name validation for nodes.
//!
//! Names are checked once, when a node is constructed. The destination is
//! not known at that point, so declaration names must be legal in every
//! supported dialect.

use crate::{Error, NameKind, Result};

/// Swift keywords that cannot be used as plain identifiers
/// Source: https://docs.swift.org/swift-book/documentation/the-swift-programming-language/lexicalstructure/#Keywords-and-Punctuation
pub(crate) const SWIFT_KEYWORDS: &[&str] = &[
    // Declarations
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import",
    "init", "inout", "internal", "let", "open", "operator", "private", "precedencegroup",
    "protocol", "public", "rethrows", "static", "struct", "subscript", "typealias", "var",
    // Statements
    "break", "case", "catch", "continue", "default", "defer", "do", "else", "fallthrough", "for",
    "guard", "if", "in", "repeat", "return", "throw", "switch", "where", "while",
    // Expressions and types
    "Any", "as", "await", "false", "is", "nil", "self", "Self", "super", "throws", "true", "try",
];

/// Kotlin hard keywords
/// Source: https://kotlinlang.org/docs/keyword-reference.html#hard-keywords
pub(crate) const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Check if a name is reserved in any destination dialect
pub fn is_reserved_keyword(name: &str) -> bool {
    SWIFT_KEYWORDS.contains(&name) || KOTLIN_KEYWORDS.contains(&name)
}

/// Validate a name for the given use.
///
/// Fails with [`Error::InvalidName`] carrying the reason.
pub fn validate_name(name: &str, kind: NameKind) -> Result<()> {
    let reason = match kind {
        NameKind::Container => validate_identifier(name, false),
        NameKind::Field | NameKind::Dependency => validate_identifier(name, true),
        NameKind::Tag | NameKind::Attribute => validate_markup_name(name),
    };

    match reason {
        Some(reason) => Err(Error::invalid_name(name, kind, reason)),
        None => Ok(()),
    }
}

/// Validate that a name is an identifier in both Swift and Kotlin.
/// Returns None if valid, Some(reason) if invalid
///
/// Container names are only ever used with a suffix (`MainView`,
/// `MainContent`), so keywords are allowed there.
pub(crate) fn validate_identifier(name: &str, reject_keywords: bool) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if reject_keywords && is_reserved_keyword(name) {
        return Some("name is a reserved keyword in SwiftUI or Jetpack Compose");
    }

    None
}

/// Validate an element or attribute name for the markup form.
pub(crate) fn validate_markup_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some(_) => return Some("name must start with a letter"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':')) {
        return Some("name must contain only letters, numbers, '-', '_', '.', and ':'");
    }

    None
}
