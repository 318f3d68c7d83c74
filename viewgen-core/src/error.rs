use std::{fmt, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for viewgen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// What a validated name is used for.
///
/// Each kind has its own lexical rules; see [`crate::validate_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// Root container (`struct {name}View` / `fun {name}Content`).
    Container,
    /// Stateful field declared inside a container.
    Field,
    /// Dependency declaration.
    Dependency,
    /// Markup element name.
    Tag,
    /// Markup attribute name.
    Attribute,
}

impl NameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameKind::Container => "container",
            NameKind::Field => "field",
            NameKind::Dependency => "dependency",
            NameKind::Tag => "tag",
            NameKind::Attribute => "attribute",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid {kind} name '{name}'")]
    #[diagnostic(code(viewgen::invalid_name), help("{reason}"))]
    InvalidName {
        name: String,
        kind: NameKind,
        reason: &'static str,
    },

    #[error("unknown destination '{value}'")]
    #[diagnostic(
        code(viewgen::unknown_destination),
        help("valid destinations are: swiftui, compose")
    )]
    UnknownDestination { value: String },

    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a viewgen.toml or pass --destination instead"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse viewgen.toml")]
    #[diagnostic(code(viewgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, kind: NameKind, reason: &'static str) -> Box<Self> {
        Box::new(Error::InvalidName {
            name: name.into(),
            kind,
            reason,
        })
    }

    /// Create an unknown destination error
    pub fn unknown_destination(value: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownDestination {
            value: value.into(),
        })
    }

    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_message() {
        let err = Error::invalid_name("1st", NameKind::Field, "name must start with a letter");
        assert_eq!(err.to_string(), "invalid field name '1st'");
    }

    #[test]
    fn test_unknown_destination_message() {
        let err = Error::unknown_destination("flutter");
        assert_eq!(err.to_string(), "unknown destination 'flutter'");
        assert!(matches!(*err, Error::UnknownDestination { ref value } if value == "flutter"));
    }

    #[test]
    fn test_parse_error_keeps_span() {
        let src = "destination = ";
        let toml_err = toml::from_str::<toml::Table>(src).unwrap_err();
        let err = Error::parse(toml_err, src, "viewgen.toml");
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
