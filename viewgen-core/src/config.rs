//! `viewgen.toml` parsing.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Destination, Error, Result};

/// Default config file name looked up by the CLI.
pub const CONFIG_FILE: &str = "viewgen.toml";

/// Render configuration.
///
/// ```toml
/// destination = "compose"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dialect used when no destination is given on the command line.
    #[serde(default)]
    pub destination: Destination,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse a config file from the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a config from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Load the config at `path` if the file exists, the default otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_destination() {
        let config = Config::from_str(r#"destination = "compose""#).unwrap();
        assert_eq!(config.destination, Destination::JetpackCompose);
    }

    #[test]
    fn test_empty_config_uses_default() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.destination, Destination::SwiftUi);
    }

    #[test]
    fn test_unknown_destination_is_parse_error() {
        let err = Config::from_str(r#"destination = "flutter""#).unwrap_err();
        match *err {
            Error::Parse { source, .. } => {
                assert!(source.message().contains("unknown destination 'flutter'"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::from_str("indent = 4").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_open_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "destination = \"swiftui\"\n").unwrap();

        let config = Config::open(&path).unwrap();
        assert_eq!(config.destination, Destination::SwiftUi);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::open(dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }
}
