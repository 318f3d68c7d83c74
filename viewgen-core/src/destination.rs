//! Output dialects a document tree can be rendered to.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::{Error, Result};

/// Target dialect for rendering.
///
/// Passed explicitly to every render call; nodes never store it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Destination {
    /// SwiftUI views (`struct FooView: View`).
    #[default]
    SwiftUi,
    /// Jetpack Compose composables (`@Composable fun FooContent()`).
    JetpackCompose,
}

impl Destination {
    /// Every supported destination, in declaration order.
    pub const ALL: [Destination; 2] = [Destination::SwiftUi, Destination::JetpackCompose];

    /// Returns the canonical identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::SwiftUi => "swiftui",
            Destination::JetpackCompose => "compose",
        }
    }

    /// Human readable framework name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Destination::SwiftUi => "SwiftUI",
            Destination::JetpackCompose => "Jetpack Compose",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Destination {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "swiftui" | "swift-ui" | "swift" => Ok(Destination::SwiftUi),
            "compose" | "jetpack-compose" | "jetpackcompose" | "kotlin" => {
                Ok(Destination::JetpackCompose)
            }
            _ => Err(Error::unknown_destination(s)),
        }
    }
}

impl TryFrom<String> for Destination {
    type Error = Box<Error>;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Destination::from_str("swiftui").unwrap(), Destination::SwiftUi);
        assert_eq!(Destination::from_str("SwiftUI").unwrap(), Destination::SwiftUi);
        assert_eq!(Destination::from_str("swift-ui").unwrap(), Destination::SwiftUi);
        assert_eq!(
            Destination::from_str("compose").unwrap(),
            Destination::JetpackCompose
        );
        assert_eq!(
            Destination::from_str("Jetpack-Compose").unwrap(),
            Destination::JetpackCompose
        );
        assert_eq!(
            Destination::from_str("kotlin").unwrap(),
            Destination::JetpackCompose
        );
    }

    #[test]
    fn test_unknown_destination() {
        let err = Destination::from_str("flutter").unwrap_err();
        assert!(matches!(*err, Error::UnknownDestination { ref value } if value == "flutter"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for destination in Destination::ALL {
            assert_eq!(
                destination.to_string().parse::<Destination>().unwrap(),
                destination
            );
        }
    }

    #[test]
    fn test_default_is_swiftui() {
        assert_eq!(Destination::default(), Destination::SwiftUi);
    }

    #[test]
    fn test_deserialize() {
        let swift: Destination = serde_json::from_str(r#""swiftui""#).unwrap();
        assert_eq!(swift, Destination::SwiftUi);

        let compose: Destination = serde_json::from_str(r#""compose""#).unwrap();
        assert_eq!(compose, Destination::JetpackCompose);

        assert!(serde_json::from_str::<Destination>(r#""flutter""#).is_err());
    }
}
