//! Episode references
//!
//! Characters list their episodes as full URLs such as
//! `https://rickandmortyapi.com/api/episode/7`. The trailing path segment is
//! the numeric episode id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An episode URL as listed on a character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeReference(String);

impl EpisodeReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The reference exactly as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The episode id encoded in the reference.
    ///
    /// Everything after the last `/` is parsed as an integer. References
    /// without a parseable trailing integer resolve to id 0, which the API
    /// answers with "not found".
    pub fn id(&self) -> u32 {
        self.strict_id().unwrap_or(0)
    }

    /// The episode id, or `None` if the trailing segment is not an integer.
    pub fn strict_id(&self) -> Option<u32> {
        let segment = match self.0.rfind('/') {
            Some(index) => &self.0[index + 1..],
            None => &self.0,
        };
        segment.parse().ok()
    }

    /// Whether the reference carries a parseable episode id.
    pub fn is_well_formed(&self) -> bool {
        self.strict_id().is_some()
    }
}

impl fmt::Display for EpisodeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EpisodeReference {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for EpisodeReference {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_trailing_segment() {
        let cases = [
            ("https://rickandmortyapi.com/api/episode/7", 7),
            ("https://rickandmortyapi.com/api/episode/51", 51),
            ("episode/1", 1),
            ("12", 12),
        ];
        for (url, id) in cases {
            assert_eq!(EpisodeReference::new(url).id(), id, "parsing {:?}", url);
        }
    }

    #[test]
    fn test_malformed_reference_defaults_to_zero() {
        let reference = EpisodeReference::new("https://rickandmortyapi.com/api/episode/abc");
        assert_eq!(reference.id(), 0);
        assert_eq!(reference.strict_id(), None);
        assert!(!reference.is_well_formed());

        for url in [
            "https://rickandmortyapi.com/api/episode/",
            "",
            // Ids are unsigned, so a negative segment is malformed too
            "https://rickandmortyapi.com/api/episode/-3",
        ] {
            assert_eq!(EpisodeReference::new(url).id(), 0, "parsing {:?}", url);
        }
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let reference = EpisodeReference::new("https://rickandmortyapi.com/api/episode/3");
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, r#""https://rickandmortyapi.com/api/episode/3""#);
    }
}
