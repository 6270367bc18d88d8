//! Character lookup
//!
//! Validates externally supplied character ids and fetches the matching
//! character record. Failures are returned to the caller, never dropped.

use crate::api::{Character, FetchError, RickAndMortyService};

/// Parses a character id supplied from outside, e.g. a route parameter.
///
/// Only positive integers are accepted. Surrounding whitespace is ignored.
pub fn parse_character_id(raw: &str) -> Result<u32, FetchError> {
    match raw.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(FetchError::InvalidId {
            raw: raw.to_string(),
        }),
    }
}

/// Fetches single characters from a service.
pub struct CharacterFetcher<'s, S> {
    service: &'s S,
}

impl<'s, S> CharacterFetcher<'s, S>
where
    S: RickAndMortyService,
{
    pub fn new(service: &'s S) -> Self {
        Self { service }
    }

    /// Fetches the character with the given id.
    ///
    /// Issues exactly one request. A record whose id differs from the
    /// requested one is rejected as invalid data.
    pub async fn fetch(&self, id: u32) -> Result<Character, FetchError> {
        tracing::debug!("Fetching character {}", id);

        let character = self.service.character_by_id(id).await.inspect_err(|e| {
            tracing::warn!("Failed to fetch character {}: {}", id, e);
        })?;

        if character.id != id {
            return Err(FetchError::InvalidData {
                message: format!("requested character {} but received {}", id, character.id),
            });
        }

        Ok(character)
    }
}
