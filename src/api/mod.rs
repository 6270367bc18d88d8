//! Data structures and traits for Rick and Morty API access.
//!
//! This module provides structures to represent characters, their locations and
//! the episodes they appear in, as well as the trait implemented by services
//! that can look those records up by id.
mod rick_and_morty;
mod rick_and_morty_types;

#[cfg(test)]
pub(crate) mod testing;

pub use rick_and_morty::RickAndMortyApi;

use crate::episode_reference::EpisodeReference;
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// Errors that can occur while fetching a single record.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchError {
    /// The supplied character id is not a positive integer
    #[error("Invalid character id: {raw:?}")]
    InvalidId { raw: String },

    /// Connection or transport level failure
    #[error("Request failed: {message}")]
    Network { message: String },

    /// The response body could not be decoded
    #[error("Failed to parse API response: {message}")]
    Decode { message: String },

    /// The requested record does not exist
    #[error("{resource} {id} not found")]
    NotFound { resource: Resource, id: u32 },

    /// The service answered with an unexpected HTTP status
    #[error("HTTP {status} while fetching {resource} {id}")]
    Status {
        resource: Resource,
        id: u32,
        status: u16,
    },

    /// The service returned a record that does not match the request
    #[error("API returned invalid data: {message}")]
    InvalidData { message: String },
}

/// The kinds of records the API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Character,
    Episode,
}

impl Resource {
    /// Path segment of the resource below the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Character => "character",
            Resource::Episode => "episode",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Character => f.write_str("Character"),
            Resource::Episode => f.write_str("Episode"),
        }
    }
}

/// A named place a character comes from or currently resides in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Display name, "unknown" when the API does not know it
    pub name: String,
    /// Link to the location record, absent for unknown locations
    pub url: Option<String>,
}

/// A character profile.
///
/// Records are immutable once received and are only ever replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub species: String,
    /// "Alive", "Dead" or "unknown"
    pub status: String,
    pub gender: String,
    /// Subspecies or variant description, often empty
    pub kind: String,
    pub origin: Location,
    pub location: Location,
    /// URI of the character portrait
    pub image: String,
    /// Episodes the character appears in, in API order
    pub episodes: Vec<EpisodeReference>,
}

/// A single episode of the show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u32,
    /// In-universe season/episode label such as `S01E01`
    pub code: String,
    pub name: String,
    /// Air date exactly as the API formats it, e.g. "December 2, 2013"
    pub air_date: String,
}

/// Trait for services that can look up characters and episodes by id.
///
/// Implementors only perform the lookup. Validation of ids, aggregation and
/// logging of failures happen in the fetchers built on top of this trait.
pub trait RickAndMortyService {
    /// Fetches the character with the given id.
    fn character_by_id(
        &self,
        id: u32,
    ) -> impl Future<Output = Result<Character, FetchError>> + Send;

    /// Fetches the episode with the given id.
    fn episode_by_id(&self, id: u32) -> impl Future<Output = Result<Episode, FetchError>> + Send;
}
