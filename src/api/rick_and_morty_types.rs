/// Rick and Morty API response types for deserialization.
///
/// These structures mirror the JSON response format of the
/// `/character/{id}` and `/episode/{id}` endpoints.
use serde::Deserialize;

/// The response of the character endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct ApiCharacter {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    /// Subspecies, empty string when there is none
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: String,
    pub origin: ApiLocation,
    pub location: ApiLocation,
    pub image: String,
    /// Full URLs of every episode the character appears in
    #[serde(rename = "episode", default)]
    pub episodes: Vec<String>,
}

/// A location reference embedded in a character.
#[derive(Debug, Deserialize)]
pub(super) struct ApiLocation {
    pub name: String,
    /// Empty string for unknown locations
    #[serde(default)]
    pub url: String,
}

/// The response of the episode endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct ApiEpisode {
    pub id: u32,
    pub name: String,
    pub air_date: String,
    /// Season/episode code, e.g. "S01E01"
    pub episode: String,
}
