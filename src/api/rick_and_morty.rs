/// Rick and Morty REST API service implementation.
use super::rick_and_morty_types::{ApiCharacter, ApiEpisode, ApiLocation};
use super::{Character, Episode, FetchError, Location, Resource, RickAndMortyService};
use crate::config::{ApiConfig, ConfigError};
use crate::episode_reference::EpisodeReference;
use serde::de::DeserializeOwned;

/// Service for the public Rick and Morty API.
///
/// This service fetches records from https://rickandmortyapi.com/api (or the
/// configured base URL) one id at a time.
#[derive(Debug, Clone)]
pub struct RickAndMortyApi {
    client: reqwest::Client,
    base_url: String,
}

impl RickAndMortyApi {
    /// Creates a service talking to the public API with default settings.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_config(&ApiConfig::default())
    }

    /// Creates a service from the given configuration.
    pub fn with_config(config: &ApiConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    /// Builds the URL of a single record.
    fn record_url(&self, resource: Resource, id: u32) -> String {
        format!("{}/{}/{}", self.base_url, resource.path(), id)
    }

    /// Fetches one record and decodes its JSON body.
    async fn get_record<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: u32,
    ) -> Result<T, FetchError> {
        let url = self.record_url(resource, id);
        tracing::debug!(%url, "Requesting {} {}", resource, id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { resource, id });
        }

        if !status.is_success() {
            return Err(FetchError::Status {
                resource,
                id,
                status: status.as_u16(),
            });
        }

        // Read the body first so transport errors stay distinct from decode errors
        let body = response.bytes().await.map_err(|e| FetchError::Network {
            message: e.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            message: e.to_string(),
        })
    }

    /// Converts an API location to our internal Location structure.
    fn convert_location(location: ApiLocation) -> Location {
        Location {
            name: location.name,
            url: Some(location.url).filter(|url| !url.is_empty()),
        }
    }

    /// Converts an API character to our internal Character structure.
    fn convert_character(character: ApiCharacter) -> Character {
        Character {
            id: character.id,
            name: character.name,
            species: character.species,
            status: character.status,
            gender: character.gender,
            kind: character.kind,
            origin: Self::convert_location(character.origin),
            location: Self::convert_location(character.location),
            image: character.image,
            episodes: character
                .episodes
                .into_iter()
                .map(EpisodeReference::new)
                .collect(),
        }
    }

    /// Converts an API episode to our internal Episode structure.
    fn convert_episode(episode: ApiEpisode) -> Episode {
        Episode {
            id: episode.id,
            code: episode.episode,
            name: episode.name,
            air_date: episode.air_date,
        }
    }
}

impl RickAndMortyService for RickAndMortyApi {
    async fn character_by_id(&self, id: u32) -> Result<Character, FetchError> {
        let character: ApiCharacter = self.get_record(Resource::Character, id).await?;
        Ok(Self::convert_character(character))
    }

    async fn episode_by_id(&self, id: u32) -> Result<Episode, FetchError> {
        let episode: ApiEpisode = self.get_record(Resource::Episode, id).await?;
        Ok(Self::convert_episode(episode))
    }
}
