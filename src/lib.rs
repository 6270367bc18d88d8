//! Portal Dossier - Look up a Rick and Morty character and every episode they appear in
//!
//! This library fetches a character profile from the Rick and Morty REST API,
//! then fetches all referenced episodes concurrently and hands the settled
//! result to a rendering surface.

mod api;
mod character_fetcher;
mod config;
mod dossier;
mod episode_aggregator;
mod episode_reference;
mod render;

// Re-export error types
pub use api::FetchError;
pub use config::ConfigError;

pub use api::{Character, Episode, Location, Resource, RickAndMortyApi, RickAndMortyService};
pub use character_fetcher::{CharacterFetcher, parse_character_id};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use dossier::DossierState;
pub use episode_aggregator::{BatchOutcome, EpisodeAggregator, EpisodeBatch, EpisodeFailure};
pub use episode_reference::EpisodeReference;
pub use render::{render_character_card, render_episode, render_episode_list, render_state};

use thiserror::Error;

/// Progress event emitted while loading a dossier
///
/// These events allow library users to show a loading indicator or remain
/// silent.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Loading started for the raw id as supplied
    Started { raw_id: String },

    /// The id was valid and the character request is in flight
    FetchingCharacter { id: u32 },

    /// Character successfully fetched
    CharacterFetched { name: String, episode_count: usize },

    /// Episode requests are in flight
    FetchingEpisodes { count: usize },

    /// Every episode request has settled
    EpisodesFetched { succeeded: usize, failed: usize },

    /// Loading finished, successfully or not
    Complete,
}

/// Top-level error type for Portal Dossier operations
#[derive(Debug, Error)]
pub enum DossierError {
    /// Error in the client configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error while fetching the character
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error while serializing output
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Loads the dossier for a character
///
/// Validates `raw_id`, fetches the character and then every episode it
/// references. A character failure yields `DossierState::Failed`; failed
/// episodes yield `DossierState::Partial` carrying the failed references.
///
/// Progress events are emitted through the provided callback.
///
/// # Examples
///
/// ```no_run
/// use portal_dossier::{load_dossier, DossierState, RickAndMortyApi};
///
/// # async fn run() -> Result<(), portal_dossier::DossierError> {
/// let api = RickAndMortyApi::new()?;
///
/// // Silent operation
/// let state = load_dossier(&api, "1", |_| {}).await;
///
/// if let DossierState::Ready { character, episodes } = state {
///     println!("{} appears in {} episodes", character.name, episodes.len());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn load_dossier<S, F>(
    service: &S,
    raw_id: &str,
    mut progress_callback: F,
) -> DossierState
where
    S: RickAndMortyService,
    F: FnMut(ProgressEvent),
{
    progress_callback(ProgressEvent::Started {
        raw_id: raw_id.to_string(),
    });

    let state = match parse_character_id(raw_id) {
        Ok(id) => load_valid_id(service, id, &mut progress_callback).await,
        Err(error) => {
            tracing::warn!("Rejected character id {:?}", raw_id);
            DossierState::Failed { error }
        }
    };

    progress_callback(ProgressEvent::Complete);
    state
}

async fn load_valid_id<S, F>(service: &S, id: u32, progress_callback: &mut F) -> DossierState
where
    S: RickAndMortyService,
    F: FnMut(ProgressEvent),
{
    progress_callback(ProgressEvent::FetchingCharacter { id });

    let character = match CharacterFetcher::new(service).fetch(id).await {
        Ok(character) => character,
        Err(error) => return DossierState::Failed { error },
    };

    progress_callback(ProgressEvent::CharacterFetched {
        name: character.name.clone(),
        episode_count: character.episodes.len(),
    });

    progress_callback(ProgressEvent::FetchingEpisodes {
        count: character.episodes.len(),
    });

    let batch = EpisodeAggregator::new(service)
        .fetch_all(&character.episodes)
        .await;

    progress_callback(ProgressEvent::EpisodesFetched {
        succeeded: batch.episodes.len(),
        failed: batch.failures.len(),
    });

    DossierState::from_batch(character, batch)
}
