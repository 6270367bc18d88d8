//! Screen state for a character dossier
//!
//! The rendering surface owns a `DossierState` and replaces it wholesale as
//! loading progresses.

use crate::api::{Character, Episode, FetchError};
use crate::episode_aggregator::{BatchOutcome, EpisodeBatch, EpisodeFailure};
use serde::Serialize;

/// Everything the character screen can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DossierState {
    /// Requests are still outstanding
    Loading,

    /// The character and every episode were fetched
    Ready {
        character: Character,
        episodes: Vec<Episode>,
    },

    /// The character was fetched but some episodes were not
    Partial {
        character: Character,
        episodes: Vec<Episode>,
        failures: Vec<EpisodeFailure>,
    },

    /// The character itself could not be fetched
    Failed { error: FetchError },
}

impl DossierState {
    /// Combines a fetched character with its settled episode batch.
    pub fn from_batch(character: Character, batch: EpisodeBatch) -> Self {
        match batch.outcome() {
            BatchOutcome::Complete => DossierState::Ready {
                character,
                episodes: batch.episodes,
            },
            BatchOutcome::Partial | BatchOutcome::Failed => DossierState::Partial {
                character,
                episodes: batch.episodes,
                failures: batch.failures,
            },
        }
    }

    /// Episodes fetched so far, empty unless the character was found.
    pub fn episodes(&self) -> &[Episode] {
        match self {
            DossierState::Ready { episodes, .. } | DossierState::Partial { episodes, .. } => {
                episodes
            }
            DossierState::Loading | DossierState::Failed { .. } => &[],
        }
    }
}
