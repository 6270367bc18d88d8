//! Episode aggregation
//!
//! Fetches every episode a character appears in. One request is issued per
//! reference, all of them concurrently, and the aggregate completes once each
//! request has settled, successfully or not.

use crate::api::{Episode, FetchError, RickAndMortyService};
use crate::episode_reference::EpisodeReference;
use futures::future::join_all;
use serde::Serialize;

/// A reference whose episode could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeFailure {
    /// Position of the reference in the input
    pub position: usize,
    pub reference: EpisodeReference,
    pub error: FetchError,
}

/// How an aggregate settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every reference yielded an episode (also the case for no references)
    Complete,
    /// Some references failed, at least one succeeded
    Partial,
    /// Every reference failed
    Failed,
}

/// The settled result of fetching a set of episode references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EpisodeBatch {
    /// Fetched episodes, in the order of their references
    pub episodes: Vec<Episode>,
    /// References that failed, in input order
    pub failures: Vec<EpisodeFailure>,
}

impl EpisodeBatch {
    /// Number of references the batch was built from.
    pub fn requested(&self) -> usize {
        self.episodes.len() + self.failures.len()
    }

    pub fn outcome(&self) -> BatchOutcome {
        if self.failures.is_empty() {
            BatchOutcome::Complete
        } else if self.episodes.is_empty() {
            BatchOutcome::Failed
        } else {
            BatchOutcome::Partial
        }
    }
}

/// Fetches batches of episodes from a service.
pub struct EpisodeAggregator<'s, S> {
    service: &'s S,
}

impl<'s, S> EpisodeAggregator<'s, S>
where
    S: RickAndMortyService,
{
    pub fn new(service: &'s S) -> Self {
        Self { service }
    }

    /// Fetches the episode behind every reference.
    ///
    /// Requests run concurrently without a limit and without deduplication.
    /// The returned future resolves once every request has settled; dropping
    /// it cancels all requests still in flight. An empty input resolves
    /// immediately without touching the service.
    pub async fn fetch_all(&self, references: &[EpisodeReference]) -> EpisodeBatch {
        if references.is_empty() {
            tracing::debug!("No episode references to fetch");
            return EpisodeBatch::default();
        }

        tracing::debug!("Fetching {} episode(s)", references.len());

        let requests = references.iter().enumerate().map(|(position, reference)| {
            if !reference.is_well_formed() {
                tracing::warn!(
                    "Episode reference '{}' has no numeric id, requesting id 0",
                    reference
                );
            }
            async move {
                let result = self.service.episode_by_id(reference.id()).await;
                (position, reference, result)
            }
        });

        // join_all keeps input order, independent of arrival order
        let settled = join_all(requests).await;

        let mut batch = EpisodeBatch::default();
        for (position, reference, result) in settled {
            match result {
                Ok(episode) => batch.episodes.push(episode),
                Err(error) => {
                    tracing::warn!("Failed to fetch episode '{}': {}", reference, error);
                    batch.failures.push(EpisodeFailure {
                        position,
                        reference: reference.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            "Episode fetch settled: {} of {} succeeded, {} failed",
            batch.episodes.len(),
            batch.requested(),
            batch.failures.len()
        );

        batch
    }
}
