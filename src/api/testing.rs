//! In-memory service used by the unit tests.

use super::{Character, Episode, FetchError, Location, Resource, RickAndMortyService};
use crate::episode_reference::EpisodeReference;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

/// Serves canned records and records every id it was asked for.
#[derive(Default)]
pub(crate) struct FakeService {
    characters: HashMap<u32, Character>,
    episodes: HashMap<u32, Episode>,
    /// Episode ids that answer with a server error instead of a record
    broken_episodes: HashSet<u32>,
    /// Per-episode response delay, used to shuffle arrival order
    delays: HashMap<u32, Duration>,
    /// When set, every episode request waits here until all have arrived
    barrier: Option<Arc<Barrier>>,
    character_calls: Mutex<Vec<u32>>,
    episode_calls: Mutex<Vec<u32>>,
    /// Episode requests started but not yet finished or dropped
    in_flight: AtomicUsize,
}

/// Counts an episode request as in flight until it is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.insert(character.id, character);
        self
    }

    /// Serves `character` when `id` is requested, whatever its own id is.
    pub fn with_character_at(mut self, id: u32, character: Character) -> Self {
        self.characters.insert(id, character);
        self
    }

    pub fn with_episodes(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        for id in ids {
            self.episodes.insert(id, episode(id));
        }
        self
    }

    pub fn with_broken_episode(mut self, id: u32) -> Self {
        self.broken_episodes.insert(id);
        self
    }

    pub fn with_delay(mut self, id: u32, delay: Duration) -> Self {
        self.delays.insert(id, delay);
        self
    }

    pub fn with_barrier(mut self, parties: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    pub fn character_calls(&self) -> Vec<u32> {
        self.character_calls.lock().unwrap().clone()
    }

    pub fn episode_calls(&self) -> Vec<u32> {
        self.episode_calls.lock().unwrap().clone()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

impl RickAndMortyService for FakeService {
    async fn character_by_id(&self, id: u32) -> Result<Character, FetchError> {
        self.character_calls.lock().unwrap().push(id);
        self.characters
            .get(&id)
            .cloned()
            .ok_or(FetchError::NotFound {
                resource: Resource::Character,
                id,
            })
    }

    async fn episode_by_id(&self, id: u32) -> Result<Episode, FetchError> {
        self.episode_calls.lock().unwrap().push(id);
        let _in_flight = InFlight::enter(&self.in_flight);

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if let Some(delay) = self.delays.get(&id) {
            tokio::time::sleep(*delay).await;
        }

        if self.broken_episodes.contains(&id) {
            return Err(FetchError::Status {
                resource: Resource::Episode,
                id,
                status: 500,
            });
        }

        self.episodes.get(&id).cloned().ok_or(FetchError::NotFound {
            resource: Resource::Episode,
            id,
        })
    }
}

/// Builds a character appearing in the given episode references.
pub(crate) fn character(id: u32, episode_urls: &[String]) -> Character {
    Character {
        id,
        name: "Rick Sanchez".to_string(),
        species: "Human".to_string(),
        status: "Alive".to_string(),
        gender: "Male".to_string(),
        kind: String::new(),
        origin: Location {
            name: "Earth (C-137)".to_string(),
            url: Some("https://rickandmortyapi.com/api/location/1".to_string()),
        },
        location: Location {
            name: "Citadel of Ricks".to_string(),
            url: Some("https://rickandmortyapi.com/api/location/3".to_string()),
        },
        image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        episodes: episode_urls
            .iter()
            .map(|url| EpisodeReference::new(url.as_str()))
            .collect(),
    }
}

/// Builds a canned episode for the given id.
pub(crate) fn episode(id: u32) -> Episode {
    Episode {
        id,
        code: format!("S01E{id:02}"),
        name: format!("Episode {id}"),
        air_date: "December 2, 2013".to_string(),
    }
}

/// Builds the reference URL of an episode id.
pub(crate) fn episode_url(id: u32) -> String {
    format!("https://rickandmortyapi.com/api/episode/{id}")
}
