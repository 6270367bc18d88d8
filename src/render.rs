//! Plain-text rendering of a dossier
//!
//! Produces the character card followed by the episode list, or the loading
//! and error screens.

use crate::api::{Character, Episode};
use crate::dossier::DossierState;
use crate::episode_aggregator::EpisodeFailure;

/// Renders the character card.
pub fn render_character_card(character: &Character) -> String {
    let appearances = format!("{} episode(s)", character.episodes.len());

    let rows = [
        ("Name", character.name.as_str()),
        ("Species", character.species.as_str()),
        ("Origin", character.origin.name.as_str()),
        ("Location", character.location.name.as_str()),
        ("Status", character.status.as_str()),
        ("Gender", character.gender.as_str()),
        ("Type", character.kind.as_str()),
        ("Appears in", appearances.as_str()),
        ("Image", character.image.as_str()),
    ];

    rows.iter()
        .map(|(label, value)| format!("{}: {}\n", label, value))
        .collect()
}

/// Renders one episode card.
pub fn render_episode(episode: &Episode) -> String {
    format!(
        "Episode: {}\n  Title: {}\n  Air date: {}\n",
        episode.code, episode.name, episode.air_date
    )
}

/// Renders the episode list, one card per episode.
pub fn render_episode_list(episodes: &[Episode]) -> String {
    if episodes.is_empty() {
        return "No episodes.\n".to_string();
    }
    episodes.iter().map(render_episode).collect::<Vec<_>>().join("\n")
}

fn render_failures(failures: &[EpisodeFailure]) -> String {
    let lines: String = failures
        .iter()
        .map(|failure| format!("  {} ({})\n", failure.reference, failure.error))
        .collect();
    format!("{} episode(s) could not be loaded:\n{}", failures.len(), lines)
}

/// Renders the whole screen for the given state.
pub fn render_state(state: &DossierState) -> String {
    match state {
        DossierState::Loading => "Loading...\n".to_string(),
        DossierState::Ready {
            character,
            episodes,
        } => format!(
            "{}\n{}",
            render_character_card(character),
            render_episode_list(episodes)
        ),
        DossierState::Partial {
            character,
            episodes,
            failures,
        } => format!(
            "{}\n{}\n{}",
            render_character_card(character),
            render_episode_list(episodes),
            render_failures(failures)
        ),
        DossierState::Failed { error } => format!("Could not load character: {}\n", error),
    }
}
