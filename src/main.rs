use clap::Parser;
use portal_dossier::{
    ApiConfig, DEFAULT_BASE_URL, DossierError, DossierState, ProgressEvent, RickAndMortyApi,
    load_dossier, render_state,
};
use std::process;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt};

/// Look up a Rick and Morty character and every episode they appear in
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Numeric id of the character, e.g. 1 for Rick Sanchez
    character_id: String,

    /// Base URL of the Rick and Morty API
    #[arg(long, env = "PORTAL_DOSSIER_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds (no timeout if omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Handles progress events and prints formatted output to stdout
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::Started { raw_id } => {
            println!("Opening dossier for character {}...", raw_id);
        }
        ProgressEvent::FetchingCharacter { id } => {
            println!("Fetching character {}...", id);
        }
        ProgressEvent::CharacterFetched {
            name,
            episode_count,
        } => {
            println!("Found '{}' in {} episode(s)", name, episode_count);
        }
        ProgressEvent::FetchingEpisodes { count } => {
            if count > 0 {
                println!("Fetching {} episode(s)...", count);
            }
        }
        ProgressEvent::EpisodesFetched { succeeded, failed } => {
            if failed == 0 {
                println!("Fetched {} episode(s)", succeeded);
            } else {
                println!("Fetched {} episode(s), {} failed", succeeded, failed);
            }
        }
        ProgressEvent::Complete => {
            println!();
        }
    }
}

async fn run(cli: Cli) -> Result<DossierState, DossierError> {
    let mut config = ApiConfig::new(&cli.api_url)?;
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let api = RickAndMortyApi::with_config(&config)?;

    let state = if cli.json {
        let state = load_dossier(&api, &cli.character_id, |_| {}).await;
        println!("{}", serde_json::to_string_pretty(&state)?);
        state
    } else {
        print!("{}", render_state(&DossierState::Loading));
        let state = load_dossier(&api, &cli.character_id, handle_progress_event).await;
        print!("{}", render_state(&state));
        state
    };

    Ok(state)
}

#[tokio::main]
async fn main() {
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portal_dossier=info,warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(DossierState::Failed { error }) => {
            let error = DossierError::from(error);
            tracing::error!("{}", error);
            process::exit(1);
        }
        Ok(state) => {
            tracing::debug!("Rendered {} episode(s)", state.episodes().len());
        }
        Err(e) => {
            eprintln!("\nError: {}", e);
            process::exit(1);
        }
    }
}
