use std::cell::Cell;
use std::collections::HashSet;
use std::time::Duration;

use biobuddy_favorites::config::{ClientConfig, Timeouts};
use biobuddy_favorites::ui::{ButtonState, Control, FavoriteButton, Notifier};
use biobuddy_favorites::{FavoriteError, FavoriteToggleHandler, FavoritesClient, PaperId};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Favorite(#[from] FavoriteError),
    #[error("toggle for paper {paper_id} failed")]
    ToggleFailed { paper_id: PaperId },
}

#[derive(Parser, Debug)]
#[command(name = "biobuddy-favorites", about = "Toggle BioBuddy paper favorites")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flip the favorite flag on a paper and print the new button.
    Toggle(ToggleArgs),
    /// Print the initial button for a paper given the user's favorite ids.
    Render(RenderArgs),
}

/// Flags override the `BIOBUDDY_*` environment read by `ClientConfig::from_env`.
#[derive(Args, Debug)]
struct ToggleArgs {
    paper_id: PaperId,

    #[arg(long)]
    base_url: Option<String>,

    #[arg(long)]
    session: Option<String>,

    #[arg(long)]
    request_timeout_secs: Option<u64>,

    #[arg(long)]
    connect_timeout_secs: Option<u64>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    paper_id: PaperId,

    #[arg(long, value_delimiter = ',')]
    favorites: Vec<PaperId>,
}

/// Alerts go to stderr, where a terminal user will see them. Remembers
/// whether anything was reported so the exit status can reflect it.
#[derive(Default)]
struct StderrNotifier {
    failed: Cell<bool>,
}

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        self.failed.set(true);
        eprintln!("{message}");
    }

    fn diagnostic(&self, err: &FavoriteError) {
        self.failed.set(true);
        tracing::error!(error = %err, "favorite toggle failed");
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Toggle(args) => run_toggle(args).await,
        Command::Render(args) => {
            run_render(&args);
            Ok(())
        }
    }
}

fn toggle_config(args: &ToggleArgs) -> Result<ClientConfig, FavoriteError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url)?;
    }
    if let Some(session) = &args.session {
        config = config.with_session(session.as_str());
    }
    let timeouts = Timeouts {
        request: args.request_timeout_secs.map(Duration::from_secs).or(config.timeouts.request),
        connect: args.connect_timeout_secs.map(Duration::from_secs).or(config.timeouts.connect),
    };
    Ok(config.with_timeouts(timeouts))
}

async fn run_toggle(args: ToggleArgs) -> Result<(), CliError> {
    let client = FavoritesClient::new(&toggle_config(&args)?)?;
    tracing::debug!(endpoint = client.endpoint(), paper_id = %args.paper_id, "toggling favorite");

    let handler = FavoriteToggleHandler::new(client, StderrNotifier::default());
    let mut button = FavoriteButton::default();
    handler.toggle_favorite(&mut button, &args.paper_id).await;

    if handler.notifier().failed.get() {
        return Err(CliError::ToggleFailed { paper_id: args.paper_id });
    }
    print_button(&button);
    Ok(())
}

fn run_render(args: &RenderArgs) {
    let favorites: HashSet<PaperId> = args.favorites.iter().cloned().collect();
    let state = ButtonState::for_paper(&args.paper_id, &favorites);
    print_button(&FavoriteButton::with_state(state));
}

fn print_button(button: &FavoriteButton) {
    println!("{} class=\"{}\"", button.text(), button.class_attr());
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
