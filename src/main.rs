// ghcache: interactive GitHub user lookup with a session cache.
// Wires logging, the API client, and the repository into the input loop.

mod app;
mod cache;
mod config;
mod error;
mod github;
mod repository;
mod ui;

use std::io;

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use app::App;
use github::GitHubClient;
use repository::GitHubRepository;

#[tokio::main]
async fn main() {
    // Logs go to stderr so they stay out of the menu.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let client = match GitHubClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to create GitHub client");
            eprintln!("Error: {}", e);
            return;
        }
    };

    debug!(base_url = client.base_url(), "GitHub client ready");

    let mut app = App::new(GitHubRepository::new(client));
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = app.run(stdin.lock(), stdout.lock()).await {
        error!(error = %e, "terminal I/O failed");
    }
}
