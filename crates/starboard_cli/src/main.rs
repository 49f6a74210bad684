//! Starboard CLI - list and filter a GitHub account's starred repositories.

mod config;
mod output;

use std::sync::Arc;

use clap::Parser;
use console::Term;
use starboard::http::reqwest_transport::ReqwestTransport;
use starboard::{EntityInfo, GitHubConnection, InMemoryTermStore, QueryContext, RemoteSelectQuery};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "starboard")]
#[command(version)]
#[command(about = "Query the repositories a GitHub account has starred")]
#[command(
    long_about = "Starboard lists the repositories a GitHub account has starred, fetches \
each one's readme, license and topics, and filters the result by repository id or full name."
)]
#[command(after_long_help = r#"EXAMPLES
    List everything octocat has starred:
        $ starboard --login octocat

    Look up a single starred repository:
        $ starboard --login octocat --full-name rust-lang/rust --output json

CONFIGURATION
    Starboard reads configuration from:
      1. ~/.config/starboard/config.toml (or $XDG_CONFIG_HOME/starboard/config.toml)
      2. ./starboard.toml
      3. Environment variables (STARBOARD_* prefix, e.g., STARBOARD_GITHUB_LOGIN)
      4. .env file in current directory

ENVIRONMENT VARIABLES
    STARBOARD_GITHUB_LOGIN      Account whose stars are listed
    STARBOARD_GITHUB_ENDPOINT   REST API root (default: https://api.github.com)
    STARBOARD_GITHUB_TIMEOUT    Per-request timeout in seconds (default: 30)
"#)]
struct Cli {
    /// GitHub login (overrides config)
    #[arg(short, long)]
    login: Option<String>,

    /// REST API root (overrides config)
    #[arg(long)]
    endpoint: Option<String>,

    /// Keep only the repository with this id
    #[arg(long)]
    id: Option<i64>,

    /// Keep only the repository with this owner/name
    #[arg(short = 'f', long)]
    full_name: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Structured logging only when not attached to a terminal
    if !Term::stdout().is_term() {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("starboard=info,starboard_cli=info"),
        };

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .init();
    }

    let config = config::Config::load();
    let cli = Cli::parse();

    let login = cli.login.clone().unwrap_or_else(|| config.github_login());
    if login.is_empty() {
        tracing::warn!("No GitHub login configured, the listing request will likely fail");
    }
    let endpoint = cli
        .endpoint
        .clone()
        .unwrap_or_else(|| config.github_endpoint());

    let transport = ReqwestTransport::with_timeout(config.request_timeout())?;
    let connection = GitHubConnection::new(Arc::new(transport)).with_endpoint(endpoint);
    let term_store = InMemoryTermStore::new();

    let mut query = RemoteSelectQuery::new(connection, Arc::new(term_store.clone()));
    query.bind_entity(Arc::new(EntityInfo::remote_repository()));
    if let Some(id) = cli.id {
        query.add_entity_condition("entity_id", id, None)?;
    }
    if let Some(full_name) = cli.full_name.as_deref() {
        query.add_property_condition("repository_fullname", full_name, None)?;
    }

    let ctx = QueryContext::new(login);
    let entities = query.execute(&ctx).await?;
    tracing::info!(
        repositories = entities.len(),
        topic_terms = term_store.len(),
        single = !query.retrieve_multiple(),
        "Query finished"
    );

    output::print_entities(&entities, cli.output)?;

    Ok(())
}
