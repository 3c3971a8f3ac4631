// src/main.rs
// Holocron - Star Wars catalog and favorites over MCP

use anyhow::Result;
use clap::{Parser, Subcommand};
use holocron::catalog::SwapiClient;
use holocron::config::HolocronConfig;
use holocron::dispatch::Dispatcher;
use holocron::mcp::HolocronServer;
use holocron::store::FavoritesStore;
use std::sync::Arc;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "holocron")]
#[command(about = "Star Wars catalog and favorites over MCP")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as MCP server over stdio (default)
    Serve,
}

async fn run_mcp_server() -> Result<()> {
    let config = HolocronConfig::load();

    let store = Arc::new(FavoritesStore::open(
        &config.favorites_path(),
        config.store.on_duplicate,
        config.search.match_labels,
    )?);
    debug!(path = %store.path().display(), "Favorites store ready");

    let client = holocron::http::create_shared_client(config.catalog_timeout());
    let catalog = Arc::new(SwapiClient::new(client, config.catalog_base_url()));

    let server = HolocronServer::new(Dispatcher::new(store, catalog));

    let transport = rmcp::transport::io::stdio();
    let service = rmcp::serve_server(server, transport).await?;
    service.waiting().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Quiet on stderr: the MCP client owns stdout
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None | Some(Commands::Serve) => {
            run_mcp_server().await?;
        }
    }

    Ok(())
}
