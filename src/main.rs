use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use viewcount::client::{ExecutionContext, MemorySessionGate, ViewCounterClient};
use viewcount::config::Config;
use viewcount::logging;
use viewcount::service::CounterServer;
use viewcount::store::FileStore;
use viewcount::widget::{runtime, WatchOptions};

#[derive(Parser)]
#[command(
    name = "viewcount",
    version,
    about = "Per-article view counter: service, client and display widget"
)]
struct Cli {
    /// Path to the config file (defaults to the per-user config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the counter service.
    Serve {
        /// Bind address (host:port), overrides the config file.
        #[arg(long)]
        bind: Option<String>,
        /// Store file path, overrides the config file.
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Print the current count for a slug without incrementing.
    Get { slug: String },
    /// Increment the count for a slug and print the new value.
    Bump { slug: String },
    /// Mount the display widget in the terminal.
    Watch {
        slug: String,
        /// Count this mount as a view (once per session).
        #[arg(long)]
        bump: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Serve { bind, store } => serve(config, bind, store).await,
        Command::Get { slug } => one_shot(config, &slug, false).await,
        Command::Bump { slug } => one_shot(config, &slug, true).await,
        Command::Watch { slug, bump } => watch(config, slug, bump).await,
    }
}

async fn serve(
    mut config: Config,
    bind: Option<String>,
    store_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    logging::init_server();

    if let Some(bind) = bind {
        config.service.bind_addr = bind;
    }
    if let Some(path) = store_path {
        config.store.path = Some(path);
    }

    let store = FileStore::open(config.store.resolved_path(), config.store.consistency)?;
    tracing::info!("View counts persisted at {}", store.path().display());

    let mut server = CounterServer::new(Arc::new(store));
    server
        .try_bind(&config.service.bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    server.run().await.map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}

async fn one_shot(config: Config, slug: &str, bump: bool) -> anyhow::Result<()> {
    logging::init_tui();

    let gate = Arc::new(MemorySessionGate::new(config.client.session_key_prefix.clone()));
    let client = ViewCounterClient::new(&config.client, ExecutionContext::Interactive, gate);

    let count = if bump {
        client.increment_view_count(slug).await
    } else {
        client.get_view_count(slug).await
    };
    println!("{count}");
    Ok(())
}

async fn watch(config: Config, slug: String, bump: bool) -> anyhow::Result<()> {
    logging::init_tui();

    let gate = Arc::new(MemorySessionGate::new(config.client.session_key_prefix.clone()));
    let client = ViewCounterClient::new(&config.client, ExecutionContext::Interactive, gate);

    runtime::run(
        &client,
        &WatchOptions {
            slug,
            increment: bump,
        },
    )
    .await
}
