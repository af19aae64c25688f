//! Aethero CLI
//!
//! Terminal front-end for the Aethero dashboard API. It keeps a local
//! dashboard store, feeds it from the server and renders text panels.
//!
//! # Usage
//!
//! ```bash
//! aethero --help
//! aethero health
//! aethero send "agent online"
//! aethero dashboard --api-url http://localhost:8080
//! ```

#![deny(unsafe_code)]

mod render;

use anyhow::Context;
use clap::{Parser, Subcommand};
use shared::client::{DashboardClient, LogStream};
use shared::storage::{DashboardStore, StoreChange};
use std::sync::Arc;

/// Aethero CLI - dashboard command-line interface
#[derive(Parser)]
#[command(name = "aethero")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API server URL
    #[arg(
        short,
        long,
        env = "AETHERO_API_URL",
        default_value = "http://localhost:8080"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API server health
    Health,
    /// Print the server's log lines
    Logs {
        /// Show at most this many of the most recent lines
        #[arg(short = 'n', long, default_value_t = 50)]
        lines: usize,
    },
    /// Print the current metrics snapshot
    Metrics,
    /// Submit a log line
    Send {
        /// The line to submit
        entry: String,
    },
    /// Follow the live log stream until Ctrl+C
    Tail,
    /// Show metrics and logs, refreshing on every change until Ctrl+C
    Dashboard,
    /// Run a mind analysis over some introspection text
    Analyze {
        /// Introspection text
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("Failed to load .env file");
        }
    }

    // Panels go to stdout, diagnostics to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Aethero CLI v{}", env!("CARGO_PKG_VERSION"));
        println!("Use --help for usage information");
        return Ok(());
    };

    let client = DashboardClient::new(&cli.api_url)?;
    run(command, &client).await
}

async fn run(command: Commands, client: &DashboardClient) -> anyhow::Result<()> {
    match command {
        Commands::Health => {
            let health = client
                .health()
                .await
                .with_context(|| format!("Health check against {} failed", client.base_url()))?;
            println!(
                "{} {} v{}: {}",
                client.base_url(),
                health.service,
                health.version,
                health.status
            );
        }
        Commands::Logs { lines } => {
            let store = DashboardStore::new();
            client.pull_logs(&store).await.context("Failed to pull logs")?;
            print!("{}", render::log_panel(&store.state().logs, lines));
        }
        Commands::Metrics => {
            let store = DashboardStore::new();
            client
                .fetch_metrics(&store)
                .await
                .context("Failed to fetch metrics")?;
            print!("{}", render::metrics_panel(store.metrics().as_ref()));
        }
        Commands::Send { entry } => {
            let response = client.submit_log(&entry).await.context("Failed to submit log")?;
            println!("Accepted as entry #{}", response.index);
        }
        Commands::Tail => tail(client).await?,
        Commands::Dashboard => dashboard(client).await?,
        Commands::Analyze { text } => {
            let analysis = client.analyze(&text).await.context("Mind analysis failed")?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
    }

    Ok(())
}

/// Prints each streamed line as it is appended to the local store.
async fn tail(client: &DashboardClient) -> anyhow::Result<()> {
    let store = DashboardStore::new_shared();
    let _printer = store.subscribe(|change| {
        if let StoreChange::LogAppended { entry, .. } = change {
            println!("{entry}");
        }
    });

    let stream = client
        .stream_logs(Arc::clone(&store))
        .await
        .context("Failed to open log stream")?;

    follow(stream).await
}

async fn dashboard(client: &DashboardClient) -> anyhow::Result<()> {
    let store = DashboardStore::new_shared();

    // Initial state is loaded before subscribing so it renders once. Lines
    // appended on the server between this pull and the stream handshake are
    // not shown; `/api/logs` has no cursor to resume from.
    client.pull_logs(&store).await.context("Failed to pull logs")?;
    if let Err(e) = client.fetch_metrics(&store).await {
        tracing::warn!(error = %e, "Starting without metrics");
    }
    redraw(&store);

    let weak = Arc::downgrade(&store);
    let _redraw = store.subscribe(move |_| {
        if let Some(store) = weak.upgrade() {
            redraw(&store);
        }
    });

    let stream = client
        .stream_logs(Arc::clone(&store))
        .await
        .context("Failed to open log stream")?;

    follow(stream).await
}

fn redraw(store: &DashboardStore) {
    print!("\x1b[2J\x1b[H{}", render::dashboard(&store.state()));
}

/// Waits for Ctrl+C or for the server to end the stream, then closes it.
async fn follow(mut stream: LogStream) -> anyhow::Result<()> {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for Ctrl+C")?;
        }
        () = stream.wait_closed() => {
            tracing::warn!("Server closed the log stream");
        }
    }

    if let Some(received) = stream.close().await {
        tracing::info!(received, "Log stream closed");
    }
    Ok(())
}
