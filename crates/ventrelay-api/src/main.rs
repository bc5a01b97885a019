//! ventrelay CLI and HTTP API entry point.
//!
//! Binary name: `ventrelay`
//!
//! Parses CLI arguments, loads configuration, connects the backend
//! transport, then serves the chat API until Ctrl+C / SIGTERM.

mod cli;
mod http;
mod state;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;
use tracing::info;

use cli::{Cli, Commands};
use state::AppState;
use ventrelay_infra::config::{DEFAULT_CONFIG_FILE, load_config};
use ventrelay_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "ventrelay", &mut std::io::stdout());
        }

        Commands::Serve { bind } => {
            init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel)
                .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

            let config_path = cli
                .config
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            let mut config = load_config(&config_path).await;
            if let Some(bind) = bind {
                config.server.bind = bind;
            }

            let addr = config.server.bind.clone();
            info!(
                canister_id = %config.backend.canister_id,
                host = %config.backend.host,
                "Connecting conversation backend"
            );
            let state = AppState::init(config)?;

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;
            info!("ventrelay listening on http://{addr}");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            info!("Server stopped");
            shutdown_tracing();
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
