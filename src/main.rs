//! CI/CD pipeline demo service entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pipeline_demo::api::{create_router, AppState};
use pipeline_demo::config::Config;
use pipeline_demo::utils::shutdown_signal;
use pipeline_demo::Result;

/// Zero-downtime CI/CD pipeline demo service.
#[derive(Parser, Debug)]
#[command(name = "pipeline-demo")]
#[command(about = "Demo HTTP service with liveness/readiness probes for blue/green deployments")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the resolved configuration and exit.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("pipeline_demo=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config()?,
        Some(Command::Run { port }) => cmd_run(port).await?,
        None => cmd_run(args.port).await?,
    }

    Ok(())
}

/// Print the resolved configuration and exit.
fn cmd_check_config() -> Result<()> {
    let config = Config::load()?;

    println!("Configuration resolved from environment:");
    println!("  APP_VERSION: {}", config.app_version);
    println!("  ENVIRONMENT: {}", config.environment);
    println!("  PORT:        {}", config.port);
    println!("  RUST_LOG:    {}", config.rust_log);

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_run(port_override: Option<u16>) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(port) = port_override {
        config.port = port;
    }

    info!(
        version = %config.app_version,
        environment = %config.environment,
        "Configuration loaded"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config);
    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
