//! model-service - HTTP bootstrap for model operations with health checks and OpenAPI docs

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use model_service::api::{operations, Application};
use model_service::config::Config;
use model_service::health::HealthRegistry;
use model_service::server;

#[derive(Parser)]
#[command(name = "model-service")]
#[command(about = "HTTP service exposing model operations, health checks and API docs")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the OpenAPI document exactly as served and exit
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment
    let _ = dotenvy::dotenv();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("model_service={},tower_http={}", log_level, log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Serve { host: None, port: None }) {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let app = Application::new(&config, operations::router(), HealthRegistry::default());
            let listener = server::bind(&config.server).await?;

            tracing::info!(
                "{} v{} serving docs at {} and {}",
                config.api.title,
                config.api.version,
                config.docs.docs_path,
                config.docs.redoc_path
            );

            server::serve(listener, app.into_router()).await?;
        }

        Commands::Openapi => {
            let app = Application::new(&config, operations::router(), HealthRegistry::default());
            println!("{}", app.schema().document()?);
        }
    }

    Ok(())
}
