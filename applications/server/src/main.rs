/// Roster Server - read-only user listing service
use clap::{Parser, Subcommand};
use roster_core::UserRepository;
use roster_server::{config::ServerConfig, create_router, open_repository, state::AppState};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user listing server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "ROSTER_CONFIG")]
        config: Option<PathBuf>,
        /// SQL seed script applied after the schema (overrides storage.seed_file)
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// List all users
    ListUsers {
        /// Configuration file path
        #[arg(short, long, env = "ROSTER_CONFIG")]
        config: Option<PathBuf>,
        /// SQL seed script applied after the schema (overrides storage.seed_file)
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, seed } => {
            serve(load_config(config, seed)?).await?;
        }
        Commands::ListUsers { config, seed } => {
            list_users(load_config(config, seed)?).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>, seed: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let mut config = ServerConfig::load(path.as_deref())?;
    if seed.is_some() {
        config.storage.seed_file = seed;
    }
    config.validate()?;
    Ok(config)
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let repository = open_repository(&config).await?;
    tracing::info!("Database connected");

    // Build application state
    let app_state = AppState::new(Arc::new(repository));

    // Build router
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_users(config: ServerConfig) -> anyhow::Result<()> {
    let repository = open_repository(&config).await?;
    let users = repository.find_all().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {}", user.id, user.name);
    }

    Ok(())
}
