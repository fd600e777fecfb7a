mod core;
mod features;
mod modules;
mod shared;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::app::{build_app, AppServices};
use crate::core::config::Config;
use crate::core::{database, server};
use crate::modules::seed;

#[derive(Parser, Debug)]
#[command(
    name = "hazard-registry",
    version,
    about = "JSON API for hazards and hazard categories"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Replace all categories and hazards with the sample data set
    Seed,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli.command.unwrap_or(Command::Serve), worker_threads))
}

async fn async_main(command: Command, worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully");

    let pool = database::connect(&config.database).await?;
    tracing::info!("Database connection pool created");

    database::migrate(&pool).await?;

    match command {
        Command::Seed => {
            let summary = seed::run(&pool).await?;
            tracing::info!(
                "Database seeded successfully: {} categories, {} hazards",
                summary.categories,
                summary.hazards
            );
            Ok(())
        }
        Command::Serve => serve(config, pool, worker_threads).await,
    }
}

async fn serve(config: Config, pool: sqlx::PgPool, worker_threads: usize) -> anyhow::Result<()> {
    let services = AppServices::postgres(pool);
    let app = build_app(&services, &config);

    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;
    let listener = server::bind_listener(socket_addr)?;

    tracing::info!(
        "Server listening on http://{} (tokio_worker_threads={})",
        addr,
        worker_threads
    );
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
