pub mod api;
pub mod config;
pub mod db;
pub mod entities;
pub mod services;
pub mod sieve;

pub use config::Config;

use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().collect();

    if let Some(arg) = args.get(1) {
        match arg.as_str() {
            "init" | "--init" => {
                Config::create_default_if_missing()?;
                println!("✓ Config file created. Edit config.toml and run again.");
                return Ok(());
            }
            "help" | "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            other => {
                println!("Unknown command: {other}");
                println!();
                print_help();
                return Ok(());
            }
        }
    }

    serve(config).await
}

fn print_help() {
    println!("Eratos - prime sieve & account history service");
    println!();
    println!("USAGE:");
    println!("  eratos            Start the HTTP server");
    println!("  eratos init       Create default config file");
    println!("  eratos help       Show this help message");
    println!();
    println!("CONFIG:");
    println!("  Edit config.toml to configure the port, database path, etc.");
}

async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Eratos v{} starting...", env!("CARGO_PKG_VERSION"));

    let port = config.server.port;
    let state = api::create_app_state(config).await?;
    let app = api::router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on http://{addr}");

    let server = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Web server error: {e}");
        }
    });

    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {e}"),
    }

    server.abort();
    info!("Server stopped");

    Ok(())
}
