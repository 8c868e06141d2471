use std::path::PathBuf;

use clap::Parser;

use cors_relay::lifecycle::startup;
use cors_relay::observability;

#[derive(Parser)]
#[command(name = "cors-relay")]
#[command(about = "Local CORS relay for a single upstream endpoint", long_about = None)]
struct Cli {
    /// Optional TOML configuration file; built-in defaults are used when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = startup::load(cli.config.as_deref())?;
    observability::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        route = %config.route.path,
        "Configuration loaded"
    );

    let route_path = config.route.path.clone();
    let (server, listener) = startup::prepare(config).await?;
    startup::announce(&listener, &route_path)?;

    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
