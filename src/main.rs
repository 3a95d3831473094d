use clap::Parser;
use dynaform::adapters::form_handler::FormRegistry;
use dynaform::cli::Cli;
use dynaform::config::Settings;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    let registry = Arc::new(FormRegistry::new(settings.forms));
    info!(
        "Loaded {} form(s): {}",
        registry.len(),
        registry.names().collect::<Vec<_>>().join(", ")
    );

    let app = dynaform::create_app(registry);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
