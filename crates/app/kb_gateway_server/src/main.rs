//! Session proxy gateway server binary.
//!
//! Sits between the knowledge-base UI and the backend API, translating the
//! browser's httpOnly-cookie session into bearer-token backend calls.

use clap::Parser;
use tracing::info;

use kb_gateway::config::GatewayConfig;

/// CLI arguments for the gateway server.
#[derive(Parser, Debug)]
#[command(name = "kb_gateway_server", about = "Knowledge-base session proxy gateway")]
struct Args {
    /// Port to listen on (0 = ephemeral). Overrides BIND_ADDR.
    #[arg(long)]
    port: Option<u16>,

    /// Backend API base URL. Overrides KB_BACKEND_URL / BACKEND_API_URL.
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,kb_gateway=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut config = GatewayConfig::from_env();
    if let Some(port) = args.port {
        config.bind_addr = format!("127.0.0.1:{port}");
    }
    if let Some(backend_url) = args.backend_url {
        config.backend_url = backend_url.trim_end_matches('/').to_string();
    }

    info!(
        backend_url = %config.backend_url,
        production = config.production,
        "starting kb_gateway_server"
    );

    let bind_addr = config.bind_addr.clone();
    let app = kb_gateway::router(kb_gateway::AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, app).await?;

    Ok(())
}
