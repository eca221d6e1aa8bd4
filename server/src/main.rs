//! Pokédex backend-for-frontend.
//!
//! # Environment Variables
//!
//! - `API_URL`: upstream Pokémon API base URL (e.g. `https://pokeapi.co/api/v2`)
//! - `HOST`: server host address (default: `0.0.0.0`)
//! - `PORT`: server port (default: `3000`)
//! - `UPSTREAM_TIMEOUT_MS`: per-request upstream timeout (default: none)
//! - `RUST_LOG`: logging filter (e.g. `debug`, `pokedex_server=trace`)
//!
//! A `.env` file in the working directory is loaded first when present.

use pokedex_core::PokeApiClient;
use pokedex_server::{Config, PokemonService, ReqwestTransport};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "configuration error");
            std::process::exit(1);
        }
    };
    if config.api_url.is_none() {
        tracing::warn!("API_URL is not set; upstream requests will fail");
    }

    let service = PokemonService::new(
        PokeApiClient::new(config.upstream_base()),
        ReqwestTransport::new(config.upstream_timeout),
    );

    let addr = config.bind_addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%addr, %error, "failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!(
        %addr,
        upstream = config.upstream_base(),
        timeout = ?config.upstream_timeout,
        "listening"
    );

    if let Err(error) = pokedex_server::run(listener, service, shutdown_signal()).await {
        tracing::error!(%error, "server error");
        std::process::exit(1);
    }
    tracing::info!("server stopped");
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
