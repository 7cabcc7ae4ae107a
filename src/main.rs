//! HTTP server for the Severance Engine.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use severance_engine::api::{AppState, create_router};
use severance_engine::config::{CalculatorConfig, ConfigLoader};

/// Process settings read from the environment.
struct ServerConfig {
    listen_addr: SocketAddr,
    config_dir: Option<PathBuf>,
    json_logs: bool,
}

impl ServerConfig {
    fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("SEVERANCE_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid SEVERANCE_LISTEN_ADDR")?;
        let config_dir = std::env::var("SEVERANCE_CONFIG_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let json_logs = std::env::var("SEVERANCE_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        Ok(Self {
            listen_addr,
            config_dir,
            json_logs,
        })
    }
}

fn init_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

fn load_calculator_config(config_dir: Option<&PathBuf>) -> anyhow::Result<CalculatorConfig> {
    match config_dir {
        Some(dir) => {
            let loader = ConfigLoader::load(dir)
                .with_context(|| format!("Failed to load parameters from {}", dir.display()))?;
            tracing::info!(
                regime = %loader.regime().code,
                version = %loader.regime().version,
                "Loaded statutory parameters from {}",
                dir.display()
            );
            Ok(loader.into_config())
        }
        None => {
            tracing::info!("SEVERANCE_CONFIG_DIR not set; using built-in statutory parameters");
            Ok(CalculatorConfig::statutory())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    init_tracing(config.json_logs);

    let calculator_config = load_calculator_config(config.config_dir.as_ref())?;
    let router = create_router(AppState::new(calculator_config));

    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
