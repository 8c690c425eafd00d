//! boxforge server binary
//!
//! ## Usage
//!
//! ```bash
//! boxforge-server --bind 0.0.0.0:5000 --output-dir ./boxes
//! curl -X POST localhost:5000/create_obj -d '{"x": 2, "y": 3, "z": 4}'
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use boxforge_core::export::ExportProfile;
use boxforge_core::mesh::DimensionPolicy;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use boxforge_server::{AppState, ServerConfig, router};

#[derive(Parser)]
#[command(name = "boxforge-server")]
#[command(about = "HTTP endpoint exporting box meshes as OBJ/MTL", long_about = None)]
#[command(version)]
struct Args {
    /// JSON config file (flags below override its values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Directory generated files are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Default export profile (minimal or extended)
    #[arg(short, long)]
    profile: Option<ExportProfile>,

    /// Reject zero or negative dimensions instead of exporting a degenerate box
    #[arg(long)]
    require_positive: bool,
}

impl Args {
    fn into_config(self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(profile) = self.profile {
            config.profile = profile;
        }
        if self.require_positive {
            config.dimension_policy = DimensionPolicy::RequirePositive;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Args::parse().into_config()?;

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("Failed to create output directory: {}", config.output_dir.display())
    })?;

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind = %config.bind,
        output_dir = %config.output_dir.display(),
        profile = %config.profile,
        policy = ?config.dimension_policy,
        "boxforge server listening"
    );

    axum::serve(listener, router(AppState::new(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
