//! zarpayd - Zarpay wallet API server

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use zarpay_core::config::Config;
use zarpay_core::WalletContext;

/// Zarpay wallet API server
#[derive(Parser)]
#[command(name = "zarpayd", version, about, long_about = None)]
struct Cli {
    /// Data directory holding settings.json (defaults to ~/.zarpay)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Bind host (overrides settings)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides settings)
    #[arg(long, short)]
    port: Option<u16>,

    /// Seed demo data on startup
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("zarpay_core=info".parse().context("bad log directive")?)
                .add_directive("zarpay_server=info".parse().context("bad log directive")?)
                .add_directive("tower_http=info".parse().context("bad log directive")?),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let zarpay_dir = match cli.dir {
        Some(dir) => dir,
        None => dirs::home_dir()
            .context("could not determine home directory")?
            .join(".zarpay"),
    };
    std::fs::create_dir_all(&zarpay_dir)
        .with_context(|| format!("creating {}", zarpay_dir.display()))?;

    let mut config = Config::load(&zarpay_dir)?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if cli.demo {
        config.demo_mode = true;
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;

    let ctx = Arc::new(WalletContext::new(config).await?);
    let app = zarpay_server::router(ctx);

    tracing::info!(%addr, "zarpayd listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
