mod config;
mod error;
mod server;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use burns_catalog::Catalog;
use config::Config;
use error::AppError;
use server::BurnsGuideServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting burns-guide MCP server");

    let config = Config::from_env()?;
    info!(
        data_path = ?config.data_path,
        default_lang = %config.default_lang,
        query_policy = ?config.query_policy,
        "configuration loaded"
    );

    let catalog = Arc::new(load_catalog(&config)?);
    info!(
        guides = catalog.len(),
        listed = catalog.list_summaries().len(),
        hidden = catalog.hidden_count(),
        fingerprint = %catalog.fingerprint(),
        "guide catalog loaded"
    );

    let server = BurnsGuideServer::new(catalog, &config);

    if let Some(addr) = config.tcp_listen_addr.as_deref() {
        let listener = TcpListener::bind(addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.clone();
            tokio::spawn(async move {
                tracing::info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                tracing::info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}

fn load_catalog(config: &Config) -> Result<Catalog, AppError> {
    let catalog = match &config.data_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::bundled()?,
    };
    Ok(catalog)
}
