pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::shared::config;
use crate::usecases::u601_resume_analysis::AnalysisUpstream;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;
    let static_dir = config::get_static_dir(&config);
    tracing::info!("Serving frontend from {}", static_dir.display());

    let upstream = AnalysisUpstream::new(&config.analysis)?;
    tracing::info!("Analysis upstream: {}", upstream.url());

    let app = routes::configure_routes(
        Arc::new(upstream),
        &static_dir,
        config.server.max_upload_bytes(),
    );

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
