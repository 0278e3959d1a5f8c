use axum::Router;
use std::net::SocketAddr;
use tracing::info;

pub async fn start_web_server(bind_addr: SocketAddr, app: Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(bind_address = %bind_addr, "Dashboard API listening");
    axum::serve(listener, app).await?;
    Ok(())
}
