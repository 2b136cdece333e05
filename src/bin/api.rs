use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::info;

use admin_dashboard::{
    config::DashboardConfig, logging::init_tracing, server::router, services::InMemoryService,
};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let config = DashboardConfig::from_env();
    let service = if config.seed_sample {
        InMemoryService::new_with_sample()
    } else {
        InMemoryService::empty()
    };
    let app = router(service);

    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .expect("invalid BIND_ADDR, expected host:port");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind HTTP listener");
    info!(seed_sample = config.seed_sample, "mock API listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server crashed");
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut terminate =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = terminate.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    }
}
