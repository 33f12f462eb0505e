use axum::http::{Method, header};
use expense_splitter::{
    ExpenseSplitterService, JsonFileStorage, api::app_router, config::CONFIG, constants::seed_users,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; RUST_LOG takes precedence over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    info!("Starting with {:?}", *CONFIG);

    let storage = JsonFileStorage::open(&CONFIG.data_file, seed_users()).await?;
    let service = ExpenseSplitterService::new(storage, CONFIG.current_user_id.clone());
    match service.current_user().await {
        Ok(user) => {
            service.storage().set_current_user(Some(user.clone())).await?;
            info!("Current user is {} ({})", user.name, user.id);
        }
        Err(err) => warn!("Configured current user is unavailable: {}", err),
    }

    let app = app_router(Arc::new(service))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http()); // Request tracing

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
