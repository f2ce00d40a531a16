//! cfwrapped - Application Entry Point
//!
//! This is the main entry point for the cfwrapped server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware};
use redis::Client as RedisClient;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cfwrapped::{
    codeforces::CodeforcesClient,
    config::CONFIG,
    constants::API_BASE_PATH,
    handlers,
    middleware::{MemoryStore, RateLimitStore, RedisStore, logging_middleware},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting cfwrapped server...");

    // Initialize the upstream Codeforces client
    let codeforces = CodeforcesClient::new(&CONFIG.codeforces)?;
    tracing::info!("Codeforces API base: {}", CONFIG.codeforces.api_base_url);

    // Pick the rate-limit store: Redis when configured, in-memory otherwise
    let rate_limiter: Arc<dyn RateLimitStore> = match &CONFIG.rate_limit.redis_url {
        Some(url) => {
            tracing::info!("Connecting to Redis for rate limiting...");
            let redis_client = RedisClient::open(url.as_str())?;
            let redis_conn = redis::aio::ConnectionManager::new(redis_client).await?;
            Arc::new(RedisStore::new(redis_conn))
        }
        None => Arc::new(MemoryStore::default()),
    };

    // Create application state
    let state = AppState::new(codeforces, rate_limiter, CONFIG.clone());

    // Build the router
    let app = Router::new()
        .nest(API_BASE_PATH, handlers::routes(state.clone()))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    // ConnectInfo gives the rate limiter each caller's socket address
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
