use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use volare_api::{app, AppState};
use volare_store::{app_config::Config, HttpFlightClient, RedisSearchCache};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "volare_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Volare API on port {}", config.server.port);

    let cache = RedisSearchCache::new(&config.redis.url).expect("Failed to create Redis client");

    let provider =
        HttpFlightClient::new(&config.upstream).expect("Failed to create flight provider client");

    let app_state = AppState {
        provider: Arc::new(provider),
        cache: Arc::new(cache),
        search_ttl: config.redis.search_ttl(),
    };

    let app = app(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
