pub mod app_config;
pub mod breaker;
pub mod flight_cache;
pub mod upstream;

pub use breaker::CircuitBreaker;
pub use flight_cache::RedisSearchCache;
pub use upstream::HttpFlightClient;
