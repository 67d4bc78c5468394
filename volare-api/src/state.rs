use std::sync::Arc;
use std::time::Duration;

use volare_core::cache::SearchCache;
use volare_core::provider::FlightProvider;

/// Shared handler dependencies. The provider and cache are capability
/// traits so tests can inject fakes through the constructor instead of the
/// handlers reaching for process-wide state.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn FlightProvider>,
    pub cache: Arc<dyn SearchCache>,
    pub search_ttl: Duration,
}
