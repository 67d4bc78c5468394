pub mod cache;
pub mod criteria;
pub mod datetime;
pub mod flight;
pub mod provider;
pub mod query;

pub use cache::{search_key, CacheError, SearchCache};
pub use criteria::{SearchCriteria, SortBy, SortOrder};
pub use flight::{Airplane, City, FlightRecord};
pub use provider::{FlightProvider, ProviderError};
