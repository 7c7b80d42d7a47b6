//! `PlaceScout` - Multi-provider place discovery for travel planning
//!
//! This library resolves a place name and an information category
//! (attractions, restaurants, activities, transportation) into a
//! human-readable report. The Geoapify places index is searched first;
//! when that fails or comes back empty, a Tavily web search answers
//! instead.

pub mod cache;
pub mod config;
pub mod error;
pub mod geoapify;
pub mod models;
pub mod place_lookup;
pub mod ports;
pub mod report;
pub mod tavily;

// Re-export core types for public API
pub use cache::LookupCache;
pub use config::PlaceScoutConfig;
pub use error::{PlaceScoutError, ProviderError};
pub use geoapify::GeoapifyClient;
pub use models::{Coordinate, PlaceCategory, PlaceQuery, PlaceResult, ResolvedAnswer, SearchCriteria};
pub use place_lookup::{CategoryReport, PlaceLookupService};
pub use ports::{PlacesProvider, WebSearchProvider};
pub use tavily::TavilyClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
