//! Traits describing the two search-provider seams

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Coordinate, ResolvedAnswer, SearchCriteria};

/// Structured geospatial place search, the primary lookup tier
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Human-readable provider name cited in reports
    fn provider_name(&self) -> &str;

    /// Resolve a free-text place name to a coordinate.
    ///
    /// Geocoding misses are ordinary outcomes for callers, so every failure
    /// mode (network, non-success status, undecodable body, empty feature
    /// list) surfaces as `None` rather than an error.
    async fn geocode(&self, place: &str) -> Option<Coordinate>;

    /// Search the places index around `criteria.coordinate`.
    ///
    /// Implementations yield [`ResolvedAnswer::Places`] (never empty) or
    /// [`ResolvedAnswer::NoResults`] when the provider responds successfully
    /// with zero matches.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::ProviderError`] when the request fails or
    /// the response cannot be decoded.
    async fn search_places(&self, criteria: &SearchCriteria) -> Result<ResolvedAnswer>;
}

/// General-purpose web search, the fallback lookup tier
#[async_trait]
pub trait WebSearchProvider: Send + Sync {
    /// Answer a natural-language query.
    ///
    /// Implementations prefer a synthesized answer when the provider offers
    /// one and hand back the raw response text otherwise.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::ProviderError`] when the request fails.
    /// This is the last tier, so callers propagate it instead of degrading
    /// further.
    async fn search(&self, query: &str) -> Result<String>;
}
