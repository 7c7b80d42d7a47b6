//! Place Lookup Facade
//!
//! Orchestrates the two-tier resolution policy behind a single operation:
//! geocode the place, run the categorized proximity search against the
//! primary provider, and fall back to a web search when the primary search
//! fails or comes back empty. Every path resolves to a human-readable
//! report string; only a failure of the fallback itself escapes as an
//! error.

use futures::future::try_join_all;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::cache::LookupCache;
use crate::config::PlaceScoutConfig;
use crate::error::Result;
use crate::geoapify::GeoapifyClient;
use crate::models::place::{DEFAULT_LIMIT, DEFAULT_RADIUS_METERS};
use crate::models::{PlaceCategory, PlaceQuery, ResolvedAnswer, SearchCriteria};
use crate::ports::{PlacesProvider, WebSearchProvider};
use crate::report;
use crate::tavily::TavilyClient;

/// One category's finished report, as produced by [`PlaceLookupService::lookup_all`]
#[derive(Debug, Clone)]
pub struct CategoryReport {
    /// Category the report answers
    pub category: PlaceCategory,
    /// Rendered report text
    pub report: String,
}

/// Two-tier place lookup service
pub struct PlaceLookupService<P, W> {
    places: P,
    web_search: W,
    radius_meters: u32,
    limit: usize,
    cache: Option<LookupCache>,
}

impl PlaceLookupService<GeoapifyClient, TavilyClient> {
    /// Build the production service from configuration
    pub fn from_config(config: &PlaceScoutConfig) -> anyhow::Result<Self> {
        let service = Self::new(
            GeoapifyClient::new(&config.geoapify)?,
            TavilyClient::new(&config.tavily)?,
        )
        .with_radius(config.geoapify.radius_meters)
        .with_limit(config.geoapify.limit);

        Ok(if config.cache.enabled {
            service.with_cache(Duration::from_secs(config.cache.ttl_minutes * 60))
        } else {
            service
        })
    }
}

impl<P: PlacesProvider, W: WebSearchProvider> PlaceLookupService<P, W> {
    /// Create a service with the default radius and limit and no cache
    pub fn new(places: P, web_search: W) -> Self {
        Self {
            places,
            web_search,
            radius_meters: DEFAULT_RADIUS_METERS,
            limit: DEFAULT_LIMIT,
            cache: None,
        }
    }

    /// Override the proximity search radius
    #[must_use]
    pub fn with_radius(mut self, radius_meters: u32) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    /// Override the proximity search result limit
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Cache finished reports in memory for roughly `ttl`
    #[must_use]
    pub fn with_cache(mut self, ttl: Duration) -> Self {
        self.cache = Some(LookupCache::new(ttl));
        self
    }

    /// Look up one category of information about a place.
    ///
    /// Geocoding misses and primary-provider failures are converted into
    /// descriptive report strings, never errors.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::ProviderError`] only when the web-search
    /// fallback itself fails; there is no third tier to absorb it.
    pub async fn lookup(&self, place: &str, category: PlaceCategory) -> Result<String> {
        let query = PlaceQuery::new(place, category);
        if let Some(cache) = &self.cache {
            if let Some(report) = cache.get(&query) {
                return Ok(report);
            }
        }

        info!("Looking up {} for '{}'", category, place);

        let Some(coordinate) = self.places.geocode(place).await else {
            warn!("Could not geocode '{}', skipping {} search", place, category);
            return Ok(report::geocode_failure_report(place));
        };

        let criteria = SearchCriteria::new(coordinate, category.category_tag())
            .with_radius(self.radius_meters)
            .with_limit(self.limit);

        let report = match self.places.search_places(&criteria).await {
            Ok(ResolvedAnswer::Places(places)) => {
                debug!(
                    "{} returned {} places for '{}'",
                    self.places.provider_name(),
                    places.len(),
                    place
                );
                report::found_report(category, place, self.places.provider_name(), &places)
            }
            // A provider that already synthesized a text answer needs no rendering
            Ok(ResolvedAnswer::Answer(answer)) => answer,
            Ok(ResolvedAnswer::NoResults) => {
                warn!(
                    "{} search for '{}' returned no results, falling back to web search",
                    category, place
                );
                self.fall_back(place, category, report::NO_RESULTS).await?
            }
            Err(cause) => {
                warn!(
                    "{} search for '{}' failed: {}, falling back to web search",
                    category, place, cause
                );
                self.fall_back(place, category, &cause.to_string()).await?
            }
        };

        if let Some(cache) = &self.cache {
            cache.put(&query, report.clone());
        }

        Ok(report)
    }

    /// Search attractions of a place
    pub async fn lookup_attractions(&self, place: &str) -> Result<String> {
        self.lookup(place, PlaceCategory::Attractions).await
    }

    /// Search restaurants of a place
    pub async fn lookup_restaurants(&self, place: &str) -> Result<String> {
        self.lookup(place, PlaceCategory::Restaurants).await
    }

    /// Search activities of a place
    pub async fn lookup_activities(&self, place: &str) -> Result<String> {
        self.lookup(place, PlaceCategory::Activities).await
    }

    /// Search transportation of a place
    pub async fn lookup_transportation(&self, place: &str) -> Result<String> {
        self.lookup(place, PlaceCategory::Transportation).await
    }

    /// Resolve every category for one place concurrently.
    ///
    /// Reports come back in [`PlaceCategory::ALL`] order regardless of
    /// completion order.
    ///
    /// # Errors
    ///
    /// Propagates the first fallback failure encountered, if any.
    pub async fn lookup_all(&self, place: &str) -> Result<Vec<CategoryReport>> {
        let lookups = PlaceCategory::ALL.into_iter().map(|category| async move {
            let report = self.lookup(place, category).await?;
            Ok::<CategoryReport, crate::error::ProviderError>(CategoryReport { category, report })
        });

        try_join_all(lookups).await
    }

    /// Resolve via the web-search tier, quoting the primary failure cause
    async fn fall_back(&self, place: &str, category: PlaceCategory, cause: &str) -> Result<String> {
        let query = category.fallback_query(place);
        let answer = self.web_search.search(&query).await?;
        Ok(report::fallback_report(
            category,
            place,
            self.places.provider_name(),
            cause,
            &answer,
        ))
    }
}
