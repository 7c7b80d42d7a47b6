//! Geoapify API client for geocoding and categorized place search
//!
//! Primary lookup tier. Geocoding misses surface as `None` because they are
//! ordinary outcomes for callers; place-search failures surface as typed
//! [`ProviderError`]s so the lookup facade can route them to the fallback
//! tier.

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::GeoapifyConfig;
use crate::error::{ProviderError, Result};
use crate::models::{Coordinate, PlaceResult, ResolvedAnswer, SearchCriteria};
use crate::ports::PlacesProvider;

/// Provider name cited in rendered reports
pub const PROVIDER_NAME: &str = "Geoapify";

/// Geoapify API client
pub struct GeoapifyClient {
    client: Client,
    api_key: String,
    geocode_url: String,
    places_url: String,
}

impl GeoapifyClient {
    /// Create a new client from configuration
    pub fn new(config: &GeoapifyConfig) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .user_agent("PlaceScout/0.1.0")
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            geocode_url: config.geocode_url.clone(),
            places_url: config.places_url.clone(),
        })
    }
}

#[async_trait]
impl PlacesProvider for GeoapifyClient {
    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn geocode(&self, place: &str) -> Option<Coordinate> {
        debug!("Geocoding '{}'", place);
        let started = Instant::now();

        let response = match self
            .client
            .get(&self.geocode_url)
            .query(&[("text", place), ("apiKey", self.api_key.as_str())])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Geocoding request for '{}' failed: {}", place, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("Geocoding '{}' returned HTTP {}", place, response.status());
            return None;
        }

        let payload: wire::GeocodeResponse = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to parse geocoding response for '{}': {}", place, e);
                return None;
            }
        };

        let Some(feature) = payload.features.into_iter().next() else {
            warn!("No geocoding results for '{}'", place);
            return None;
        };

        let coordinate = Coordinate::from_lon_lat(feature.geometry.coordinates);
        info!(
            "Geocoded '{}' to ({:.4}, {:.4}) in {:.3}s",
            place,
            coordinate.latitude,
            coordinate.longitude,
            started.elapsed().as_secs_f64()
        );
        Some(coordinate)
    }

    async fn search_places(&self, criteria: &SearchCriteria) -> Result<ResolvedAnswer> {
        let filter = circle_filter(criteria);
        let limit = criteria.limit.to_string();
        debug!(
            "Searching places: categories={} filter={} limit={}",
            criteria.category_tag, filter, limit
        );
        let started = Instant::now();

        let response = self
            .client
            .get(&self.places_url)
            .query(&[
                ("categories", criteria.category_tag),
                ("filter", filter.as_str()),
                ("limit", limit.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("Geoapify request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(format!(
                "Geoapify API error {}: {}",
                status, error_text
            )));
        }

        let payload: wire::PlacesResponse = response.json().await.map_err(|e| {
            ProviderError::Parse(format!("Failed to parse Geoapify places response: {}", e))
        })?;

        let places: Vec<PlaceResult> = payload
            .features
            .into_iter()
            .map(wire::PlaceFeature::into_place_result)
            .collect();

        info!(
            "Geoapify returned {} places for {} in {:.3}s",
            places.len(),
            criteria.category_tag,
            started.elapsed().as_secs_f64()
        );

        Ok(ResolvedAnswer::from_places(places))
    }
}

/// Format the proximity filter parameter.
///
/// The places API expects `circle:{lon},{lat},{radius}` with longitude
/// first, the reverse of how coordinates read everywhere else.
fn circle_filter(criteria: &SearchCriteria) -> String {
    format!(
        "circle:{},{},{}",
        criteria.coordinate.longitude, criteria.coordinate.latitude, criteria.radius_meters
    )
}

/// Geoapify API response structures and conversion utilities
mod wire {
    use serde::Deserialize;

    use crate::models::PlaceResult;

    /// Response from the geocode search endpoint
    #[derive(Debug, Deserialize)]
    pub struct GeocodeResponse {
        #[serde(default)]
        pub features: Vec<GeocodeFeature>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodeFeature {
        pub geometry: Geometry,
    }

    /// GeoJSON point geometry; coordinates arrive as `[longitude, latitude]`
    #[derive(Debug, Deserialize)]
    pub struct Geometry {
        pub coordinates: [f64; 2],
    }

    /// Response from the places endpoint
    #[derive(Debug, Deserialize)]
    pub struct PlacesResponse {
        #[serde(default)]
        pub features: Vec<PlaceFeature>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PlaceFeature {
        #[serde(default)]
        pub properties: PlaceProperties,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct PlaceProperties {
        pub name: Option<String>,
        /// Full formatted address
        pub formatted: Option<String>,
    }

    impl PlaceFeature {
        /// Convert to a domain result, defaulting a missing name to "Unnamed"
        #[must_use]
        pub fn into_place_result(self) -> PlaceResult {
            PlaceResult {
                name: self.properties.name.unwrap_or_else(|| "Unnamed".to_string()),
                address: self.properties.formatted,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaceCategory;

    #[test]
    fn test_geocode_response_swaps_lon_lat() {
        let payload: wire::GeocodeResponse = serde_json::from_str(
            r#"{"features": [{"geometry": {"coordinates": [2.3522, 48.8566]}}]}"#,
        )
        .unwrap();

        let feature = payload.features.into_iter().next().unwrap();
        let coordinate = Coordinate::from_lon_lat(feature.geometry.coordinates);
        assert_eq!(coordinate.latitude, 48.8566);
        assert_eq!(coordinate.longitude, 2.3522);
    }

    #[test]
    fn test_geocode_response_without_features_parses_empty() {
        let payload: wire::GeocodeResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.features.is_empty());
    }

    #[test]
    fn test_place_feature_conversion_defaults_missing_name() {
        let payload: wire::PlacesResponse = serde_json::from_str(
            r#"{"features": [
                {"properties": {"name": "Louvre", "formatted": "Rue de Rivoli, Paris"}},
                {"properties": {"formatted": "Quai Branly, Paris"}},
                {"properties": {}}
            ]}"#,
        )
        .unwrap();

        let places: Vec<PlaceResult> = payload
            .features
            .into_iter()
            .map(wire::PlaceFeature::into_place_result)
            .collect();

        assert_eq!(places[0].name, "Louvre");
        assert_eq!(places[0].address.as_deref(), Some("Rue de Rivoli, Paris"));
        assert_eq!(places[1].name, "Unnamed");
        assert_eq!(places[1].address.as_deref(), Some("Quai Branly, Paris"));
        assert_eq!(places[2].name, "Unnamed");
        assert!(places[2].address.is_none());
    }

    #[test]
    fn test_empty_places_response_resolves_to_no_results() {
        let payload: wire::PlacesResponse = serde_json::from_str(r#"{"features": []}"#).unwrap();
        let places: Vec<PlaceResult> = payload
            .features
            .into_iter()
            .map(wire::PlaceFeature::into_place_result)
            .collect();
        assert_eq!(ResolvedAnswer::from_places(places), ResolvedAnswer::NoResults);
    }

    #[test]
    fn test_circle_filter_puts_longitude_first() {
        let criteria = SearchCriteria::new(
            Coordinate::new(48.8566, 2.3522),
            PlaceCategory::Attractions.category_tag(),
        );
        assert_eq!(circle_filter(&criteria), "circle:2.3522,48.8566,5000");
    }

    #[test]
    fn test_client_creation() {
        let client = GeoapifyClient::new(&GeoapifyConfig::default()).unwrap();
        assert_eq!(client.provider_name(), "Geoapify");
        assert_eq!(client.geocode_url, "https://api.geoapify.com/v1/geocode/search");
    }
}
