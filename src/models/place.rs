//! Place lookup models: coordinates, queries, search criteria and results

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::PlaceCategory;

/// Default search radius around the geocoded coordinate, in meters
pub const DEFAULT_RADIUS_METERS: u32 = 5000;
/// Default maximum number of places requested per search
pub const DEFAULT_LIMIT: usize = 10;

/// Geographic coordinate
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a coordinate from a GeoJSON `[longitude, latitude]` pair.
    ///
    /// Geocoding responses carry longitude first, so the components must be
    /// swapped here before the rest of the crate sees them.
    #[must_use]
    pub fn from_lon_lat(pair: [f64; 2]) -> Self {
        Self {
            latitude: pair[1],
            longitude: pair[0],
        }
    }
}

/// A single lookup request: the place asked about and the category wanted
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceQuery {
    /// Free-text place name as supplied by the caller
    pub place_name: String,
    /// Category of information requested
    pub category: PlaceCategory,
}

impl PlaceQuery {
    /// Create a new query
    #[must_use]
    pub fn new<S: Into<String>>(place_name: S, category: PlaceCategory) -> Self {
        Self {
            place_name: place_name.into(),
            category,
        }
    }
}

/// Parameters for one categorized proximity search
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    /// Center of the search circle
    pub coordinate: Coordinate,
    /// Provider category tag, see [`PlaceCategory::category_tag`]
    pub category_tag: &'static str,
    /// Radius of the search circle in meters
    pub radius_meters: u32,
    /// Maximum number of places to request
    pub limit: usize,
}

impl SearchCriteria {
    /// Create criteria with the default radius and limit
    #[must_use]
    pub fn new(coordinate: Coordinate, category_tag: &'static str) -> Self {
        Self {
            coordinate,
            category_tag,
            radius_meters: DEFAULT_RADIUS_METERS,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Override the search radius
    #[must_use]
    pub fn with_radius(mut self, radius_meters: u32) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    /// Override the result limit
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// One place returned by the structured search
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaceResult {
    /// Display name of the place
    pub name: String,
    /// Formatted address, when the provider supplies one
    pub address: Option<String>,
}

impl PlaceResult {
    /// Create a new place result
    #[must_use]
    pub fn new<S: Into<String>>(name: S, address: Option<String>) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

impl fmt::Display for PlaceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let address = self.address.as_deref().unwrap_or("No address");
        write!(f, "{} ({})", self.name, address)
    }
}

/// What a lookup resolved to before report rendering.
///
/// Exactly one variant is ever populated: structured places from the
/// primary tier, a free-text answer from the fallback tier, or nothing
/// at all when the primary search succeeded with zero matches.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedAnswer {
    /// Places in provider order; never empty
    Places(Vec<PlaceResult>),
    /// Free-text answer synthesized by a web search
    Answer(String),
    /// The provider responded successfully but matched nothing
    NoResults,
}

impl ResolvedAnswer {
    /// Wrap a provider result list, normalizing an empty list to `NoResults`
    /// so `Places` is never empty.
    #[must_use]
    pub fn from_places(places: Vec<PlaceResult>) -> Self {
        if places.is_empty() {
            ResolvedAnswer::NoResults
        } else {
            ResolvedAnswer::Places(places)
        }
    }
}
