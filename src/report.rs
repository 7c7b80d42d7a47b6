//! Report rendering for resolved place lookups
//!
//! Turns structured search results or fallback answers into the single
//! human-readable string handed to downstream consumers. The wording is
//! part of the public contract: downstream agents pattern-match on these
//! messages, so changes here are breaking changes.

use crate::models::{PlaceCategory, PlaceResult};

/// Failure cause quoted when the primary search succeeds with zero results
pub const NO_RESULTS: &str = "No results found.";

/// Render the primary-tier report citing the provider that produced it.
#[must_use]
pub fn found_report(
    category: PlaceCategory,
    place: &str,
    provider: &str,
    places: &[PlaceResult],
) -> String {
    format!(
        "Following are {} as suggested by {}: {}",
        category.subject(place),
        provider,
        render_places(places)
    )
}

/// Render the fallback-tier report, quoting the primary failure cause.
#[must_use]
pub fn fallback_report(
    category: PlaceCategory,
    place: &str,
    provider: &str,
    cause: &str,
    answer: &str,
) -> String {
    format!(
        "{} cannot find the details due to {}. \nFollowing are {}: {}",
        provider,
        cause,
        category.subject(place),
        answer
    )
}

/// Render a geocoding miss. No tier runs without a coordinate, so this is
/// the whole report.
#[must_use]
pub fn geocode_failure_report(place: &str) -> String {
    format!("Could not geocode {place}")
}

fn render_places(places: &[PlaceResult]) -> String {
    places
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
