//! Data models for the PlaceScout application
//!
//! This module contains the core domain models organized by concern:
//! - Category: The kinds of place information a lookup can ask for
//! - Place: Coordinates, queries, search criteria and resolved results

pub mod category;
pub mod place;

// Re-export all public types for convenient access
pub use category::PlaceCategory;
pub use place::{Coordinate, PlaceQuery, PlaceResult, ResolvedAnswer, SearchCriteria};
