//! Place information categories and their provider query tables

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlaceScoutError;

/// The kinds of place information a lookup can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceCategory {
    /// Sightseeing spots and tourist attractions
    Attractions,
    /// Restaurants and other eateries
    Restaurants,
    /// Entertainment and leisure activities
    Activities,
    /// Public and private transportation options
    Transportation,
}

impl PlaceCategory {
    /// All categories, in the order reports are produced
    pub const ALL: [PlaceCategory; 4] = [
        PlaceCategory::Attractions,
        PlaceCategory::Restaurants,
        PlaceCategory::Activities,
        PlaceCategory::Transportation,
    ];

    /// Category tag understood by the Geoapify places index
    #[must_use]
    pub fn category_tag(self) -> &'static str {
        match self {
            PlaceCategory::Attractions => "tourism.sights",
            PlaceCategory::Restaurants => "catering.restaurant",
            PlaceCategory::Activities => "entertainment",
            PlaceCategory::Transportation => "transport",
        }
    }

    /// Natural-language query sent to the web-search fallback
    #[must_use]
    pub fn fallback_query(self, place: &str) -> String {
        match self {
            PlaceCategory::Attractions => {
                format!("top attractive places in and around {place}")
            }
            PlaceCategory::Restaurants => {
                format!("what are the top 10 restaurants and eateries in and around {place}")
            }
            PlaceCategory::Activities => {
                format!("activities in and around {place}")
            }
            PlaceCategory::Transportation => {
                format!("What are the different modes of transportations available in {place}")
            }
        }
    }

    /// Subject clause shared by both report templates, e.g. "the attractions of Paris"
    #[must_use]
    pub fn subject(self, place: &str) -> String {
        match self {
            PlaceCategory::Attractions => format!("the attractions of {place}"),
            PlaceCategory::Restaurants => format!("the restaurants of {place}"),
            PlaceCategory::Activities => format!("the activities in and around {place}"),
            PlaceCategory::Transportation => {
                format!("the modes of transportation available in {place}")
            }
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlaceCategory::Attractions => "attractions",
            PlaceCategory::Restaurants => "restaurants",
            PlaceCategory::Activities => "activities",
            PlaceCategory::Transportation => "transportation",
        };
        write!(f, "{label}")
    }
}

impl FromStr for PlaceCategory {
    type Err = PlaceScoutError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "attractions" => Ok(PlaceCategory::Attractions),
            "restaurants" => Ok(PlaceCategory::Restaurants),
            "activities" => Ok(PlaceCategory::Activities),
            "transportation" => Ok(PlaceCategory::Transportation),
            other => Err(PlaceScoutError::validation(format!(
                "unknown category '{other}', expected one of: attractions, restaurants, activities, transportation"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PlaceCategory::Attractions, "tourism.sights")]
    #[case(PlaceCategory::Restaurants, "catering.restaurant")]
    #[case(PlaceCategory::Activities, "entertainment")]
    #[case(PlaceCategory::Transportation, "transport")]
    fn test_category_tags(#[case] category: PlaceCategory, #[case] tag: &str) {
        assert_eq!(category.category_tag(), tag);
    }

    #[rstest]
    #[case(
        PlaceCategory::Attractions,
        "top attractive places in and around Vienna"
    )]
    #[case(
        PlaceCategory::Restaurants,
        "what are the top 10 restaurants and eateries in and around Vienna"
    )]
    #[case(PlaceCategory::Activities, "activities in and around Vienna")]
    #[case(
        PlaceCategory::Transportation,
        "What are the different modes of transportations available in Vienna"
    )]
    fn test_fallback_queries(#[case] category: PlaceCategory, #[case] expected: &str) {
        assert_eq!(category.fallback_query("Vienna"), expected);
    }

    #[rstest]
    #[case(PlaceCategory::Attractions, "the attractions of Vienna")]
    #[case(PlaceCategory::Restaurants, "the restaurants of Vienna")]
    #[case(PlaceCategory::Activities, "the activities in and around Vienna")]
    #[case(
        PlaceCategory::Transportation,
        "the modes of transportation available in Vienna"
    )]
    fn test_subject_clauses(#[case] category: PlaceCategory, #[case] expected: &str) {
        assert_eq!(category.subject("Vienna"), expected);
    }

    #[test]
    fn test_parse_accepts_mixed_case_and_whitespace() {
        assert_eq!(
            " Restaurants ".parse::<PlaceCategory>().unwrap(),
            PlaceCategory::Restaurants
        );
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let err = "hotels".parse::<PlaceCategory>().unwrap_err();
        assert!(err.to_string().contains("hotels"));
    }

    #[test]
    fn test_all_covers_every_category_once() {
        assert_eq!(PlaceCategory::ALL.len(), 4);
        for category in PlaceCategory::ALL {
            assert_eq!(
                PlaceCategory::ALL.iter().filter(|c| **c == category).count(),
                1
            );
        }
    }
}
