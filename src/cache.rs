//! In-memory cache for finished lookup reports
//!
//! Optional optimization layer in front of the lookup facade, keyed by
//! normalized place name and category. Entries carry a jittered TTL so a
//! batch of lookups made together does not expire in lockstep. The store
//! lives entirely in process memory; nothing is persisted across runs.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};
use tracing::debug;

use crate::models::PlaceQuery;

/// One cached report and its validity window
#[derive(Debug, Clone)]
struct ReportCacheEntry {
    report: String,
    cached_at: SystemTime,
    expires_at: SystemTime,
}

/// In-memory store of finished lookup reports
pub struct LookupCache {
    entries: Mutex<HashMap<PlaceQuery, ReportCacheEntry>>,
    ttl: Duration,
}

impl LookupCache {
    /// Create a cache whose entries live for roughly `ttl`
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Fetch a fresh report for the query, dropping the entry if expired.
    ///
    /// A poisoned store is treated as a miss so lookups keep working.
    pub fn get(&self, query: &PlaceQuery) -> Option<String> {
        let key = normalized_key(query);
        let Ok(mut entries) = self.entries.lock() else {
            return None;
        };

        let now = SystemTime::now();
        let expired = entries.get(&key).is_some_and(|entry| now > entry.expires_at);
        if expired {
            debug!("Cache expired for '{}' {}", key.place_name, key.category);
            entries.remove(&key);
            return None;
        }

        entries.get(&key).map(|entry| {
            let age = now.duration_since(entry.cached_at).unwrap_or_default();
            debug!(
                "Cache hit for '{}' {} (age {}s)",
                key.place_name,
                key.category,
                age.as_secs()
            );
            entry.report.clone()
        })
    }

    /// Store a finished report for the query
    pub fn put(&self, query: &PlaceQuery, report: String) {
        let now = SystemTime::now();
        let entry = ReportCacheEntry {
            report,
            cached_at: now,
            expires_at: now + self.jittered_ttl(),
        };

        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        entries.insert(normalized_key(query), entry);
    }

    /// TTL with 10% jitter so entries written together expire apart
    fn jittered_ttl(&self) -> Duration {
        let jitter: f64 = rand::rng().random_range(0.9..1.1);
        self.ttl.mul_f64(jitter)
    }
}

/// Cache key: place names are compared case-insensitively and ignoring
/// surrounding whitespace
fn normalized_key(query: &PlaceQuery) -> PlaceQuery {
    PlaceQuery {
        place_name: query.place_name.trim().to_lowercase(),
        category: query.category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaceCategory;

    #[test]
    fn test_cache_round_trip() {
        let cache = LookupCache::new(Duration::from_secs(60));
        let query = PlaceQuery::new("Paris", PlaceCategory::Attractions);

        assert!(cache.get(&query).is_none());
        cache.put(&query, "report text".to_string());
        assert_eq!(cache.get(&query).as_deref(), Some("report text"));
    }

    #[test]
    fn test_cache_key_ignores_case_and_whitespace() {
        let cache = LookupCache::new(Duration::from_secs(60));
        cache.put(
            &PlaceQuery::new("  Paris ", PlaceCategory::Restaurants),
            "restaurants report".to_string(),
        );

        let hit = cache.get(&PlaceQuery::new("paris", PlaceCategory::Restaurants));
        assert_eq!(hit.as_deref(), Some("restaurants report"));
    }

    #[test]
    fn test_cache_distinguishes_categories() {
        let cache = LookupCache::new(Duration::from_secs(60));
        let attractions = PlaceQuery::new("Paris", PlaceCategory::Attractions);
        cache.put(&attractions, "attractions report".to_string());

        assert!(cache.get(&PlaceQuery::new("Paris", PlaceCategory::Transportation)).is_none());
        assert!(cache.get(&attractions).is_some());
    }

    #[test]
    fn test_cache_expires_entries() {
        let cache = LookupCache::new(Duration::ZERO);
        let query = PlaceQuery::new("Paris", PlaceCategory::Activities);
        cache.put(&query, "short-lived report".to_string());

        // Zero TTL means the entry is already past its expiry on read
        assert!(cache.get(&query).is_none());
    }
}
