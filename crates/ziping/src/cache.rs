//! Injectable bounded result cache.
//!
//! The analyzer never owns a global cache; callers inject an
//! `AnalysisCache` (or `NoopCache` in tests). Keys cover the full immutable
//! input tuple, so a hit is always a complete, previously computed result.

use std::num::NonZeroUsize;

use lru::LruCache;
use ziping_fortune::Gender;

use crate::analyze::Analysis;
use crate::request::ChartRequest;

/// The full input tuple, quantized for hashing: milliseconds for the
/// second field, microdegrees for the longitude.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second_millis: u32,
    longitude_microdeg: Option<i64>,
    gender: Gender,
    periods: u8,
}

impl CacheKey {
    pub fn new(request: &ChartRequest, periods: u8) -> Self {
        Self {
            year: request.birth.year,
            month: request.birth.month,
            day: request.birth.day,
            hour: request.birth.hour,
            minute: request.birth.minute,
            second_millis: (request.birth.second * 1_000.0) as u32,
            longitude_microdeg: request.longitude.map(|l| (l * 1_000_000.0) as i64),
            gender: request.gender,
            periods,
        }
    }
}

/// Get/put interface for complete analysis results.
pub trait AnalysisCache {
    fn get(&mut self, key: &CacheKey) -> Option<Analysis>;
    fn put(&mut self, key: CacheKey, value: Analysis);
}

/// Size-capped, recency-evicting cache.
pub struct LruAnalysisCache {
    inner: LruCache<CacheKey, Analysis>,
}

impl LruAnalysisCache {
    /// Create a cache holding at most `capacity` results (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: LruCache::new(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl AnalysisCache for LruAnalysisCache {
    fn get(&mut self, key: &CacheKey) -> Option<Analysis> {
        self.inner.get(key).cloned()
    }

    fn put(&mut self, key: CacheKey, value: Analysis) {
        self.inner.put(key, value);
    }
}

/// A cache that never stores; keeps test runs fully deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl AnalysisCache for NoopCache {
    fn get(&mut self, _key: &CacheKey) -> Option<Analysis> {
        None
    }

    fn put(&mut self, _key: CacheKey, _value: Analysis) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziping_time::CivilDateTime;

    fn request() -> ChartRequest {
        ChartRequest::new(CivilDateTime::new(2000, 6, 10, 12, 0, 0.0), Gender::Male)
    }

    #[test]
    fn key_covers_every_input_field() {
        let base = CacheKey::new(&request(), 10);
        assert_eq!(base, CacheKey::new(&request(), 10));

        let other_gender = ChartRequest::new(
            CivilDateTime::new(2000, 6, 10, 12, 0, 0.0),
            Gender::Female,
        );
        assert_ne!(base, CacheKey::new(&other_gender, 10));

        let other_lon = request().with_longitude(116.4);
        assert_ne!(base, CacheKey::new(&other_lon, 10));

        assert_ne!(base, CacheKey::new(&request(), 8));

        let other_minute =
            ChartRequest::new(CivilDateTime::new(2000, 6, 10, 12, 1, 0.0), Gender::Male);
        assert_ne!(base, CacheKey::new(&other_minute, 10));
    }

    #[test]
    fn zero_capacity_still_holds_one() {
        let cache = LruAnalysisCache::new(0);
        assert!(cache.is_empty());
    }
}
