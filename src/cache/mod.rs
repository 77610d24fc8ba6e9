use dashmap::DashMap;

use crate::explain::{Audience, Explanation};

/// Composite key for cached explanations: one entry per address per audience.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub address: String,
    pub audience: Audience,
}

impl CacheKey {
    pub fn new(address: impl Into<String>, audience: Audience) -> Self {
        Self {
            address: address.into(),
            audience,
        }
    }
}

/// Injectable cache seam so the requester stays testable in isolation.
/// Implementations must be safe to share across concurrent scans.
pub trait ExplanationCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<Explanation>;
    fn put(&self, key: CacheKey, value: Explanation);
}

/// In-process cache over a concurrent map. No persistence, no eviction;
/// entries live for the lifetime of the process.
#[derive(Default)]
pub struct MemoryCache {
    entries: DashMap<CacheKey, Explanation>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ExplanationCache for MemoryCache {
    fn get(&self, key: &CacheKey) -> Option<Explanation> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn put(&self, key: CacheKey, value: Explanation) {
        self.entries.insert(key, value);
    }
}

/// Cache that never stores anything, for callers that want every request to
/// hit the backend.
pub struct NoCache;

impl ExplanationCache for NoCache {
    fn get(&self, _key: &CacheKey) -> Option<Explanation> {
        None
    }

    fn put(&self, _key: CacheKey, _value: Explanation) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explanation(text: &str) -> Explanation {
        Explanation {
            explanation: text.to_string(),
            score: 70,
        }
    }

    #[test]
    fn test_memory_cache_round_trip() {
        let cache = MemoryCache::new();
        let key = CacheKey::new("0xabc", Audience::Auditor);
        assert!(cache.get(&key).is_none());

        cache.put(key.clone(), explanation("risky"));
        let hit = cache.get(&key).expect("entry should be present");
        assert_eq!(hit.explanation, "risky");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_audience_is_part_of_the_key() {
        let cache = MemoryCache::new();
        cache.put(CacheKey::new("0xabc", Audience::Auditor), explanation("technical"));

        let other = CacheKey::new("0xabc", Audience::Beginner);
        assert!(cache.get(&other).is_none());
    }

    #[test]
    fn test_no_cache_never_stores() {
        let cache = NoCache;
        let key = CacheKey::new("0xabc", Audience::Developer);
        cache.put(key.clone(), explanation("ignored"));
        assert!(cache.get(&key).is_none());
    }
}
