use crate::models::Profile;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// In-memory TTL cache for advisor texts
///
/// Inserting under an existing key replaces the text, so the latest
/// answer always wins.
#[derive(Clone)]
pub struct AdviceCache {
    cache: moka::future::Cache<String, String>,
}

impl AdviceCache {
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        let hit = self.cache.get(key).await;
        if hit.is_some() {
            tracing::trace!("Advice cache hit: {}", key);
        } else {
            tracing::trace!("Advice cache miss: {}", key);
        }
        hit
    }

    pub async fn set(&self, key: &str, text: String) {
        self.cache.insert(key.to_string(), text).await;
        tracing::trace!("Advice cache set: {}", key);
    }

    pub async fn delete(&self, key: &str) {
        self.cache.invalidate(key).await;
    }
}

/// Cache key builder
///
/// Keys embed both ids plus the parts of each profile the prompt reads, so
/// editing a profile naturally misses the old entry.
pub struct CacheKey;

impl CacheKey {
    pub fn compatibility(me: &Profile, other: &Profile) -> String {
        format!("compat:{}:{}", fingerprint(me), fingerprint(other))
    }

    pub fn icebreaker(me: &Profile, other: &Profile) -> String {
        format!("icebreaker:{}:{}", fingerprint(me), fingerprint(other))
    }
}

fn fingerprint(profile: &Profile) -> String {
    let interests: Vec<&str> = profile.interests.iter().map(|i| i.label()).collect();
    let mut hasher = DefaultHasher::new();
    profile.bio.hash(&mut hasher);
    format!("{}/{}/{}/{:x}", profile.id, profile.age, interests.join(","), hasher.finish())
}
