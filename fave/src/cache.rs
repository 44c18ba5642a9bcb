use std::collections::HashSet;

/// Tweet IDs confirmed liked by this process.
///
/// Append-only and best-effort: presence means a like call succeeded earlier
/// in this process, absence guarantees nothing (the tweet may have been liked
/// through another channel or in a previous run).
#[derive(Debug, Clone, Default)]
pub struct LikedTweetCache {
    tweets: HashSet<u64>,
}

impl LikedTweetCache {
    pub fn new() -> Self {
        Self { tweets: HashSet::new() }
    }

    pub fn contains(&self, tweet_id: u64) -> bool {
        self.tweets.contains(&tweet_id)
    }

    pub fn insert(&mut self, tweet_id: u64) {
        self.tweets.insert(tweet_id);
    }

    pub fn len(&self) -> usize {
        self.tweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::LikedTweetCache;

    #[test]
    fn test_insert_is_idempotent() {
        let mut cache = LikedTweetCache::new();
        assert!(cache.is_empty());
        cache.insert(42);
        cache.insert(42);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(42));
        assert!(!cache.contains(7));
    }
}
