use std::sync::Arc;

use tokio::sync::{RwLock, Semaphore};

use twitter_client::{Credentials, Error, TwitterClient};

use crate::cache::LikedTweetCache;
use crate::util;

type Result<T> = std::result::Result<T, Error>;

/// Likes single tweets against the platform API, with a bounded number of
/// concurrent calls and a process-lifetime cache of confirmed likes.
#[derive(Debug, Clone)]
pub struct LikeClient {
    api: TwitterClient,
    cache: Arc<RwLock<LikedTweetCache>>,
    semaphore: Arc<Semaphore>,
}

impl LikeClient {
    /// Build an authenticated client. The cache is owned by the caller so
    /// its lifetime and sharing stay explicit; construction failure is fatal.
    pub fn new(credentials: Credentials, cache: Arc<RwLock<LikedTweetCache>>) -> Result<LikeClient> {
        let api = TwitterClient::new(credentials).map_err(|e| {
            tracing::error!("Failed to build Twitter API client: {}", e);
            e
        })?;
        tracing::info!("Authentication successful.");
        Ok(Self::with_api(api, cache))
    }

    /// Wrap an existing API client, e.g. one pointed at a test server.
    pub fn with_api(api: TwitterClient, cache: Arc<RwLock<LikedTweetCache>>) -> LikeClient {
        LikeClient {
            api,
            cache,
            semaphore: Arc::new(Semaphore::new(util::MAX_CONCURRENT_REQUESTS)),
        }
    }

    /// Like the tweet with the given ID.
    ///
    /// Holds one of the 5 request permits for the whole operation. Already
    /// cached IDs are skipped without a network call. Server errors are
    /// retried on the backoff schedule and propagated once exhausted;
    /// rate-limit and application-level rejections are logged and absorbed.
    pub async fn like_tweet(&self, tweet_id: u64) -> Result<()> {
        // The semaphore is never closed, so acquisition only awaits a permit.
        let _permit = self.semaphore.acquire().await.expect("semaphore closed");

        if self.cache.read().await.contains(tweet_id) {
            tracing::info!("Tweet {} is already liked. Skipping.", tweet_id);
            return Ok(());
        }

        // NOTE: The cache check and the call are deliberately not atomic;
        // two concurrent calls for the same ID may both reach the network.
        // The platform treats a duplicate like as an application rejection.
        match util::retry(|| self.api.like(tweet_id)).await {
            Ok(response) if !response.errors.is_empty() => {
                for error in &response.errors {
                    tracing::error!("Failed to like tweet {}: {}", tweet_id, error);
                }
                Ok(())
            }
            Ok(_) => {
                tracing::info!("Successfully liked tweet {}.", tweet_id);
                self.cache.write().await.insert(tweet_id);
                Ok(())
            }
            Err(Error::RateLimit { reset }) => {
                let wait_time = reset - chrono::Utc::now().timestamp();
                tracing::warn!("Rate limit exceeded. Retry in {} seconds.", wait_time);
                Ok(())
            }
            Err(e) if e.retryable() => {
                tracing::error!("Twitter API error occurred: {}", e);
                Err(e)
            }
            Err(e) => {
                tracing::error!("An unexpected error occurred while liking the tweet: {}", e);
                Err(e)
            }
        }
    }
}
