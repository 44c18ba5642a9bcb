mod cache;
mod client;
mod util;

pub use cache::LikedTweetCache;
pub use client::LikeClient;
pub use util::MAX_CONCURRENT_REQUESTS;
