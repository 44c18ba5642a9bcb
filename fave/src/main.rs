use std::io::{BufRead, Write};
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::sync::RwLock;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use fave::{LikeClient, LikedTweetCache};
use twitter_client::Credentials;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Initialize logger
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?
        .add_directive("hyper::proto=info".parse()?)
        .add_directive("hyper::client=info".parse()?)
        .add_directive("reqwest=info".parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    // 2. Build the client
    let credentials = Credentials::from_env()?;
    let cache = Arc::new(RwLock::new(LikedTweetCache::new()));
    let client = LikeClient::new(credentials, cache)?;

    // 3. Prompt for a tweet ID and like it
    print!("Enter the tweet ID to like: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let tweet_id: u64 = line.trim().parse()?;

    client.like_tweet(tweet_id).await?;
    Ok(())
}
