mod consts;
mod error;
mod oauth;
mod response;
#[cfg(test)]
mod test;

use reqwest::{header, Client, Response, StatusCode, Url};

use consts::*;

pub use crate::error::Error;
use crate::error::Result;
pub use crate::response::{LikeResponse, ResponseError};

/// OAuth 1.0a user-context secrets for the authenticated account.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl Credentials {
    /// Read the four secrets from the environment. Values are not validated
    /// locally; a bad secret surfaces as a 401 from the platform.
    pub fn from_env() -> Result<Credentials> {
        Ok(Credentials {
            consumer_key: read_env("CONSUMER_KEY")?,
            consumer_secret: read_env("CONSUMER_SECRET")?,
            access_token: read_env("ACCESS_TOKEN")?,
            access_token_secret: read_env("ACCESS_TOKEN_SECRET")?,
        })
    }
}

fn read_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::MissingCredential(name.to_string()))
}

#[derive(Debug, Clone)]
pub struct TwitterClient {
    credentials: Credentials,
    client: reqwest::Client,
    base_url: String,
}

impl TwitterClient {
    pub fn new(credentials: Credentials) -> Result<TwitterClient> {
        Self::with_base_url(credentials, REST_API)
    }

    /// Client against a non-default API base, e.g. a local test server.
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<TwitterClient> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(TwitterClient {
            credentials,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Like (favorite) a tweet by ID on behalf of the authenticated user.
    ///
    /// A success status with error entries in the body comes back as `Ok`
    /// with a non-empty `errors` list. HTTP-level failures map onto the
    /// error taxonomy: 429 to [`Error::RateLimit`], 5xx to
    /// [`Error::ServerError`].
    pub async fn like(&self, tweet_id: u64) -> Result<LikeResponse> {
        let params = [("id", tweet_id.to_string())];
        let url = Url::parse_with_params(&format!("{}/favorites/create.json", self.base_url), &params)?;
        let authorization = oauth::authorization_header("POST", &url, &self.credentials);

        let response: Response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Like request for tweet {} returned {}", tweet_id, status);
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(rate_limit_error(&response));
        }
        if status.is_server_error() {
            return Err(Error::ServerError(status));
        }
        let response = response.error_for_status()?;
        let content = response.text().await?;

        log("favorites_create", &content).await?;
        serde_json::from_str(&content).map_err(|e| e.into())
    }
}

fn rate_limit_error(response: &Response) -> Error {
    let reset = response
        .headers()
        .get(RATE_LIMIT_RESET_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<i64>().ok());
    match reset {
        Some(reset) => Error::RateLimit { reset },
        None => Error::InvalidResponse(format!("missing {} header", RATE_LIMIT_RESET_HEADER)),
    }
}

async fn log(name: &str, content: &str) -> Result<()> {
    use std::path::PathBuf;
    use tokio::{fs::File, io::AsyncWriteExt};

    if let Ok(dir) = std::env::var("CLIENT_LOG_DIR") {
        let time = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filepath = PathBuf::from(dir).join(format!("twitter_{}_{}.json", name, time));
        let mut file = File::create(filepath).await?;
        file.write_all(content.as_bytes()).await?;
    }
    Ok(())
}
