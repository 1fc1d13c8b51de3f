use anyhow::{Context, Result};
use reqwest::{Client, header};

use crate::sources::error::SourceError;

use super::reddit_dtos::RedditListingDto;

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

#[derive(Debug, Clone)]
pub struct RedditClient {
    client: Client,
    base_url: String,
}

impl RedditClient {
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        let mut base = base_url.unwrap_or(DEFAULT_BASE_URL).to_string();

        if !base.starts_with("http://") && !base.starts_with("https://") {
            base = format!("https://{}", base);
        }

        let mut headers = header::HeaderMap::new();

        // The listing endpoint rejects requests without a User-Agent.
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&user_agent)
                .context("Failed to create user agent header")?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base,
        })
    }

    pub async fn hot(&self, subreddit: &str, limit: u32) -> Result<RedditListingDto, SourceError> {
        let url = format!("{}/r/{}/hot.json", self.base_url, subreddit);
        let limit = limit.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit.as_str())])
            .send()
            .await
            .map_err(SourceError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::from_status(status, &url, None));
        }

        response
            .json::<RedditListingDto>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../../tests/sources/reddit/reddit_client.rs"]
mod tests;
