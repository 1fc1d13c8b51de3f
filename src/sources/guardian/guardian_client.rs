use anyhow::{Context, Result};
use reqwest::{Client, header};

use crate::sources::error::SourceError;

use super::guardian_dtos::GuardianSearchDto;

pub const DEFAULT_BASE_URL: &str = "https://content.guardianapis.com";

/// Key the content API accepts for a limited request volume when the user
/// has not configured their own.
const PUBLIC_TEST_KEY: &str = "test";

#[derive(Debug, Clone)]
pub struct GuardianClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GuardianClient {
    pub fn new(api_key: Option<&str>, base_url: Option<&str>) -> Result<Self> {
        let mut base = base_url.unwrap_or(DEFAULT_BASE_URL).to_string();

        if !base.starts_with("http://") && !base.starts_with("https://") {
            base = format!("https://{}", base);
        }

        let mut headers = header::HeaderMap::new();

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
            api_key: api_key.unwrap_or(PUBLIC_TEST_KEY).to_string(),
        })
    }

    pub async fn search(
        &self,
        query: &str,
        section: &str,
        page_size: u32,
    ) -> Result<GuardianSearchDto, SourceError> {
        let url = format!("{}/search", self.base_url);
        let page_size = page_size.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("show-fields", "headline,trailText,byline"),
                ("section", section),
                ("page-size", page_size.as_str()),
                ("api-key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(SourceError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::from_status(status, &url, None));
        }

        response
            .json::<GuardianSearchDto>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../../tests/sources/guardian/guardian_client.rs"]
mod tests;
