use anyhow::{Context, Result};
use reqwest::{Client, header};

use crate::sources::error::SourceError;

use super::newsapi_dtos::{NewsApiErrorDto, NewsApiResponseDto};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";

#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(api_key: &str, base_url: Option<&str>) -> Result<Self> {
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
            api_key: api_key.to_string(),
        })
    }

    pub async fn everything(
        &self,
        query: &str,
        language: &str,
        page_size: u32,
    ) -> Result<NewsApiResponseDto, SourceError> {
        let url = format!("{}/v2/everything", self.base_url);
        let page_size = page_size.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("language", language),
                ("pageSize", page_size.as_str()),
                ("sortBy", "publishedAt"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(SourceError::from)?;

        let status = response.status();
        if !status.is_success() {
            // The API explains itself in the body; surface that message.
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::from_status(status, &url, error_body_message(&body)));
        }

        response
            .json::<NewsApiResponseDto>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }
}

fn error_body_message(body: &str) -> Option<String> {
    serde_json::from_str::<NewsApiErrorDto>(body)
        .ok()
        .map(|e| e.message)
        .filter(|message| !message.is_empty())
}

#[cfg(test)]
#[path = "../../../tests/sources/newsapi/newsapi_client.rs"]
mod tests;
