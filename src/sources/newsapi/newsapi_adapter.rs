use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::debug;

use crate::models::article::Article;
use crate::models::enums::Source;
use crate::models::report::SourceReport;
use crate::sources::error::SourceError;

use super::newsapi_client::NewsApiClient;
use super::newsapi_dtos::NewsApiArticleDto;

const DISABLED_MESSAGE: &str =
    "no API key configured; set newsapi.api_key or the NEWSAPI_KEY environment variable";

/// Aggregator adapter. Constructible without a key; in that state every
/// fetch reports the source as disabled without touching the network.
#[derive(Debug, Clone)]
pub struct NewsApiAdapter {
    client: Option<NewsApiClient>,
    language: String,
    page_size: u32,
}

impl NewsApiAdapter {
    pub fn new(client: Option<NewsApiClient>, language: String, page_size: u32) -> Self {
        Self {
            client,
            language,
            page_size,
        }
    }

    pub async fn fetch(&self, query: &str, limit: Option<u32>) -> SourceReport {
        let Some(client) = &self.client else {
            return SourceReport::failure(Source::NewsApi, SourceError::Disabled(DISABLED_MESSAGE));
        };

        let page_size = limit.unwrap_or(self.page_size);

        match client.everything(query, &self.language, page_size).await {
            Ok(dto) => {
                let articles: Vec<Article> = dto
                    .articles
                    .into_iter()
                    .map(Self::convert_article)
                    .collect();
                debug!(count = articles.len(), "newsapi search complete");
                SourceReport::success(Source::NewsApi, articles)
            }
            Err(err) => SourceReport::failure(Source::NewsApi, err),
        }
    }

    fn convert_article(dto: NewsApiArticleDto) -> Article {
        let NewsApiArticleDto {
            source,
            author,
            title,
            description,
            url,
            published_at,
        } = dto;

        let source_name = if source.name.trim().is_empty() {
            Source::NewsApi.display_name().to_string()
        } else {
            source.name
        };

        let mut extra = Map::new();
        if !author.is_empty() {
            extra.insert("author".to_string(), Value::String(author));
        }
        if let Some(outlet_id) = source.id {
            extra.insert("outlet_id".to_string(), Value::String(outlet_id));
        }

        Article::new(
            title,
            description,
            url,
            source_name,
            Self::parse_timestamp(&published_at),
            extra,
        )
    }

    fn parse_timestamp(raw: &str) -> DateTime<Utc> {
        if raw.trim().is_empty() {
            return DateTime::UNIX_EPOCH;
        }
        raw.parse::<DateTime<Utc>>().unwrap_or(DateTime::UNIX_EPOCH)
    }
}

#[cfg(test)]
#[path = "../../../tests/sources/newsapi/newsapi_adapter.rs"]
mod tests;
