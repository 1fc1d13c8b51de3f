use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::debug;

use crate::models::article::Article;
use crate::models::enums::Source;
use crate::models::report::SourceReport;

use super::guardian_client::GuardianClient;
use super::guardian_dtos::GuardianItemDto;

#[derive(Debug, Clone)]
pub struct GuardianAdapter {
    client: GuardianClient,
    section: String,
    page_size: u32,
}

impl GuardianAdapter {
    pub fn new(client: GuardianClient, section: String, page_size: u32) -> Self {
        Self {
            client,
            section,
            page_size,
        }
    }

    /// Never returns Err: transport, status, and decode failures all become
    /// error reports.
    pub async fn fetch(&self, query: &str, limit: Option<u32>) -> SourceReport {
        let page_size = limit.unwrap_or(self.page_size);

        match self.client.search(query, &self.section, page_size).await {
            Ok(dto) => {
                let articles: Vec<Article> = dto
                    .response
                    .results
                    .into_iter()
                    .map(Self::convert_item)
                    .collect();
                debug!(count = articles.len(), "guardian search complete");
                SourceReport::success(Source::Guardian, articles)
            }
            Err(err) => SourceReport::failure(Source::Guardian, err),
        }
    }

    fn convert_item(item: GuardianItemDto) -> Article {
        let GuardianItemDto {
            web_title,
            web_url,
            web_publication_date,
            section_name,
            fields,
        } = item;
        let fields = fields.unwrap_or_default();

        // Prefer the display headline; the item's web title is always set.
        let title = if fields.headline.trim().is_empty() {
            web_title
        } else {
            fields.headline
        };

        let mut extra = Map::new();
        if !section_name.is_empty() {
            extra.insert("section".to_string(), Value::String(section_name));
        }
        if !fields.byline.is_empty() {
            extra.insert("byline".to_string(), Value::String(fields.byline));
        }

        Article::new(
            title,
            fields.trail_text,
            web_url,
            Source::Guardian.display_name().to_string(),
            Self::parse_timestamp(&web_publication_date),
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
#[path = "../../../tests/sources/guardian/guardian_adapter.rs"]
mod tests;
