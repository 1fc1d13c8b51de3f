use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Map, Value};
use tracing::debug;

use crate::models::article::Article;
use crate::models::enums::Source;
use crate::models::report::SourceReport;

use super::reddit_client::{DEFAULT_BASE_URL, RedditClient};
use super::reddit_dtos::RedditPostDto;

#[derive(Debug, Clone)]
pub struct RedditAdapter {
    client: RedditClient,
    limit: u32,
    keywords: Vec<String>,
}

impl RedditAdapter {
    pub fn new(client: RedditClient, limit: u32, keywords: Vec<String>) -> Self {
        // Matching is case-insensitive; fold once up front.
        let keywords = keywords.into_iter().map(|k| k.to_lowercase()).collect();
        Self {
            client,
            limit,
            keywords,
        }
    }

    /// Never returns Err: transport, status, and decode failures all become
    /// error reports.
    pub async fn fetch(&self, subreddit: &str, limit: Option<u32>) -> SourceReport {
        let limit = limit.unwrap_or(self.limit);

        match self.client.hot(subreddit, limit).await {
            Ok(dto) => {
                let articles: Vec<Article> = dto
                    .data
                    .children
                    .into_iter()
                    .map(|child| child.data)
                    .filter(|post| self.matches_keywords(&post.title))
                    .map(|post| Self::convert_post(post, subreddit))
                    .collect();
                debug!(count = articles.len(), subreddit, "reddit listing complete");
                SourceReport::success(Source::Reddit, articles)
            }
            Err(err) => SourceReport::failure(Source::Reddit, err),
        }
    }

    fn matches_keywords(&self, title: &str) -> bool {
        if self.keywords.is_empty() {
            return true;
        }
        let title = title.to_lowercase();
        self.keywords.iter().any(|keyword| title.contains(keyword))
    }

    fn convert_post(post: RedditPostDto, subreddit: &str) -> Article {
        let RedditPostDto {
            title,
            selftext,
            url,
            permalink,
            author,
            created_utc,
            score,
            num_comments,
        } = post;

        // Link posts carry an outbound url; self posts only a permalink.
        let url = if url.trim().is_empty() {
            format!("{}{}", DEFAULT_BASE_URL, permalink)
        } else {
            url
        };

        let mut extra = Map::new();
        extra.insert("score".to_string(), Value::from(score));
        extra.insert("num_comments".to_string(), Value::from(num_comments));
        if !author.is_empty() {
            extra.insert("author".to_string(), Value::String(author));
        }
        if !permalink.is_empty() {
            extra.insert("permalink".to_string(), Value::String(permalink));
        }

        Article::new(
            title,
            selftext,
            url,
            format!("r/{}", subreddit),
            Self::from_epoch_seconds(created_utc),
            extra,
        )
    }

    fn from_epoch_seconds(seconds: f64) -> DateTime<Utc> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return DateTime::UNIX_EPOCH;
        }
        Utc.timestamp_opt(seconds as i64, 0)
            .single()
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
}

#[cfg(test)]
#[path = "../../../tests/sources/reddit/reddit_adapter.rs"]
mod tests;
