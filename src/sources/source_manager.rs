use std::collections::HashSet;

use anyhow::Result;
use tracing::debug;

use crate::models::app_config::AppConfig;
use crate::models::article::Article;
use crate::models::enums::{Preset, Source};
use crate::models::plan::FetchPlan;
use crate::models::report::SourceReport;
use crate::sources::guardian::{GuardianAdapter, GuardianClient};
use crate::sources::newsapi::{NewsApiAdapter, NewsApiClient};
use crate::sources::reddit::{RedditAdapter, RedditClient};

/// The digest keeps this many articles after de-duplication.
pub const DIGEST_CAP: usize = 20;

pub struct SourceManager {
    guardian: GuardianAdapter,
    reddit: RedditAdapter,
    newsapi: NewsApiAdapter,
}

impl SourceManager {
    /// `newsapi_key` is the already-resolved key (environment over config);
    /// None leaves the aggregator constructed but disabled.
    pub fn new(config: &AppConfig, newsapi_key: Option<&str>) -> Result<Self> {
        let guardian_client = GuardianClient::new(config.guardian.api_key.as_deref(), None)?;
        let reddit_client = RedditClient::new(None)?;
        let newsapi_client = match newsapi_key {
            Some(key) => Some(NewsApiClient::new(key, None)?),
            None => None,
        };

        let guardian = GuardianAdapter::new(
            guardian_client,
            config.guardian.section.clone(),
            config.guardian.page_size,
        );
        let reddit = RedditAdapter::new(
            reddit_client,
            config.reddit.limit,
            config.reddit.keywords.clone(),
        );
        let newsapi = NewsApiAdapter::new(
            newsapi_client,
            config.newsapi.language.clone(),
            config.newsapi.page_size,
        );

        Ok(Self {
            guardian,
            reddit,
            newsapi,
        })
    }

    pub async fn fetch_one(&self, source: Source, plan: &FetchPlan) -> SourceReport {
        match source {
            Source::Guardian => self.guardian.fetch(&plan.guardian_query, plan.limit).await,
            Source::Reddit => self.reddit.fetch(&plan.subreddit, plan.limit).await,
            Source::NewsApi => self.newsapi.fetch(&plan.newsapi_query, plan.limit).await,
        }
    }

    /// Invokes every source sequentially in the fixed `Source::ALL` order.
    /// One source failing never stops the others; every outcome is kept.
    pub async fn fetch_all(&self, plan: &FetchPlan) -> Vec<SourceReport> {
        let mut reports = Vec::with_capacity(Source::ALL.len());
        for source in Source::ALL {
            reports.push(self.fetch_one(source, plan).await);
        }
        reports
    }

    pub async fn fetch_and_merge(&self, plan: &FetchPlan) -> Vec<Article> {
        Self::merge_reports(self.fetch_all(plan).await)
    }

    /// Concatenates articles from successful reports and stable-sorts them
    /// newest first, so equal timestamps keep concatenation order.
    pub fn merge_reports(reports: Vec<SourceReport>) -> Vec<Article> {
        let mut merged: Vec<Article> = reports
            .into_iter()
            .filter(SourceReport::is_success)
            .flat_map(|report| report.articles)
            .collect();

        merged.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        merged
    }

    /// Sweeps every preset, de-duplicates by title, and keeps the newest
    /// `DIGEST_CAP` articles.
    pub async fn fetch_digest(&self) -> Vec<Article> {
        let mut collected = Vec::new();

        for preset in Preset::ALL {
            let plan = FetchPlan::from_preset(preset);
            let articles = self.fetch_and_merge(&plan).await;
            debug!(preset = %preset, count = articles.len(), "digest pass complete");
            collected.extend(articles);
        }

        Self::dedup_by_title(&mut collected);
        collected.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        collected.truncate(DIGEST_CAP);
        collected
    }

    /// Case-folded title de-duplication; the first occurrence wins.
    pub fn dedup_by_title(articles: &mut Vec<Article>) {
        let mut seen = HashSet::new();
        articles.retain(|article| seen.insert(article.title.to_lowercase()));
    }
}

#[cfg(test)]
#[path = "../../tests/sources/source_manager.rs"]
mod tests;
