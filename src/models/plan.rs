use crate::models::app_config::AppConfig;
use crate::models::enums::Preset;

/// Per-source query strings and options for one fetch pass. Adapters receive
/// finished queries; all expansion happens here.
#[derive(Debug, Clone)]
pub struct FetchPlan {
    pub guardian_query: String,
    pub newsapi_query: String,
    pub subreddit: String,
    /// Per-source result cap; adapters fall back to their configured page
    /// size when unset.
    pub limit: Option<u32>,
}

impl FetchPlan {
    /// Free-text query. The CMS and aggregator queries are widened with the
    /// investment terms the search endpoints respond well to; the forum
    /// source is targeted by subreddit, not query.
    pub fn from_query(query: &str, config: &AppConfig) -> Self {
        Self {
            guardian_query: format!("{} funding venture capital startup", query),
            newsapi_query: format!(
                "{} OR funding OR venture capital OR startup investment OR M&A OR IPO",
                query
            ),
            subreddit: config.reddit.subreddit.clone(),
            limit: None,
        }
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self {
            guardian_query: preset.cms_query().to_string(),
            newsapi_query: preset.aggregator_query().to_string(),
            subreddit: preset.subreddit().to_string(),
            limit: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/models/plan.rs"]
mod tests;
