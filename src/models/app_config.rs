use serde::{Deserialize, Serialize};

fn default_page_size() -> u32 {
    15
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardianConfig {
    /// Optional key for the content API; the public `test` key is used when
    /// absent (limited request volume).
    pub api_key: Option<String>,
    pub section: String,
    pub page_size: u32,
}

impl Default for GuardianConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            section: "business".to_string(),
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditConfig {
    pub subreddit: String,
    pub limit: u32,
    /// Posts whose titles match none of these are dropped. An empty list
    /// disables the filter.
    pub keywords: Vec<String>,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            subreddit: "investing".to_string(),
            limit: default_page_size(),
            keywords: [
                "investment",
                "funding",
                "venture",
                "capital",
                "startup",
                "ipo",
                "acquisition",
                "merger",
                "fund",
                "raise",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsApiConfig {
    /// Required for the aggregator; without one the source reports itself as
    /// disabled. The NEWSAPI_KEY environment variable takes precedence.
    pub api_key: Option<String>,
    pub language: String,
    pub page_size: u32,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            language: "en".to_string(),
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub guardian: GuardianConfig,
    pub reddit: RedditConfig,
    pub newsapi: NewsApiConfig,
}
