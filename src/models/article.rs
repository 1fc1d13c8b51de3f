use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Placeholder for items whose source payload carries no usable title.
pub const UNTITLED: &str = "(untitled)";

/// One news item, normalized across sources.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub url: String,
    pub source_name: String,

    /// Unparseable or absent timestamps fall back to the UNIX epoch so the
    /// item sorts last in a newest-first merge.
    pub published_at: DateTime<Utc>,

    /// Source-specific fields kept for transparency (byline, forum score, ...).
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Article {
    pub fn new(
        title: String,
        summary: String,
        url: String,
        source_name: String,
        published_at: DateTime<Utc>,
        extra: Map<String, Value>,
    ) -> Self {
        let title = if title.trim().is_empty() {
            UNTITLED.to_string()
        } else {
            title
        };

        Self {
            title,
            summary,
            url,
            source_name,
            published_at,
            extra,
        }
    }

    /// Timestamp for listings; the epoch fallback renders as a dash.
    pub fn published_display(&self) -> String {
        if self.published_at == DateTime::UNIX_EPOCH {
            "-".to_string()
        } else {
            self.published_at.format("%Y-%m-%d %H:%M UTC").to_string()
        }
    }
}
