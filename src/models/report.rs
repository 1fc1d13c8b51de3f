use serde::Serialize;

use crate::models::article::Article;
use crate::models::enums::Source;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FetchStatus {
    Success,
    Error,
}

/// Per-source outcome envelope. An error report never carries articles and
/// always carries a message; the constructors enforce that.
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub source: Source,
    pub status: FetchStatus,
    pub articles: Vec<Article>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SourceReport {
    pub fn success(source: Source, articles: Vec<Article>) -> Self {
        Self {
            source,
            status: FetchStatus::Success,
            articles,
            error: None,
        }
    }

    pub fn failure(source: Source, error: impl ToString) -> Self {
        Self {
            source,
            status: FetchStatus::Error,
            articles: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == FetchStatus::Success
    }
}
