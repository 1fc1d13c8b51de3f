pub mod config;
pub mod digest;
pub mod fetch;
pub mod merge;
pub mod presets;

use anyhow::Result;
use console::style;

use crate::models::app_config::AppConfig;
use crate::models::article::Article;
use crate::services::storage::config_storage::ConfigStorage;
use crate::sources::source_manager::SourceManager;
use crate::utils::static_paths::NewswirePaths;

/// Loads the saved configuration and builds the manager from it.
pub(crate) fn load() -> Result<(AppConfig, SourceManager)> {
    let paths = NewswirePaths::new();
    let storage = ConfigStorage::new(&paths.config.config_file)?;
    let config = storage.get_config().clone();

    let key = newsapi_key(&config);
    let manager = SourceManager::new(&config, key.as_deref())?;
    Ok((config, manager))
}

/// Environment wins over the config file.
pub(crate) fn newsapi_key(config: &AppConfig) -> Option<String> {
    std::env::var("NEWSAPI_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| config.newsapi.api_key.clone())
}

pub(crate) fn truncate_cell(value: &str, max: usize) -> String {
    let char_count = value.chars().count();
    if char_count <= max {
        return value.to_string();
    }

    let mut out = String::new();
    for ch in value.chars().take(max.saturating_sub(3)) {
        out.push(ch);
    }
    out.push_str("...");
    out
}

pub(crate) fn print_article_listing(articles: &[Article]) {
    for (idx, article) in articles.iter().enumerate() {
        println!(
            "{:>3}. {}",
            idx + 1,
            style(truncate_cell(&article.title, 96)).bold()
        );
        println!(
            "     {}  {}",
            style(&article.source_name).cyan(),
            style(article.published_display()).dim()
        );
        if !article.summary.is_empty() {
            println!("     {}", style(truncate_cell(&article.summary, 160)).dim());
        }
        println!("     {}", article.url);
    }
}
