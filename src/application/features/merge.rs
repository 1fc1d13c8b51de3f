use anyhow::Result;
use console::style;

use crate::application::features::{self, print_article_listing};
use crate::models::enums::Preset;
use crate::models::plan::FetchPlan;
use crate::sources::source_manager::SourceManager;

pub async fn run(
    query: String,
    preset: Option<Preset>,
    subreddit: Option<String>,
    limit: Option<u32>,
) -> Result<()> {
    let (config, manager) = features::load()?;

    let mut plan = match preset {
        Some(preset) => FetchPlan::from_preset(preset),
        None => FetchPlan::from_query(&query, &config),
    };
    if let Some(subreddit) = subreddit {
        plan.subreddit = subreddit;
    }
    plan.limit = limit;

    let reports = manager.fetch_all(&plan).await;

    // Failed sources are reported inline, above the merged listing.
    for report in &reports {
        if let Some(error) = &report.error {
            println!(
                "{} {} — {}",
                style("[!!]").red(),
                style(report.source.to_string()).bold(),
                error
            );
        }
    }

    let articles = SourceManager::merge_reports(reports);
    if articles.is_empty() {
        println!("No articles found.");
        return Ok(());
    }

    println!("{} article(s), newest first:\n", articles.len());
    print_article_listing(&articles);
    Ok(())
}
