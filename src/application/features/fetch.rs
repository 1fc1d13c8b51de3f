use anyhow::Result;
use console::style;

use crate::application::features::{self, print_article_listing};
use crate::models::enums::Source;
use crate::models::plan::FetchPlan;
use crate::models::report::{FetchStatus, SourceReport};

pub async fn run(
    query: String,
    source: Option<Source>,
    subreddit: Option<String>,
    limit: Option<u32>,
) -> Result<()> {
    let (config, manager) = features::load()?;

    let mut plan = FetchPlan::from_query(&query, &config);
    if let Some(subreddit) = subreddit {
        plan.subreddit = subreddit;
    }
    plan.limit = limit;

    let reports = match source {
        Some(source) => vec![manager.fetch_one(source, &plan).await],
        None => manager.fetch_all(&plan).await,
    };

    render_reports(&reports);
    Ok(())
}

fn render_reports(reports: &[SourceReport]) {
    let mut fetched = 0_usize;
    let mut failed = 0_u32;

    for report in reports {
        match report.status {
            FetchStatus::Success => {
                fetched += report.articles.len();
                println!(
                    "{} {} — {} article(s)",
                    style("[ok]").green(),
                    style(report.source.to_string()).bold(),
                    report.articles.len()
                );
                print_article_listing(&report.articles);
            }
            FetchStatus::Error => {
                failed += 1;
                println!(
                    "{} {} — {}",
                    style("[!!]").red(),
                    style(report.source.to_string()).bold(),
                    report.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
        println!();
    }

    println!(
        "Done. {} article(s) from {} source(s), {} failed.",
        fetched,
        reports.len() as u32 - failed,
        failed
    );
}
