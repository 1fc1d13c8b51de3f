use anyhow::Result;
use console::style;

use crate::application::features::{self, print_article_listing};

pub async fn run() -> Result<()> {
    let (_config, manager) = features::load()?;

    println!("Sweeping topic presets...");
    let articles = manager.fetch_digest().await;

    if articles.is_empty() {
        println!("No articles found.");
        return Ok(());
    }

    println!(
        "\n{}\n",
        style(format!("Investment digest — {} article(s)", articles.len())).bold()
    );
    print_article_listing(&articles);
    Ok(())
}
