use anyhow::Result;

use crate::models::enums::Preset;

pub fn run() -> Result<()> {
    let name_width = Preset::ALL
        .iter()
        .map(|preset| preset.to_string().len())
        .max()
        .unwrap_or(0)
        .max("Preset".len());

    println!(
        "{:<width$}  {:<28}  {:<18}  {}",
        "Preset",
        "CMS query",
        "Subreddit",
        "Aggregator query",
        width = name_width
    );

    for preset in Preset::ALL {
        println!(
            "{:<width$}  {:<28}  {:<18}  {}",
            preset.to_string(),
            preset.cms_query(),
            format!("r/{}", preset.subreddit()),
            preset.aggregator_query(),
            width = name_width
        );
    }

    Ok(())
}
