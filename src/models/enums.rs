use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Source {
    Guardian,
    Reddit,
    #[value(name = "newsapi")]
    NewsApi,
}

impl Source {
    /// Fixed fetch order: CMS, forum, aggregator.
    pub const ALL: [Source; 3] = [Source::Guardian, Source::Reddit, Source::NewsApi];

    pub fn display_name(&self) -> &'static str {
        match self {
            Source::Guardian => "The Guardian",
            Source::Reddit => "Reddit",
            Source::NewsApi => "NewsAPI",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Named topic shortcuts mapped to per-source query strings. Query
/// construction only; fetching and merging are identical to a free-text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Preset {
    VentureCapital,
    StartupInvestment,
    MaDeals,
    Ipo,
    PrivateEquity,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::VentureCapital,
        Preset::StartupInvestment,
        Preset::MaDeals,
        Preset::Ipo,
        Preset::PrivateEquity,
    ];

    /// Query string for the CMS content search.
    pub fn cms_query(&self) -> &'static str {
        match self {
            Preset::VentureCapital => "venture capital funding",
            Preset::StartupInvestment => "startup investment",
            Preset::MaDeals => "mergers and acquisitions",
            Preset::Ipo => "IPO announcement",
            Preset::PrivateEquity => "private equity",
        }
    }

    /// Query string for the aggregator, with the OR-expansion its search
    /// syntax expects.
    pub fn aggregator_query(&self) -> &'static str {
        match self {
            Preset::VentureCapital => "\"venture capital\" OR funding round OR series A",
            Preset::StartupInvestment => "startup investment OR seed funding",
            Preset::MaDeals => "M&A OR merger OR acquisition",
            Preset::Ipo => "IPO OR \"public offering\"",
            Preset::PrivateEquity => "\"private equity\" OR buyout",
        }
    }

    /// Sub-community the forum source is read from for this topic.
    pub fn subreddit(&self) -> &'static str {
        match self {
            Preset::VentureCapital => "venturecapital",
            Preset::StartupInvestment => "startups",
            Preset::MaDeals => "SecurityAnalysis",
            Preset::Ipo => "stocks",
            Preset::PrivateEquity => "investing",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::VentureCapital => "venture-capital",
            Preset::StartupInvestment => "startup-investment",
            Preset::MaDeals => "ma-deals",
            Preset::Ipo => "ipo",
            Preset::PrivateEquity => "private-equity",
        };
        f.write_str(name)
    }
}
