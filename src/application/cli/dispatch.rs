use anyhow::Result;

use crate::application::cli::arguments::{Cli, Commands, ConfigAction, DEFAULT_QUERY};
use crate::application::features;

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            // Bare invocation: one demonstration merged fetch.
            None => features::merge::run(DEFAULT_QUERY.to_string(), None, None, None).await,

            Some(Commands::Fetch {
                query,
                source,
                subreddit,
                limit,
            }) => features::fetch::run(query, source, subreddit, limit).await,

            Some(Commands::Merge {
                query,
                preset,
                subreddit,
                limit,
            }) => features::merge::run(query, preset, subreddit, limit).await,

            Some(Commands::Digest) => features::digest::run().await,

            Some(Commands::Presets) => features::presets::run(),

            Some(Commands::Config { action }) => match action {
                ConfigAction::Set { keys } => features::config::run_set(keys),
                ConfigAction::Get { keys } => features::config::run_get(keys),
                ConfigAction::List => features::config::run_list(),
                ConfigAction::Show => features::config::run_show(),
                ConfigAction::Reset => features::config::run_reset(),
            },
        }
    }
}
