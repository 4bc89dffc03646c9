//! Command-line flags for the terminal app.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use finder_core::{IndexVariant, SortKey};
use log::LevelFilter;

use crate::terminal::config::FinderConfig;
use crate::terminal::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "recipe-finder",
    version,
    about = "Find recipes from the ingredients you have on hand",
    long_about = "Interactive recipe search.\n\n\
                  Enter ingredients and optional tags, then browse ranked matches\n\
                  from the recipe service and open any recipe for full detail."
)]
pub struct Cli {
    /// Configuration file (RON). Missing files fall back to defaults.
    #[arg(long, value_name = "PATH", default_value = "recipe_finder.ron")]
    pub config: PathBuf,

    /// Base URL of the recipe service (overrides the config file).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Initial sort key: matched_ingredients, total_time or num_steps.
    #[arg(long, value_parser = SortKey::from_str)]
    pub sort: Option<SortKey>,

    /// Initial index variant: trie or hashmap.
    #[arg(long, value_parser = IndexVariant::from_str)]
    pub index: Option<IndexVariant>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value = "file")]
    pub log: LogDestination,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the effective configuration to `--config` and exit.
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    pub fn level_filter(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Flags win over the config file.
    pub fn apply_overrides(&self, config: &mut FinderConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(sort) = self.sort {
            config.default_sort = sort.as_str().to_string();
        }
        if let Some(index) = self.index {
            config.default_index = index.as_str().to_string();
        }
    }
}
