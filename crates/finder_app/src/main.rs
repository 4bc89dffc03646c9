mod cli;
mod terminal;

use clap::Parser;
use finder_logging::finder_info;

use crate::cli::Cli;
use crate::terminal::config::{load_config, save_config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    terminal::logging::initialize(cli.log, cli.level_filter());

    let mut config = load_config(&cli.config);
    cli.apply_overrides(&mut config);

    if cli.write_config {
        save_config(&cli.config, &config)?;
        println!("Wrote configuration to {}", cli.config.display());
        return Ok(());
    }

    finder_info!(
        "Starting recipe finder against {} (sort={}, index={})",
        config.base_url,
        config.default_sort,
        config.default_index
    );
    terminal::run_app(&config)
}
