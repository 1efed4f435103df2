use clap::Parser;
use desks::services::config::{load_config, Settings};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Cli;
use commands::{handle_person_commands, handle_runtime_commands, handle_team_commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::resolve(load_config()?, cli.store.clone(), cli.unset_policy)?;
    debug!(
        store = %settings.store_path.display(),
        policy = %settings.unset_policy,
        "resolved settings"
    );

    if handle_team_commands(&cli, &settings)? {
        return Ok(());
    }
    if handle_person_commands(&cli, &settings)? {
        return Ok(());
    }
    handle_runtime_commands(&cli, &settings)?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
