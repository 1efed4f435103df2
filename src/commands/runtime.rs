use crate::cli::{Cli, Commands};
use desks::services::config::Settings;
use desks::services::output::{json_envelope, or_dash, print_one, print_out};
use desks::services::seating::{check_report, load_people_file, plan_layout};
use desks::services::storage::{DeskStore, JsonFileStore};
use tracing::debug;

pub fn handle_runtime_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Layout { input } => {
            let people = match input {
                Some(path) => load_people_file(path)?,
                None => JsonFileStore::open(&settings.store_path)?.people(),
            };
            debug!(people = people.len(), policy = ?settings.unset_policy, "computing layout");
            let report = plan_layout(&people, settings.unset_policy)?;
            if cli.json {
                println!("{}", json_envelope(&report)?);
            } else {
                print_out(false, &report.desks, |d| {
                    format!(
                        "{}\t{}\t{}\t{}",
                        d.position,
                        d.name,
                        or_dash(d.team.as_deref()),
                        or_dash(d.dog_status)
                    )
                })?;
            }
        }
        Commands::Check => {
            let store = JsonFileStore::open(&settings.store_path)?;
            let report = check_report(
                store.path(),
                settings.unset_policy,
                store.teams().len(),
                &store.people(),
            );
            print_one(cli.json, report, |r| {
                format!(
                    "store={} policy={} teams={} people={} unset={} teamless={}",
                    r.store, r.unset_policy, r.teams, r.people, r.unset_preferences, r.teamless
                )
            })?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}
