use crate::cli::{Cli, Commands, PersonCommands, TeamCommands};
use desks::domain::models::TeamRemoval;
use desks::services::config::Settings;
use desks::services::output::{or_dash, print_one, print_out};
use desks::services::storage::{DeskStore, JsonFileStore, PersonInput};

pub fn handle_team_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<bool> {
    let Commands::Team { command } = &cli.command else {
        return Ok(false);
    };
    let mut store = JsonFileStore::open(&settings.store_path)?;

    match command {
        TeamCommands::Put { name, id } => {
            let renaming = id.is_some();
            let team = store.put_team(id.as_deref(), name)?;
            print_one(cli.json, team, |t| {
                let verb = if renaming { "renamed" } else { "added" };
                format!("{} team {}\t{}", verb, t.id, t.name)
            })?;
        }
        TeamCommands::List => {
            print_out(cli.json, &store.teams(), |t| format!("{}\t{}", t.id, t.name))?;
        }
        TeamCommands::Remove { id } => {
            let detached_members = store.delete_team(id)?;
            let removal = TeamRemoval {
                id: id.clone(),
                detached_members,
            };
            print_one(cli.json, removal, |r| {
                format!("removed team {} ({} members now without a team)", r.id, r.detached_members)
            })?;
        }
    }

    Ok(true)
}

pub fn handle_person_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<bool> {
    let Commands::Person { command } = &cli.command else {
        return Ok(false);
    };
    let mut store = JsonFileStore::open(&settings.store_path)?;

    match command {
        PersonCommands::Put {
            name,
            id,
            team,
            dog,
        } => {
            let person = store.put_person(PersonInput {
                id: id.as_deref(),
                name: name.as_str(),
                team_id: team.as_deref(),
                dog_status: *dog,
            })?;
            print_one(cli.json, person, |p| format!("saved person {}\t{}", p.id, p.name))?;
        }
        PersonCommands::List => {
            print_out(cli.json, &store.people(), |p| {
                format!(
                    "{}\t{}\t{}\t{}",
                    p.id,
                    p.name,
                    or_dash(p.team.as_ref().map(|t| t.name.as_str())),
                    or_dash(p.dog_status)
                )
            })?;
        }
        PersonCommands::Remove { id } => {
            store.delete_person(id)?;
            print_one(cli.json, id, |i| format!("removed person {}", i))?;
        }
    }

    Ok(true)
}
