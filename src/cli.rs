use clap::{Parser, Subcommand};
use desks::domain::models::{DogStatus, UnsetPolicy};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "desks", version, about = "Desk layout planner for teams and their dogs")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "DESKS_STORE",
        help = "Team/person store file (default: ~/.config/desks/store.json)"
    )]
    pub store: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_enum,
        help = "How to seat people without a dog preference"
    )]
    pub unset_policy: Option<UnsetPolicy>,
    #[arg(short, long, global = true, help = "Debug logging on stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the seating order
    Layout {
        #[arg(long, help = "Read people from a JSON file instead of the store")]
        input: Option<PathBuf>,
    },
    Team {
        #[command(subcommand)]
        command: TeamCommands,
    },
    Person {
        #[command(subcommand)]
        command: PersonCommands,
    },
    /// Summarize config and store contents
    Check,
}

#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    Put {
        name: String,
        #[arg(long, help = "Rename the team with this id")]
        id: Option<String>,
    },
    List,
    Remove {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PersonCommands {
    Put {
        name: String,
        #[arg(long, help = "Update the person with this id")]
        id: Option<String>,
        #[arg(long, help = "Team id")]
        team: Option<String>,
        #[arg(long, value_enum)]
        dog: Option<DogStatus>,
    },
    List,
    Remove {
        id: String,
    },
}
