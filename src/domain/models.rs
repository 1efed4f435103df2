use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dog-exposure preference of a person.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum DogStatus {
    /// Wants to sit far from dogs.
    Avoid,
    /// No dog, comfortable near dogs. Used as a buffer.
    Like,
    /// Brings a dog.
    Have,
}

impl fmt::Display for DogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DogStatus::Avoid => "AVOID",
            DogStatus::Like => "LIKE",
            DogStatus::Have => "HAVE",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub dog_status: Option<DogStatus>,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team: None,
            dog_status: None,
        }
    }

    pub fn in_team(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.team = Some(TeamRef {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    pub fn with_status(mut self, status: DogStatus) -> Self {
        self.dog_status = Some(status);
        self
    }
}

/// How people without a dog preference are treated by the layout engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnsetPolicy {
    /// Seat them as if they liked dogs, so they act as buffers.
    #[default]
    Neutral,
    /// Leave them out of the layout.
    Drop,
    /// Refuse to compute a layout.
    Reject,
}

impl fmt::Display for UnsetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnsetPolicy::Neutral => "neutral",
            UnsetPolicy::Drop => "drop",
            UnsetPolicy::Reject => "reject",
        };
        f.write_str(s)
    }
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// Stored form of a person: team is referenced by id only.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub dog_status: Option<DogStatus>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct StoreFile {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub people: Vec<PersonRecord>,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Desk {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub team: Option<String>,
    pub dog_status: Option<DogStatus>,
}

#[derive(Serialize)]
pub struct LayoutReport {
    pub desks: Vec<Desk>,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub store: String,
    pub unset_policy: UnsetPolicy,
    pub teams: usize,
    pub people: usize,
    pub unset_preferences: usize,
    pub teamless: usize,
}

#[derive(Serialize)]
pub struct TeamRemoval {
    pub id: String,
    pub detached_members: usize,
}
