use crate::domain::models::{DogStatus, Person, PersonRecord, StoreFile, Team, TeamRef};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("team not found: {0}")]
    TeamNotFound(String),
    #[error("person not found: {0}")]
    PersonNotFound(String),
    #[error("name must not be empty")]
    EmptyName,
    #[error("cannot access store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store {} is not valid json: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fields of a person as given to [`DeskStore::put_person`].
#[derive(Debug, Clone, Copy)]
pub struct PersonInput<'a> {
    pub id: Option<&'a str>,
    pub name: &'a str,
    pub team_id: Option<&'a str>,
    pub dog_status: Option<DogStatus>,
}

/// Team and person persistence. The layout engine never sees this; it only
/// gets the list returned by [`DeskStore::people`].
pub trait DeskStore {
    fn teams(&self) -> Vec<Team>;

    /// People in insertion order, with their team resolved.
    fn people(&self) -> Vec<Person>;

    /// Creates a team when `id` is `None`, renames it otherwise.
    fn put_team(&mut self, id: Option<&str>, name: &str) -> Result<Team, StoreError>;

    /// Removes a team and returns how many members lost their team.
    fn delete_team(&mut self, id: &str) -> Result<usize, StoreError>;

    /// Creates a person when `input.id` is `None`, replaces it otherwise.
    fn put_person(&mut self, input: PersonInput<'_>) -> Result<Person, StoreError>;

    fn delete_person(&mut self, id: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    doc: StoreFile,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_doc(doc: StoreFile) -> Self {
        Self { doc }
    }

    pub fn doc(&self) -> &StoreFile {
        &self.doc
    }

    fn resolve(&self, record: &PersonRecord) -> Person {
        let team = record.team_id.as_deref().and_then(|id| {
            self.doc.teams.iter().find(|t| t.id == id).map(|t| TeamRef {
                id: t.id.clone(),
                name: t.name.clone(),
            })
        });
        Person {
            id: record.id.clone(),
            name: record.name.clone(),
            team,
            dog_status: record.dog_status,
        }
    }
}

fn clean_name(name: &str) -> Result<String, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::EmptyName);
    }
    Ok(name.to_string())
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl DeskStore for MemoryStore {
    fn teams(&self) -> Vec<Team> {
        self.doc.teams.clone()
    }

    fn people(&self) -> Vec<Person> {
        self.doc.people.iter().map(|r| self.resolve(r)).collect()
    }

    fn put_team(&mut self, id: Option<&str>, name: &str) -> Result<Team, StoreError> {
        let name = clean_name(name)?;
        let Some(id) = id else {
            let team = Team { id: new_id(), name };
            self.doc.teams.push(team.clone());
            return Ok(team);
        };
        let existing = self
            .doc
            .teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::TeamNotFound(id.to_string()))?;
        existing.name = name;
        Ok(existing.clone())
    }

    fn delete_team(&mut self, id: &str) -> Result<usize, StoreError> {
        let before = self.doc.teams.len();
        self.doc.teams.retain(|t| t.id != id);
        if self.doc.teams.len() == before {
            return Err(StoreError::TeamNotFound(id.to_string()));
        }
        let mut detached = 0usize;
        for person in &mut self.doc.people {
            if person.team_id.as_deref() == Some(id) {
                person.team_id = None;
                detached += 1;
            }
        }
        Ok(detached)
    }

    fn put_person(&mut self, input: PersonInput<'_>) -> Result<Person, StoreError> {
        let name = clean_name(input.name)?;
        if let Some(team_id) = input.team_id {
            if !self.doc.teams.iter().any(|t| t.id == team_id) {
                return Err(StoreError::TeamNotFound(team_id.to_string()));
            }
        }
        let record = PersonRecord {
            id: input.id.map(str::to_string).unwrap_or_else(new_id),
            name,
            team_id: input.team_id.map(str::to_string),
            dog_status: input.dog_status,
        };

        match input.id {
            None => self.doc.people.push(record.clone()),
            Some(id) => {
                let existing = self
                    .doc
                    .people
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or_else(|| StoreError::PersonNotFound(id.to_string()))?;
                *existing = record.clone();
            }
        }
        Ok(self.resolve(&record))
    }

    fn delete_person(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.doc.people.len();
        self.doc.people.retain(|p| p.id != id);
        if self.doc.people.len() == before {
            return Err(StoreError::PersonNotFound(id.to_string()));
        }
        Ok(())
    }
}

/// [`MemoryStore`] persisted as pretty JSON after every successful change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let doc = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            StoreFile::default()
        };
        debug!(
            path = %path.display(),
            teams = doc.teams.len(),
            people = doc.people.len(),
            "opened store"
        );
        Ok(Self {
            path: path.to_path_buf(),
            inner: MemoryStore::from_doc(doc),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let raw = serde_json::to_string_pretty(self.inner.doc()).map_err(|source| {
            StoreError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, raw).map_err(io_err)
    }
}

impl DeskStore for JsonFileStore {
    fn teams(&self) -> Vec<Team> {
        self.inner.teams()
    }

    fn people(&self) -> Vec<Person> {
        self.inner.people()
    }

    fn put_team(&mut self, id: Option<&str>, name: &str) -> Result<Team, StoreError> {
        let team = self.inner.put_team(id, name)?;
        self.save()?;
        info!(id = %team.id, name = %team.name, "saved team");
        Ok(team)
    }

    fn delete_team(&mut self, id: &str) -> Result<usize, StoreError> {
        let detached = self.inner.delete_team(id)?;
        self.save()?;
        info!(id, detached, "removed team");
        Ok(detached)
    }

    fn put_person(&mut self, input: PersonInput<'_>) -> Result<Person, StoreError> {
        let person = self.inner.put_person(input)?;
        self.save()?;
        info!(id = %person.id, name = %person.name, "saved person");
        Ok(person)
    }

    fn delete_person(&mut self, id: &str) -> Result<(), StoreError> {
        self.inner.delete_person(id)?;
        self.save()?;
        info!(id, "removed person");
        Ok(())
    }
}
