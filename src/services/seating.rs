use crate::domain::models::{CheckReport, Desk, LayoutReport, Person, UnsetPolicy};
use crate::layout::LayoutEngine;
use std::path::Path;
use tracing::info;

/// Reads a JSON array of people, as exported by the team/person store.
pub fn load_people_file(path: &Path) -> anyhow::Result<Vec<Person>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
    let people: Vec<Person> = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("invalid people file {}: {}", path.display(), e))?;
    Ok(people)
}

pub fn plan_layout(people: &[Person], policy: UnsetPolicy) -> anyhow::Result<LayoutReport> {
    let seats = LayoutEngine::new(policy).calculate(people)?;
    if seats.len() != people.len() {
        info!(
            seated = seats.len(),
            total = people.len(),
            "some people were left out of the layout"
        );
    }
    let desks = seats
        .into_iter()
        .enumerate()
        .map(|(i, p)| Desk {
            position: i + 1,
            id: p.id.clone(),
            name: p.name.clone(),
            team: p.team.as_ref().map(|t| t.name.clone()),
            dog_status: p.dog_status,
        })
        .collect();
    Ok(LayoutReport { desks })
}

pub fn check_report(
    store: &Path,
    policy: UnsetPolicy,
    teams: usize,
    people: &[Person],
) -> CheckReport {
    CheckReport {
        store: store.to_string_lossy().to_string(),
        unset_policy: policy,
        teams,
        people: people.len(),
        unset_preferences: people.iter().filter(|p| p.dog_status.is_none()).count(),
        teamless: people.iter().filter(|p| p.team.is_none()).count(),
    }
}
