//! Desk layout engine.
//!
//! Seats everyone in one line so that teams stay together and people who
//! avoid dogs end up as far as possible from people who bring one.
//!
//! ## Pipeline
//! 1. `grouper.rs` — split people into teams by first appearance.
//! 2. `orderer.rs` — order each team: avoiders first, likers as buffers.
//! 3. `classifier.rs` — label each ordered team with a [`Category`].
//! 4. `composer.rs` — lay the teams out by category.
//!
//! Every call recomputes the whole layout from its input. Nothing is cached
//! and the input is never modified; the result borrows from it.

pub mod classifier;
pub mod composer;
pub mod grouper;
pub mod orderer;

pub use classifier::{classify, Category};
pub use composer::{compose, Buckets};
pub use grouper::{group_by_team, TeamGroup, TeamKey, NO_TEAM_KEY};
pub use orderer::order_team;

use crate::domain::models::{DogStatus, Person, UnsetPolicy};
use tracing::{debug, warn};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("{name} ({id}) has no dog preference")]
    UnsetPreference { id: String, name: String },
}

/// Preference used for seating. People without one count as likers under
/// [`UnsetPolicy::Neutral`] and are not seated otherwise.
pub fn seating_status(person: &Person, policy: UnsetPolicy) -> Option<DogStatus> {
    match (person.dog_status, policy) {
        (Some(status), _) => Some(status),
        (None, UnsetPolicy::Neutral) => Some(DogStatus::Like),
        (None, UnsetPolicy::Drop | UnsetPolicy::Reject) => None,
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutEngine {
    unset_policy: UnsetPolicy,
}

impl LayoutEngine {
    pub fn new(unset_policy: UnsetPolicy) -> Self {
        Self { unset_policy }
    }

    pub fn unset_policy(&self) -> UnsetPolicy {
        self.unset_policy
    }

    /// Computes the seating order. Only fails under [`UnsetPolicy::Reject`].
    pub fn calculate<'a>(&self, people: &'a [Person]) -> Result<Vec<&'a Person>, LayoutError> {
        if self.unset_policy == UnsetPolicy::Reject {
            if let Some(p) = people.iter().find(|p| p.dog_status.is_none()) {
                return Err(LayoutError::UnsetPreference {
                    id: p.id.clone(),
                    name: p.name.clone(),
                });
            }
        }
        Ok(seat(people, self.unset_policy))
    }
}

/// Seating order with people lacking a preference used as buffers.
pub fn calculate_layout(people: &[Person]) -> Vec<&Person> {
    seat(people, UnsetPolicy::Neutral)
}

fn seat(people: &[Person], policy: UnsetPolicy) -> Vec<&Person> {
    if people.is_empty() {
        return Vec::new();
    }

    let groups = group_by_team(people);
    debug!(people = people.len(), teams = groups.len(), "grouped people");

    let mut buckets = Buckets::default();
    for group in groups {
        let ordered = order_team(&group.members, policy);
        match classify(&ordered, policy) {
            Some(category) => {
                debug!(team = %group.key, ?category, members = ordered.len(), "classified team");
                buckets.push(category, ordered);
            }
            None => warn!(team = %group.key, "no member can be seated, team left out"),
        }
    }

    let seats = compose(buckets);
    debug!(seats = seats.len(), "layout composed");
    seats
}
