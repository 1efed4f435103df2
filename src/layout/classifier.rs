use crate::domain::models::{DogStatus, Person, UnsetPolicy};
use crate::layout::seating_status;
use serde::Serialize;

/// How an ordered team block interacts with its neighbours.
///
/// Decided by which preferences the block contains and which one it ends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    OnlyAvoid,
    OnlyLike,
    OnlyHave,
    AvoidEndLike,
    HaveEndLike,
    HaveEndHave,
    BothEndHave,
    BothEndLike,
}

/// Classifies a team that has already been through [`order_team`].
///
/// Returns `None` when no member has a usable preference.
///
/// [`order_team`]: crate::layout::orderer::order_team
pub fn classify(ordered: &[&Person], policy: UnsetPolicy) -> Option<Category> {
    let statuses: Vec<DogStatus> = ordered
        .iter()
        .filter_map(|p| seating_status(p, policy))
        .collect();
    let last = *statuses.last()?;
    let has_avoid = statuses.contains(&DogStatus::Avoid);
    let has_have = statuses.contains(&DogStatus::Have);

    let category = if has_avoid && has_have {
        match last {
            DogStatus::Have => Category::BothEndHave,
            DogStatus::Avoid | DogStatus::Like => Category::BothEndLike,
        }
    } else if statuses.iter().all(|s| *s == last) {
        match last {
            DogStatus::Avoid => Category::OnlyAvoid,
            DogStatus::Like => Category::OnlyLike,
            DogStatus::Have => Category::OnlyHave,
        }
    } else if has_have {
        match last {
            DogStatus::Have => Category::HaveEndHave,
            DogStatus::Avoid | DogStatus::Like => Category::HaveEndLike,
        }
    } else {
        Category::AvoidEndLike
    };
    Some(category)
}
