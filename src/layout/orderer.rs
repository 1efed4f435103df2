use crate::domain::models::{DogStatus, Person, UnsetPolicy};
use crate::layout::seating_status;
use tracing::warn;

/// Reorders one team so dog-avoiders sit at the front of the block and
/// dog-likers are spread as buffers in front of each dog-haver.
///
/// With two or more dog-havers the likers are split over `havers + 1` gaps;
/// the first `likers % gaps` buffers get one extra liker and whatever is left
/// after the last haver goes at the end of the block.
pub fn order_team<'a>(members: &[&'a Person], policy: UnsetPolicy) -> Vec<&'a Person> {
    let mut avoid = Vec::new();
    let mut like = Vec::new();
    let mut have = Vec::new();
    for &person in members {
        match seating_status(person, policy) {
            Some(DogStatus::Avoid) => avoid.push(person),
            Some(DogStatus::Like) => like.push(person),
            Some(DogStatus::Have) => have.push(person),
            None => warn!(
                id = %person.id,
                name = %person.name,
                "no dog preference, leaving out of layout"
            ),
        }
    }

    let mut ordered = Vec::with_capacity(avoid.len() + like.len() + have.len());
    ordered.extend(avoid);

    if have.len() > 1 {
        let gaps = have.len() + 1;
        let per_gap = like.len() / gaps;
        let extra = like.len() % gaps;
        let mut likes = like.into_iter();
        for (i, dog_owner) in have.into_iter().enumerate() {
            let buffer = if extra > i { per_gap + 1 } else { per_gap };
            ordered.extend(likes.by_ref().take(buffer));
            ordered.push(dog_owner);
        }
        ordered.extend(likes);
    } else {
        ordered.extend(like);
        ordered.extend(have);
    }

    ordered
}
