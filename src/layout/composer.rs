use crate::domain::models::Person;
use crate::layout::classifier::Category;
use std::collections::VecDeque;

type Block<'a> = Vec<&'a Person>;

/// Ordered team blocks, one queue per [`Category`], each in grouping order.
#[derive(Debug, Default)]
pub struct Buckets<'a> {
    only_avoid: VecDeque<Block<'a>>,
    only_like: VecDeque<Block<'a>>,
    only_have: VecDeque<Block<'a>>,
    avoid_end_like: VecDeque<Block<'a>>,
    have_end_like: VecDeque<Block<'a>>,
    have_end_have: VecDeque<Block<'a>>,
    both_end_have: VecDeque<Block<'a>>,
    both_end_like: VecDeque<Block<'a>>,
}

impl<'a> Buckets<'a> {
    pub fn push(&mut self, category: Category, block: Block<'a>) {
        self.bucket_mut(category).push_back(block);
    }

    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::OnlyAvoid => self.only_avoid.len(),
            Category::OnlyLike => self.only_like.len(),
            Category::OnlyHave => self.only_have.len(),
            Category::AvoidEndLike => self.avoid_end_like.len(),
            Category::HaveEndLike => self.have_end_like.len(),
            Category::HaveEndHave => self.have_end_have.len(),
            Category::BothEndHave => self.both_end_have.len(),
            Category::BothEndLike => self.both_end_like.len(),
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut VecDeque<Block<'a>> {
        match category {
            Category::OnlyAvoid => &mut self.only_avoid,
            Category::OnlyLike => &mut self.only_like,
            Category::OnlyHave => &mut self.only_have,
            Category::AvoidEndLike => &mut self.avoid_end_like,
            Category::HaveEndLike => &mut self.have_end_like,
            Category::HaveEndHave => &mut self.have_end_have,
            Category::BothEndHave => &mut self.both_end_have,
            Category::BothEndLike => &mut self.both_end_like,
        }
    }

    /// Teams that can sit between two dog-ending mixed teams, likers first.
    fn next_buffer(&mut self) -> Option<Block<'a>> {
        self.only_like
            .pop_front()
            .or_else(|| self.have_end_like.pop_front())
    }

    /// Mixed teams ending on a dog-haver, each followed by a buffer team
    /// while buffers last. Without such teams it is just the likers then the
    /// have-end-like teams.
    fn take_middle(&mut self) -> Vec<Block<'a>> {
        let mut middle = Vec::new();
        let Some(first) = self.both_end_have.pop_front() else {
            middle.extend(self.only_like.drain(..));
            middle.extend(self.have_end_like.drain(..));
            return middle;
        };

        middle.push(first);
        while !(self.both_end_have.is_empty()
            && self.only_like.is_empty()
            && self.have_end_like.is_empty())
        {
            if let Some(buffer) = self.next_buffer() {
                middle.push(buffer);
            }
            if let Some(next) = self.both_end_have.pop_front() {
                middle.push(next);
            }
        }
        middle
    }
}

/// Lays the buckets out from the avoid end to the dog end of the line.
pub fn compose<'a>(mut buckets: Buckets<'a>) -> Vec<&'a Person> {
    let middle = buckets.take_middle();
    let Buckets {
        only_avoid,
        only_have,
        avoid_end_like,
        have_end_have,
        both_end_like,
        ..
    } = buckets;

    only_avoid
        .into_iter()
        .chain(avoid_end_like)
        .chain(both_end_like)
        .chain(middle)
        .chain(have_end_have)
        .chain(only_have)
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{compose, Buckets};
    use crate::domain::models::Person;
    use crate::layout::classifier::Category;

    fn names(seats: &[&Person]) -> Vec<String> {
        seats.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn categories_follow_avoid_to_dog_order() {
        let people: Vec<Person> = [
            "only-have",
            "have-end-have",
            "have-end-like",
            "only-like",
            "both-end-like",
            "avoid-end-like",
            "only-avoid",
        ]
        .iter()
        .map(|n| Person::new(*n, *n))
        .collect();

        let mut buckets = Buckets::default();
        buckets.push(Category::OnlyHave, vec![&people[0]]);
        buckets.push(Category::HaveEndHave, vec![&people[1]]);
        buckets.push(Category::HaveEndLike, vec![&people[2]]);
        buckets.push(Category::OnlyLike, vec![&people[3]]);
        buckets.push(Category::BothEndLike, vec![&people[4]]);
        buckets.push(Category::AvoidEndLike, vec![&people[5]]);
        buckets.push(Category::OnlyAvoid, vec![&people[6]]);

        assert_eq!(
            names(&compose(buckets)),
            vec![
                "only-avoid",
                "avoid-end-like",
                "both-end-like",
                "only-like",
                "have-end-like",
                "have-end-have",
                "only-have",
            ]
        );
    }

    #[test]
    fn dog_ending_mixed_teams_are_separated_by_buffers() {
        let people: Vec<Person> = ["b1", "b2", "b3", "l1", "h1"]
            .iter()
            .map(|n| Person::new(*n, *n))
            .collect();

        let mut buckets = Buckets::default();
        buckets.push(Category::BothEndHave, vec![&people[0]]);
        buckets.push(Category::BothEndHave, vec![&people[1]]);
        buckets.push(Category::BothEndHave, vec![&people[2]]);
        buckets.push(Category::OnlyLike, vec![&people[3]]);
        buckets.push(Category::HaveEndLike, vec![&people[4]]);
        assert_eq!(buckets.len(Category::BothEndHave), 3);

        assert_eq!(
            names(&compose(buckets)),
            vec!["b1", "l1", "b2", "h1", "b3"]
        );
    }

    #[test]
    fn leftover_buffers_follow_the_last_dog_ending_team() {
        let people: Vec<Person> = ["b1", "l1", "l2", "h1"]
            .iter()
            .map(|n| Person::new(*n, *n))
            .collect();

        let mut buckets = Buckets::default();
        buckets.push(Category::BothEndHave, vec![&people[0]]);
        buckets.push(Category::OnlyLike, vec![&people[1]]);
        buckets.push(Category::OnlyLike, vec![&people[2]]);
        buckets.push(Category::HaveEndLike, vec![&people[3]]);

        assert_eq!(names(&compose(buckets)), vec!["b1", "l1", "l2", "h1"]);
    }

    #[test]
    fn team_blocks_stay_whole() {
        let people: Vec<Person> = ["a1", "a2", "h1", "h2"]
            .iter()
            .map(|n| Person::new(*n, *n))
            .collect();

        let mut buckets = Buckets::default();
        buckets.push(Category::OnlyHave, vec![&people[2], &people[3]]);
        buckets.push(Category::OnlyAvoid, vec![&people[0], &people[1]]);

        assert_eq!(names(&compose(buckets)), vec!["a1", "a2", "h1", "h2"]);
    }

    #[test]
    fn empty_buckets_compose_to_nothing() {
        assert!(compose(Buckets::default()).is_empty());
    }
}
