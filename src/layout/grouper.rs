use crate::domain::models::Person;
use std::collections::HashMap;
use std::fmt;

/// Key shown for people without a team.
pub const NO_TEAM_KEY: &str = "none";

/// Grouping key of a person. Every team-less person shares [`TeamKey::NoTeam`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TeamKey<'a> {
    Team(&'a str),
    NoTeam,
}

impl<'a> TeamKey<'a> {
    pub fn of(person: &'a Person) -> Self {
        match &person.team {
            Some(team) => TeamKey::Team(&team.id),
            None => TeamKey::NoTeam,
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            TeamKey::Team(id) => id,
            TeamKey::NoTeam => NO_TEAM_KEY,
        }
    }
}

impl fmt::Display for TeamKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct TeamGroup<'a> {
    pub key: TeamKey<'a>,
    pub members: Vec<&'a Person>,
}

/// Splits people into teams in order of first appearance, keeping each
/// team's members in input order.
pub fn group_by_team(people: &[Person]) -> Vec<TeamGroup<'_>> {
    let mut slots: HashMap<TeamKey<'_>, usize> = HashMap::new();
    let mut groups: Vec<TeamGroup<'_>> = Vec::new();
    for person in people {
        let key = TeamKey::of(person);
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(TeamGroup {
                key,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(person);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::{group_by_team, TeamKey};
    use crate::domain::models::{DogStatus, Person};

    fn names<'a>(members: &[&'a Person]) -> Vec<&'a str> {
        members.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn groups_keep_first_seen_order_and_member_order() {
        let people = vec![
            Person::new("1", "Ann").in_team("b", "Blue").with_status(DogStatus::Like),
            Person::new("2", "Ben").in_team("a", "Amber").with_status(DogStatus::Have),
            Person::new("3", "Cat").in_team("b", "Blue").with_status(DogStatus::Avoid),
            Person::new("4", "Dan").in_team("a", "Amber").with_status(DogStatus::Like),
        ];

        let groups = group_by_team(&people);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, TeamKey::Team("b"));
        assert_eq!(names(&groups[0].members), vec!["Ann", "Cat"]);
        assert_eq!(groups[1].key, TeamKey::Team("a"));
        assert_eq!(names(&groups[1].members), vec!["Ben", "Dan"]);
    }

    #[test]
    fn teamless_people_share_one_group() {
        let people = vec![
            Person::new("1", "Ann"),
            Person::new("2", "Ben").in_team("a", "Amber"),
            Person::new("3", "Cat"),
        ];

        let groups = group_by_team(&people);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, TeamKey::NoTeam);
        assert_eq!(groups[0].key.to_string(), "none");
        assert_eq!(names(&groups[0].members), vec!["Ann", "Cat"]);
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group_by_team(&[]).is_empty());
    }
}
