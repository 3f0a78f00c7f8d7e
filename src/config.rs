use indexmap::IndexMap;
use serde::Deserialize;

/// Configuration file for the assignment logic, kept in the target
/// repository (`.github/auto_assign.yml` by default).
/// # Example
/// addReviewers: true
/// addAssignees: author
/// numberOfReviewers: 2
/// reviewers:
///   - alice
///   - bob
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub add_reviewers: bool,
    pub add_assignees: AddAssignees,
    pub reviewers: Vec<String>,
    pub assignees: Vec<String>,
    pub number_of_reviewers: u32,
    pub number_of_assignees: Option<u32>,
    pub use_review_groups: bool,
    pub use_assignee_groups: bool,
    pub use_found_review_group: bool,
    pub use_found_assignee_group: bool,
    pub review_groups: IndexMap<String, Vec<String>>,
    pub assignee_groups: IndexMap<String, Vec<String>>,
    pub skip_keywords: Vec<String>,
    pub run_on_draft: bool,
}

/// `addAssignees` accepts a boolean or the literal string `author`.
/// The string is validated at selection time rather than at parse time,
/// so a skipped pull request never trips on a bad value.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AddAssignees {
    Flag(bool),
    Keyword(String),
}

impl AddAssignees {
    pub fn is_enabled(&self) -> bool {
        match self {
            AddAssignees::Flag(flag) => *flag,
            AddAssignees::Keyword(_) => true,
        }
    }
}

impl Default for AddAssignees {
    fn default() -> Self {
        AddAssignees::Flag(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document() {
        let raw = "
addReviewers: true
addAssignees: author
reviewers:
  - alice
  - bob
numberOfReviewers: 2
useReviewGroups: true
reviewGroups:
  teamA:
    - alice
    - bob
  teamB:
    - carol
skipKeywords:
  - wip
";
        let config: Config = serde_yaml::from_str(raw).unwrap();

        assert!(config.add_reviewers);
        assert_eq!(
            config.add_assignees,
            AddAssignees::Keyword("author".to_string())
        );
        assert_eq!(config.reviewers, vec!["alice", "bob"]);
        assert_eq!(config.number_of_reviewers, 2);
        assert_eq!(config.number_of_assignees, None);
        assert!(config.use_review_groups);
        assert_eq!(config.skip_keywords, vec!["wip"]);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: Config = serde_yaml::from_str("addReviewers: true").unwrap();

        assert!(!config.add_assignees.is_enabled());
        assert!(config.reviewers.is_empty());
        assert_eq!(config.number_of_reviewers, 0);
        assert!(config.review_groups.is_empty());
        assert!(!config.run_on_draft);
    }

    #[test]
    fn add_assignees_boolean_form() {
        let config: Config = serde_yaml::from_str("addAssignees: true").unwrap();
        assert_eq!(config.add_assignees, AddAssignees::Flag(true));
        assert!(config.add_assignees.is_enabled());
    }

    #[test]
    fn group_insertion_order_is_preserved() {
        let raw = "
reviewGroups:
  zeta:
    - zed
  alpha:
    - ann
  mid:
    - mia
";
        let config: Config = serde_yaml::from_str(raw).unwrap();
        let names: Vec<&str> = config.review_groups.keys().map(String::as_str).collect();

        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }
}
