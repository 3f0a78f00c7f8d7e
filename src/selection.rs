//! Pure selection logic: picks reviewers and assignees from configured
//! candidate lists or named groups.

use indexmap::IndexMap;
use rand::seq::IndexedRandom;

use crate::config::{AddAssignees, Config};
use crate::error::Error;

/// Remove every candidate equal to `filter_user`, then pick `desired_number`
/// of the remainder uniformly at random without replacement.
///
/// A `desired_number` of zero means "everyone": the filtered list comes back
/// whole, in its original order. When fewer candidates remain than asked
/// for, all of them are returned.
pub fn choose_users(candidates: &[String], desired_number: u32, filter_user: &str) -> Vec<String> {
    let filtered: Vec<String> = candidates
        .iter()
        .filter(|candidate| candidate.as_str() != filter_user)
        .cloned()
        .collect();

    // all-assign
    if desired_number == 0 {
        return filtered;
    }

    let mut rng = rand::rng();
    filtered
        .choose_multiple(&mut rng, desired_number as usize)
        .cloned()
        .collect()
}

/// The first group, in insertion order, whose member list contains `owner`.
pub fn found_owner_group<'a>(
    owner: &str,
    groups: &'a IndexMap<String, Vec<String>>,
) -> Option<&'a str> {
    groups
        .iter()
        .find(|(_, members)| members.iter().any(|member| member == owner))
        .map(|(name, _)| name.as_str())
}

/// Sample users out of named groups.
///
/// With `owner_group` set and the owner present in some group, only that
/// group is consulted. Its filtered sample is authoritative even when it is
/// empty, e.g. when the owner is the group's only member. Otherwise every
/// group is sampled independently with the same `desired_number` and the
/// results are concatenated in group order, without cross-group
/// deduplication.
pub fn choose_users_from_groups(
    owner: &str,
    groups: &IndexMap<String, Vec<String>>,
    desired_number: u32,
    owner_group: bool,
) -> Vec<String> {
    if owner_group {
        if let Some(name) = found_owner_group(owner, groups) {
            return choose_users(&groups[name], desired_number, owner);
        }
    }

    groups
        .values()
        .flat_map(|members| choose_users(members, desired_number, owner))
        .collect()
}

/// Reviewers for a pull request opened by `owner`.
pub fn choose_reviewers(owner: &str, config: &Config) -> Vec<String> {
    if config.use_review_groups && !config.review_groups.is_empty() {
        choose_users_from_groups(
            owner,
            &config.review_groups,
            config.number_of_reviewers,
            config.use_found_review_group,
        )
    } else {
        choose_users(&config.reviewers, config.number_of_reviewers, owner)
    }
}

/// Assignees for a pull request opened by `owner`.
///
/// `addAssignees: author` short-circuits to the author alone. Any other
/// string value is a configuration error. The assignee count falls back to
/// `numberOfReviewers` when `numberOfAssignees` is unset, and the candidate
/// list falls back to `reviewers` when `assignees` is empty.
pub fn choose_assignees(owner: &str, config: &Config) -> Result<Vec<String>, Error> {
    if let AddAssignees::Keyword(keyword) = &config.add_assignees {
        if keyword != "author" {
            return Err(Error::InvalidAddAssignees);
        }
        return Ok(vec![owner.to_string()]);
    }

    let desired_number = config
        .number_of_assignees
        .unwrap_or(config.number_of_reviewers);

    if config.use_assignee_groups && !config.assignee_groups.is_empty() {
        return Ok(choose_users_from_groups(
            owner,
            &config.assignee_groups,
            desired_number,
            config.use_found_assignee_group,
        ));
    }

    let candidates = if config.assignees.is_empty() {
        &config.reviewers
    } else {
        &config.assignees
    };

    Ok(choose_users(candidates, desired_number, owner))
}

/// True when any of `skip_keywords` occurs in `title`, case-insensitively.
pub fn includes_skip_keywords(title: &str, skip_keywords: &[String]) -> bool {
    let title = title.to_lowercase();

    skip_keywords
        .iter()
        .any(|keyword| title.contains(&keyword.to_lowercase()))
}
