use serde::Deserialize;

/// The slice of the `pull_request` webhook payload this tool consumes.
#[derive(Debug, Deserialize)]
pub struct PullRequestEvent {
    pub action: String,
    pub number: u64,
    pub pull_request: PullRequest,
    pub repository: Repository,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub title: String,
    #[serde(default)]
    pub draft: bool,
    pub user: User,
    pub head: Ref,
}

#[derive(Debug, Deserialize)]
pub struct Ref {
    pub sha: String,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: User,
}
