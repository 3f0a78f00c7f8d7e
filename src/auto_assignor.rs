use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::config::Config;
use crate::error::Error;
use crate::models::PullRequestEvent;
use crate::selection;

/// Response body of the repository contents API. Only the file content is
/// of interest; a directory listing or missing file carries none.
#[derive(Debug, Deserialize)]
struct ContentFile {
    content: Option<String>,
}

pub struct AutoAssignor {
    client: octocrab::Octocrab,
}

impl AutoAssignor {
    pub fn new(token: Option<impl Into<String>>) -> Result<Self, octocrab::Error> {
        let mut client = octocrab::OctocrabBuilder::new();
        if let Some(token) = token {
            client = client.personal_token(token.into());
        }

        Ok(Self {
            client: client.build()?,
        })
    }

    /// Fetch and parse the YAML configuration file at `path` inside the
    /// repository, at revision `git_ref`.
    pub async fn fetch_configuration(
        &self,
        owner: impl AsRef<str>,
        repo: impl AsRef<str>,
        path: impl AsRef<str>,
        git_ref: impl AsRef<str>,
    ) -> Result<Config, Error> {
        let file: ContentFile = self
            .client
            .get(
                format!(
                    "/repos/{}/{}/contents/{}",
                    owner.as_ref(),
                    repo.as_ref(),
                    path.as_ref()
                ),
                Some(&[("ref", git_ref.as_ref())]),
            )
            .await?;

        let content = file.content.ok_or(Error::ConfigurationNotFound)?;
        // the contents API hard-wraps its base64 output
        let raw = base64::engine::general_purpose::STANDARD.decode(content.replace('\n', ""))?;
        let config = serde_yaml::from_slice(&raw)?;

        Ok(config)
    }

    /// Request reviews from `reviewers` on the pull request. Empty input is
    /// a no-op since the API rejects an empty reviewer list.
    pub async fn add_reviewers(
        &self,
        owner: impl AsRef<str>,
        repo: impl AsRef<str>,
        number: u64,
        reviewers: &[String],
    ) -> Result<(), Error> {
        if reviewers.is_empty() {
            return Ok(());
        }

        let _: serde_json::Value = self
            .client
            .post(
                format!(
                    "/repos/{}/{}/pulls/{}/requested_reviewers",
                    owner.as_ref(),
                    repo.as_ref(),
                    number
                ),
                Some(&json!({ "reviewers": reviewers })),
            )
            .await?;
        info!(reviewers = ?reviewers, "requested reviewers");

        Ok(())
    }

    /// Add `assignees` to the pull request. Empty input is a no-op.
    pub async fn add_assignees(
        &self,
        owner: impl AsRef<str>,
        repo: impl AsRef<str>,
        number: u64,
        assignees: &[String],
    ) -> Result<(), Error> {
        if assignees.is_empty() {
            return Ok(());
        }

        let _: serde_json::Value = self
            .client
            .post(
                format!(
                    "/repos/{}/{}/issues/{}/assignees",
                    owner.as_ref(),
                    repo.as_ref(),
                    number
                ),
                Some(&json!({ "assignees": assignees })),
            )
            .await?;
        info!(assignees = ?assignees, "added assignees");

        Ok(())
    }

    /// Handle one `pull_request` event end to end: fetch the configuration
    /// from the pull request's head revision, apply the skip rules, then
    /// request reviewers and add assignees as configured.
    pub async fn handle_pull_request(
        &self,
        event: &PullRequestEvent,
        config_path: &str,
    ) -> Result<(), Error> {
        let pull_request = &event.pull_request;
        let author = &pull_request.user.login;
        let repo_owner = &event.repository.owner.login;
        let repo = &event.repository.name;

        let config = self
            .fetch_configuration(repo_owner, repo, config_path, &pull_request.head.sha)
            .await?;

        if pull_request.draft && !config.run_on_draft {
            info!(number = event.number, "skipping draft pull request");
            return Ok(());
        }

        if selection::includes_skip_keywords(&pull_request.title, &config.skip_keywords) {
            info!(
                number = event.number,
                title = %pull_request.title,
                "skipping pull request, title matches a skip keyword"
            );
            return Ok(());
        }

        if config.add_reviewers {
            let reviewers = selection::choose_reviewers(author, &config);
            self.add_reviewers(repo_owner, repo, event.number, &reviewers)
                .await?;
        }

        if config.add_assignees.is_enabled() {
            let assignees = selection::choose_assignees(author, &config)?;
            self.add_assignees(repo_owner, repo, event.number, &assignees)
                .await?;
        }

        Ok(())
    }
}
