use thiserror::Error;

/// Errors surfaced while fetching configuration or assigning users.
#[derive(Debug, Error)]
pub enum Error {
    #[error("the configuration file is not found")]
    ConfigurationNotFound,
    #[error("expected 'addAssignees' to be either a boolean or 'author'")]
    InvalidAddAssignees,
    #[error(transparent)]
    Github(#[from] octocrab::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
