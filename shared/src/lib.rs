use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

#[cfg(feature = "github")]
pub mod github;

pub type GithubHandle = String;

/// Repository coordinates in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    pub owner: String,
    pub repo: String,
    pub full_id: String,
}

impl RepoInfo {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        let owner = owner.into();
        let repo = repo.into();
        let full_id = format!("{}/{}", owner, repo);
        Self {
            owner,
            repo,
            full_id,
        }
    }
}

impl FromStr for RepoInfo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Self::new(owner, repo))
            }
            _ => Err(format!("expected repository as `owner/name`, got `{s}`")),
        }
    }
}

impl fmt::Display for RepoInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_id)
    }
}

/// Snapshot of an open issue as returned by the tracker listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub number: u64,
    pub updated_at: DateTime<Utc>,
    pub author: GithubHandle,
    pub labels: Vec<String>,
    pub is_pull_request: bool,
}

impl Issue {
    /// Current labels followed by `label`. Duplicates are kept as-is.
    pub fn labels_with(&self, label: &str) -> Vec<String> {
        let mut labels = self.labels.clone();
        labels.push(label.to_string());
        labels
    }
}

#[derive(Debug, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum IssueUpdate {
    Close,
    Labels(Vec<String>),
}
