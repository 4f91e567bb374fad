use crate::Issue;

impl From<octocrab::models::issues::Issue> for Issue {
    fn from(issue: octocrab::models::issues::Issue) -> Self {
        Self {
            number: issue.number,
            updated_at: issue.updated_at,
            author: issue.user.login,
            labels: issue.labels.into_iter().map(|label| label.name).collect(),
            // The issues listing also returns pull requests, marked with this link
            is_pull_request: issue.pull_request.is_some(),
        }
    }
}

/// GitHub counts open pull requests into `open_issues_count` as well.
pub fn open_issue_count(repo: &octocrab::models::Repository) -> anyhow::Result<u64> {
    repo.open_issues_count
        .map(u64::from)
        .ok_or_else(|| anyhow::anyhow!("Repository {} has no open issue count", repo.name))
}
