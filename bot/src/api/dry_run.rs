use async_trait::async_trait;
use shared::{Issue, IssueUpdate, RepoInfo};
use tracing::info;

use super::IssueTracker;

/// Reads from the wrapped tracker and swallows every write.
pub struct DryRunTracker<T> {
    inner: T,
}

impl<T> DryRunTracker<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: IssueTracker> IssueTracker for DryRunTracker<T> {
    async fn open_issue_count(&self, repo: &RepoInfo) -> anyhow::Result<u64> {
        self.inner.open_issue_count(repo).await
    }

    async fn list_open_issues(
        &self,
        repo: &RepoInfo,
        page: u32,
        per_page: u8,
    ) -> anyhow::Result<Vec<Issue>> {
        self.inner.list_open_issues(repo, page, per_page).await
    }

    async fn create_comment(
        &self,
        repo: &RepoInfo,
        number: u64,
        body: &str,
    ) -> anyhow::Result<()> {
        info!("[dry-run] Would comment on {repo}#{number}: {body}");
        Ok(())
    }

    async fn update_issue(
        &self,
        repo: &RepoInfo,
        number: u64,
        update: IssueUpdate,
    ) -> anyhow::Result<()> {
        info!("[dry-run] Would apply {update} to {repo}#{number}: {update:?}");
        Ok(())
    }
}
