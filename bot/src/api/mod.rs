use async_trait::async_trait;
use octocrab::{
    models::IssueState,
    params::{self, issues::Sort, Direction},
};
use shared::{github::open_issue_count, Issue, IssueUpdate, RepoInfo};
use tracing::instrument;

mod dry_run;
#[cfg(test)]
pub(crate) mod mock;

pub use dry_run::DryRunTracker;

/// Operations the bot needs from an issue tracker.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Number of open issues, pull requests included.
    async fn open_issue_count(&self, repo: &RepoInfo) -> anyhow::Result<u64>;

    /// One page of open issues ordered by last update, newest first. Pages start at 1.
    async fn list_open_issues(
        &self,
        repo: &RepoInfo,
        page: u32,
        per_page: u8,
    ) -> anyhow::Result<Vec<Issue>>;

    async fn create_comment(&self, repo: &RepoInfo, number: u64, body: &str)
        -> anyhow::Result<()>;

    async fn update_issue(
        &self,
        repo: &RepoInfo,
        number: u64,
        update: IssueUpdate,
    ) -> anyhow::Result<()>;
}

#[async_trait]
impl<T: IssueTracker + ?Sized> IssueTracker for std::sync::Arc<T> {
    async fn open_issue_count(&self, repo: &RepoInfo) -> anyhow::Result<u64> {
        (**self).open_issue_count(repo).await
    }

    async fn list_open_issues(
        &self,
        repo: &RepoInfo,
        page: u32,
        per_page: u8,
    ) -> anyhow::Result<Vec<Issue>> {
        (**self).list_open_issues(repo, page, per_page).await
    }

    async fn create_comment(
        &self,
        repo: &RepoInfo,
        number: u64,
        body: &str,
    ) -> anyhow::Result<()> {
        (**self).create_comment(repo, number, body).await
    }

    async fn update_issue(
        &self,
        repo: &RepoInfo,
        number: u64,
        update: IssueUpdate,
    ) -> anyhow::Result<()> {
        (**self).update_issue(repo, number, update).await
    }
}

#[derive(Clone)]
pub struct GithubClient {
    octocrab: octocrab::Octocrab,
}

impl GithubClient {
    pub fn new(github_token: String) -> anyhow::Result<Self> {
        let octocrab = octocrab::Octocrab::builder()
            .personal_token(github_token)
            .build()?;

        Ok(Self { octocrab })
    }
}

#[async_trait]
impl IssueTracker for GithubClient {
    #[instrument(skip(self), fields(repo = repo.full_id))]
    async fn open_issue_count(&self, repo: &RepoInfo) -> anyhow::Result<u64> {
        let repository = self.octocrab.repos(&repo.owner, &repo.repo).get().await?;
        open_issue_count(&repository)
    }

    #[instrument(skip(self), fields(repo = repo.full_id))]
    async fn list_open_issues(
        &self,
        repo: &RepoInfo,
        page: u32,
        per_page: u8,
    ) -> anyhow::Result<Vec<Issue>> {
        let page = self
            .octocrab
            .issues(&repo.owner, &repo.repo)
            .list()
            .state(params::State::Open)
            .sort(Sort::Updated)
            .direction(Direction::Descending)
            .per_page(per_page)
            .page(page)
            .send()
            .await?;

        Ok(page.items.into_iter().map(Issue::from).collect())
    }

    #[instrument(skip(self, body), fields(repo = repo.full_id))]
    async fn create_comment(
        &self,
        repo: &RepoInfo,
        number: u64,
        body: &str,
    ) -> anyhow::Result<()> {
        self.octocrab
            .issues(&repo.owner, &repo.repo)
            .create_comment(number, body)
            .await?;
        Ok(())
    }

    #[instrument(skip(self), fields(repo = repo.full_id))]
    async fn update_issue(
        &self,
        repo: &RepoInfo,
        number: u64,
        update: IssueUpdate,
    ) -> anyhow::Result<()> {
        let issues = self.octocrab.issues(&repo.owner, &repo.repo);
        match update {
            IssueUpdate::Close => {
                issues
                    .update(number)
                    .state(IssueState::Closed)
                    .send()
                    .await?;
            }
            IssueUpdate::Labels(labels) => {
                issues.update(number).labels(&labels).send().await?;
            }
        }
        Ok(())
    }
}
