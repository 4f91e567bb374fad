use futures::future::try_join_all;
use shared::{Issue, RepoInfo};
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use crate::api::IssueTracker;

/// GitHub refuses to return more than 100 entries per page.
pub const PAGE_SIZE: u8 = 100;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to get repository metadata: {0}")]
    Metadata(#[source] anyhow::Error),
    #[error("failed to list issues page {page}: {source}")]
    Page {
        page: u32,
        #[source]
        source: anyhow::Error,
    },
}

pub fn page_count(total: u64, per_page: u8) -> u32 {
    total.div_ceil(per_page.max(1) as u64) as u32
}

/// Lists every open issue of `repo`, pull requests excluded.
///
/// All pages are requested at once and joined. Any failing request fails the whole fetch.
#[instrument(skip(tracker), fields(repo = repo.full_id))]
pub async fn fetch_all_open_issues<T: IssueTracker + ?Sized>(
    tracker: &T,
    repo: &RepoInfo,
) -> Result<Vec<Issue>, FetchError> {
    let total = tracker
        .open_issue_count(repo)
        .await
        .map_err(FetchError::Metadata)?;
    let pages = page_count(total, PAGE_SIZE);
    debug!("Repository reports {total} open issues over {pages} pages");

    let requests = (1..=pages).map(|page| async move {
        tracker
            .list_open_issues(repo, page, PAGE_SIZE)
            .await
            .map_err(|source| FetchError::Page { page, source })
    });

    Ok(try_join_all(requests)
        .await?
        .into_iter()
        .flatten()
        .filter(|issue| !issue.is_pull_request)
        .collect())
}

/// Same as [`fetch_all_open_issues`], but a failed fetch is logged and reported as no issues.
pub async fn fetch_open_issues_or_empty<T: IssueTracker + ?Sized>(
    tracker: &T,
    repo: &RepoInfo,
) -> Vec<Issue> {
    match fetch_all_open_issues(tracker, repo).await {
        Ok(issues) => {
            info!("Found {} open issues in {repo}", issues.len());
            issues
        }
        Err(e) => {
            error!("Failed to fetch issues for {repo}: {e}");
            vec![]
        }
    }
}
