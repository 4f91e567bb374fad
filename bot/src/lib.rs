use std::sync::Arc;

use chrono::Utc;
use shared::RepoInfo;
use tracing::instrument;

use crate::{
    api::IssueTracker,
    fetcher::fetch_open_issues_or_empty,
    triage::{Context, RunResult, TriageConfig, TriageEngine},
};

pub mod api;
pub mod config;
pub mod fetcher;
pub mod messages;
pub mod triage;

/// One full pass over the open issues of `repo`.
///
/// Issues are fetched once up front, so every decision is made against that snapshot.
#[instrument(skip(tracker, config), fields(repo = repo.full_id))]
pub async fn run(
    tracker: Arc<dyn IssueTracker>,
    repo: RepoInfo,
    config: Arc<TriageConfig>,
) -> RunResult {
    let issues = fetch_open_issues_or_empty(tracker.as_ref(), &repo).await;
    let engine = TriageEngine::new(Context {
        tracker,
        repo,
        config,
    });
    let result = engine.run(&issues, Utc::now()).await;
    result.log_summary();
    result
}
