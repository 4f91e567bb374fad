use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use shared::{Issue, IssueUpdate, RepoInfo};
use tokio::sync::Barrier;

use super::IssueTracker;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    OpenIssueCount,
    ListOpenIssues { page: u32, per_page: u8 },
    CreateComment { number: u64, body: String },
    UpdateIssue { number: u64, update: IssueUpdate },
}

/// In-memory tracker serving `issues` in pages and recording every call.
#[derive(Default)]
pub struct MockTracker {
    issues: Vec<Issue>,
    fail_count: bool,
    fail_page: Option<u32>,
    fail_comments: HashSet<u64>,
    fail_updates: HashSet<u64>,
    page_barrier: Option<Arc<Barrier>>,
    calls: Mutex<Vec<Call>>,
}

impl MockTracker {
    pub fn with_issues(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            ..Default::default()
        }
    }

    pub fn failing_count(mut self) -> Self {
        self.fail_count = true;
        self
    }

    pub fn failing_page(mut self, page: u32) -> Self {
        self.fail_page = Some(page);
        self
    }

    /// Page requests only complete once `pages` of them are in flight.
    pub fn page_barrier(mut self, pages: usize) -> Self {
        self.page_barrier = Some(Arc::new(Barrier::new(pages)));
        self
    }

    pub fn failing_comment(mut self, number: u64) -> Self {
        self.fail_comments.insert(number);
        self
    }

    pub fn failing_update(mut self, number: u64) -> Self {
        self.fail_updates.insert(number);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| {
                matches!(
                    call,
                    Call::CreateComment { .. } | Call::UpdateIssue { .. }
                )
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl IssueTracker for MockTracker {
    async fn open_issue_count(&self, _repo: &RepoInfo) -> anyhow::Result<u64> {
        self.record(Call::OpenIssueCount);
        if self.fail_count {
            anyhow::bail!("metadata unavailable");
        }
        Ok(self.issues.len() as u64)
    }

    async fn list_open_issues(
        &self,
        _repo: &RepoInfo,
        page: u32,
        per_page: u8,
    ) -> anyhow::Result<Vec<Issue>> {
        self.record(Call::ListOpenIssues { page, per_page });
        if let Some(barrier) = &self.page_barrier {
            barrier.wait().await;
        }
        if self.fail_page == Some(page) {
            anyhow::bail!("page {page} unavailable");
        }
        let per_page = per_page as usize;
        let start = (page.saturating_sub(1) as usize) * per_page;
        Ok(self
            .issues
            .iter()
            .skip(start)
            .take(per_page)
            .cloned()
            .collect())
    }

    async fn create_comment(
        &self,
        _repo: &RepoInfo,
        number: u64,
        body: &str,
    ) -> anyhow::Result<()> {
        self.record(Call::CreateComment {
            number,
            body: body.to_string(),
        });
        if self.fail_comments.contains(&number) {
            anyhow::bail!("comment rejected");
        }
        Ok(())
    }

    async fn update_issue(
        &self,
        _repo: &RepoInfo,
        number: u64,
        update: IssueUpdate,
    ) -> anyhow::Result<()> {
        self.record(Call::UpdateIssue { number, update });
        if self.fail_updates.contains(&number) {
            anyhow::bail!("update rejected");
        }
        Ok(())
    }
}
