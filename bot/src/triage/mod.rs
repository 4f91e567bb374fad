use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use shared::{Issue, IssueUpdate, RepoInfo};
use tracing::{debug, info, instrument, warn};

use crate::{
    api::IssueTracker,
    messages::{render, MessageTemplates},
};

use self::actions::Action;

pub mod actions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageConfig {
    pub stale_after_days: u64,
    /// 0 disables closing, as does any value not above `stale_after_days`.
    pub close_after_days: u64,
    pub templates: MessageTemplates,
    pub stale_label: String,
}

#[derive(Clone)]
pub struct Context {
    pub tracker: Arc<dyn IssueTracker>,
    pub repo: RepoInfo,
    pub config: Arc<TriageConfig>,
}

impl Context {
    pub async fn comment(&self, issue: &Issue, text: &str) -> anyhow::Result<()> {
        self.tracker
            .create_comment(&self.repo, issue.number, text)
            .await
    }

    pub async fn update(&self, issue: &Issue, update: IssueUpdate) -> anyhow::Result<()> {
        self.tracker
            .update_issue(&self.repo, issue.number, update)
            .await
    }
}

/// Time since the last update of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    elapsed: TimeDelta,
}

impl Age {
    pub fn new(issue: &Issue, now: DateTime<Utc>) -> Self {
        Self {
            elapsed: now - issue.updated_at,
        }
    }

    /// Strict comparison, an issue exactly `days` old does not exceed it.
    pub fn exceeds_days(&self, days: u64) -> bool {
        i64::try_from(days)
            .ok()
            .and_then(TimeDelta::try_days)
            .is_some_and(|threshold| self.elapsed > threshold)
    }

    /// Rounded to the nearest whole day. Used for display only, so it may disagree with
    /// [`Age::exceeds_days`] near a threshold.
    pub fn days_old(&self) -> i64 {
        let day = TimeDelta::days(1).num_milliseconds() as f64;
        (self.elapsed.abs().num_milliseconds() as f64 / day).round() as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    Comment,
    Label,
    Close,
}

impl std::fmt::Display for FailureStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureStage::Comment => write!(f, "comment"),
            FailureStage::Label => write!(f, "update"),
            FailureStage::Close => write!(f, "close"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueOutcome {
    MarkedStale,
    Closed,
    Failed { stage: FailureStage, reason: String },
}

impl IssueOutcome {
    pub fn failed(stage: FailureStage, error: anyhow::Error) -> Self {
        Self::Failed {
            stage,
            reason: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    pub outcomes: Vec<(u64, IssueOutcome)>,
}

impl RunResult {
    pub fn marked_stale(&self) -> usize {
        self.count(|outcome| matches!(outcome, IssueOutcome::MarkedStale))
    }

    pub fn closed(&self) -> usize {
        self.count(|outcome| matches!(outcome, IssueOutcome::Closed))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, IssueOutcome::Failed { .. }))
    }

    fn count(&self, predicate: impl Fn(&IssueOutcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| predicate(outcome))
            .count()
    }

    pub fn log_summary(&self) {
        let (marked_stale, closed) = (self.marked_stale(), self.closed());
        if marked_stale == 0 && closed == 0 {
            info!("No issues needed action");
            return;
        }
        info!("Marked {marked_stale} issues as stale");
        info!("Closed {closed} issues");
    }
}

pub struct TriageEngine {
    context: Context,
}

impl TriageEngine {
    pub fn new(context: Context) -> Self {
        Self { context }
    }

    /// Comments on and transitions every issue idle for longer than the stale threshold.
    ///
    /// Issues are handled one after another, and a failure only affects its own issue.
    #[instrument(skip(self, issues), fields(repo = self.context.repo.full_id))]
    pub async fn run(&self, issues: &[Issue], now: DateTime<Utc>) -> RunResult {
        let config = &self.context.config;
        let mut result = RunResult::default();

        for issue in issues {
            let age = Age::new(issue, now);
            if !age.exceeds_days(config.stale_after_days) {
                continue;
            }

            let action = Action::for_age(&age, config);
            debug!(
                "Issue #{} is {} days old. Executing {action}",
                issue.number,
                age.days_old()
            );

            let outcome = action.execute(issue, &age, &self.context).await;
            if let IssueOutcome::Failed { stage, reason } = &outcome {
                warn!(
                    "Skipping issue #{} after failed {stage}: {reason}",
                    issue.number
                );
            }
            result.outcomes.push((issue.number, outcome));
        }

        result
    }
}
