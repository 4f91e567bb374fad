use shared::IssueUpdate;
use tracing::{error, instrument};

use super::*;

#[derive(Debug, Clone)]
pub struct IssueStale {}

impl IssueStale {
    #[instrument(skip(self, issue, age, context), fields(issue = issue.number))]
    pub async fn execute(&self, issue: &Issue, age: &Age, context: &Context) -> IssueOutcome {
        let message = render(&context.config.templates.stale, age.days_old(), &issue.author);
        if let Err(e) = context.comment(issue, &message).await {
            error!("Failed to comment on issue #{}: {e}", issue.number);
            return IssueOutcome::failed(FailureStage::Comment, e);
        }

        let labels = issue.labels_with(&context.config.stale_label);
        if let Err(e) = context.update(issue, IssueUpdate::Labels(labels)).await {
            error!("Failed to update issue #{}: {e}", issue.number);
            return IssueOutcome::failed(FailureStage::Label, e);
        }

        IssueOutcome::MarkedStale
    }
}
