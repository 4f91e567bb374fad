use shared::IssueUpdate;
use tracing::{error, instrument};

use super::*;

#[derive(Debug, Clone)]
pub struct IssueClose {}

impl IssueClose {
    #[instrument(skip(self, issue, age, context), fields(issue = issue.number))]
    pub async fn execute(&self, issue: &Issue, age: &Age, context: &Context) -> IssueOutcome {
        let message = render(&context.config.templates.close, age.days_old(), &issue.author);
        if let Err(e) = context.comment(issue, &message).await {
            error!("Failed to comment on issue #{}: {e}", issue.number);
            return IssueOutcome::failed(FailureStage::Comment, e);
        }

        if let Err(e) = context.update(issue, IssueUpdate::Close).await {
            error!("Failed to close issue #{}: {e}", issue.number);
            return IssueOutcome::failed(FailureStage::Close, e);
        }

        IssueOutcome::Closed
    }
}
