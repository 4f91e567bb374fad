mod close;
mod stale;

use super::*;

pub use close::*;
pub use stale::*;

#[derive(Debug, Clone)]
pub enum Action {
    Stale(IssueStale),
    Close(IssueClose),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Stale(_) => write!(f, "Stale"),
            Action::Close(_) => write!(f, "Close"),
        }
    }
}

impl Action {
    pub fn stale() -> Self {
        Self::Stale(IssueStale {})
    }

    pub fn close() -> Self {
        Self::Close(IssueClose {})
    }

    /// Closing only applies when the close threshold lies past the stale one.
    pub fn for_age(age: &Age, config: &TriageConfig) -> Self {
        let closing_enabled = config.close_after_days > config.stale_after_days;
        if closing_enabled && age.exceeds_days(config.close_after_days) {
            Self::close()
        } else {
            Self::stale()
        }
    }

    pub async fn execute(&self, issue: &Issue, age: &Age, context: &Context) -> IssueOutcome {
        match self {
            Action::Stale(action) => action.execute(issue, age, context).await,
            Action::Close(action) => action.execute(issue, age, context).await,
        }
    }
}
