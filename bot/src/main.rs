use std::sync::Arc;

use stale_issues_bot::{
    api::{DryRunTracker, GithubClient, IssueTracker},
    config::Config,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_directive()));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());
    tracing::subscriber::set_global_default(subscriber)?;

    let github = GithubClient::new(config.github_token.clone())?;
    let tracker: Arc<dyn IssueTracker> = if config.dry_run {
        warn!("Local test mode. Comments and issue updates will not be sent");
        Arc::new(DryRunTracker::new(github))
    } else {
        Arc::new(github)
    };

    info!("Checking {} for stale issues", config.repo);
    stale_issues_bot::run(tracker, config.repo, config.triage).await;

    Ok(())
}
