use std::{path::PathBuf, sync::Arc};

use serde::Deserialize;
use shared::RepoInfo;

use crate::{
    messages::{MessageFile, MessageTemplates},
    triage::TriageConfig,
};

fn default_stale_after() -> u64 {
    30
}

fn default_stale_label() -> String {
    "STALE".to_string()
}

fn default_show_logs() -> bool {
    true
}

#[derive(Deserialize)]
struct Env {
    github_token: String,
    github_repository: String,
    #[serde(default = "default_stale_after")]
    stale_after: u64,
    #[serde(default)]
    close_after: u64,
    stale_comment: Option<String>,
    close_comment: Option<String>,
    #[serde(default = "default_stale_label")]
    stale_label: String,
    #[serde(default = "default_show_logs")]
    show_logs: bool,
    message_file: Option<PathBuf>,
    // Only its presence matters
    local_test: Option<String>,
}

pub struct Config {
    pub github_token: String,
    pub repo: RepoInfo,
    pub triage: Arc<TriageConfig>,
    pub show_logs: bool,
    pub dry_run: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> anyhow::Result<Self> {
        let env: Env = envy::from_iter(vars)?;
        let repo = env
            .github_repository
            .parse::<RepoInfo>()
            .map_err(|e| anyhow::anyhow!(e))?;
        let message_file = env
            .message_file
            .as_deref()
            .map(MessageFile::load_from_file)
            .transpose()?;

        Ok(Self {
            github_token: env.github_token,
            repo,
            triage: Arc::new(TriageConfig {
                stale_after_days: env.stale_after,
                close_after_days: env.close_after,
                templates: MessageTemplates::resolve(
                    message_file,
                    env.stale_comment,
                    env.close_comment,
                ),
                stale_label: env.stale_label,
            }),
            show_logs: env.show_logs,
            dry_run: env.local_test.is_some(),
        })
    }

    /// Directive used when `RUST_LOG` is not set.
    pub fn default_log_directive(&self) -> &'static str {
        if self.show_logs {
            "info"
        } else {
            "warn"
        }
    }
}
