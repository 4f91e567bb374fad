use std::{fs, path::Path};

use serde::Deserialize;

pub const DAYS_OLD_TOKEN: &str = "%DAYS_OLD%";
pub const AUTHOR_TOKEN: &str = "%AUTHOR%";

pub const DEFAULT_STALE_COMMENT: &str = "This issue has had no activity for %DAYS_OLD% days and has been marked as stale. @%AUTHOR%, please leave a comment if it is still relevant, otherwise it may be closed.";
pub const DEFAULT_CLOSE_COMMENT: &str = "This issue has had no activity for %DAYS_OLD% days and is being closed. @%AUTHOR%, feel free to reopen it if it is still relevant.";

/// Substitutes the first occurrence of each token. Later occurrences are left untouched.
pub fn render(template: &str, days_old: i64, author: &str) -> String {
    template
        .replacen(DAYS_OLD_TOKEN, &days_old.to_string(), 1)
        .replacen(AUTHOR_TOKEN, author, 1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplates {
    pub stale: String,
    pub close: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            stale: DEFAULT_STALE_COMMENT.to_string(),
            close: DEFAULT_CLOSE_COMMENT.to_string(),
        }
    }
}

/// Optional overrides read from a TOML message file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageFile {
    pub stale_comment: Option<String>,
    pub close_comment: Option<String>,
}

impl MessageFile {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let file = fs::read_to_string(path)?;
        Ok(toml::from_str(&file)?)
    }
}

impl MessageTemplates {
    /// Built-in templates, overridden by the message file, overridden by explicit values.
    pub fn resolve(
        file: Option<MessageFile>,
        stale_comment: Option<String>,
        close_comment: Option<String>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            stale: stale_comment
                .or(file.stale_comment)
                .unwrap_or(defaults.stale),
            close: close_comment
                .or(file.close_comment)
                .unwrap_or(defaults.close),
        }
    }
}
