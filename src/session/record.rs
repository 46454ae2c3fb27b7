use chrono::NaiveDateTime;

use crate::domain::SessionId;

/// Timestamp layout used in the setup log, second resolution.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SESSION_PREFIX: &str = "Session ID: ";

/// One installation attempt, as written to `setup.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupLogRecord {
    pub created_at: NaiveDateTime,
    pub session_id: SessionId,
    pub runtime_version: String,
    pub platform: String,
}

impl SetupLogRecord {
    pub fn render(&self) -> String {
        format!(
            "QuickHooks Setup Log\n\
             =====================================\n\
             \n\
             Installation Date: {date}\n\
             {SESSION_PREFIX}{session}\n\
             Runtime Version: {version}\n\
             Platform: {platform}\n\
             \n\
             Git Hooks Status:\n\
             - Pre-commit hook: Installed\n\
             - Code quality checks: Enabled\n\
             - Auto-formatting: Ready\n\
             \n\
             This log file tracks QuickHooks installation and configuration.\n\
             It helps debugging if hooks don't work as expected.\n\
             \n\
             Status: Ready\n",
            date = self.created_at.format(TIMESTAMP_FORMAT),
            session = self.session_id,
            version = self.runtime_version,
            platform = self.platform,
        )
    }
}

/// Extract the session token from rendered log text.
///
/// Returns `None` if no `Session ID:` line holds a valid token.
pub fn session_id_from_log(content: &str) -> Option<SessionId> {
    content
        .lines()
        .find_map(|line| line.strip_prefix(SESSION_PREFIX))
        .and_then(|raw| SessionId::parse(raw.trim()).ok())
}
