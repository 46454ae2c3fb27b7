use std::path::Path;

use miette::IntoDiagnostic;
use serde::Serialize;

use crate::domain::{RepositoryContext, SessionId};
use crate::hook::template;
use crate::session::record::session_id_from_log;

/// What `quickhooks status` prints: the artifacts setup would touch and
/// whether they exist.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub work_dir: String,
    pub version_controlled: bool,
    pub hook_path: Option<String>,
    pub hook_present: bool,
    /// The hook carries the QuickHooks marker line.
    pub hook_managed: bool,
    pub log_path: String,
    pub log_present: bool,
    pub session_id: Option<String>,
}

impl StatusReport {
    /// Inspect `work_dir` without modifying anything.
    pub fn inspect(work_dir: &Path) -> Self {
        let ctx = RepositoryContext::probe(work_dir);
        let hook_path = ctx.hook_path();
        let hook_present = hook_path
            .as_deref()
            .is_some_and(|path| path.symlink_metadata().is_ok());
        let hook_managed = hook_path
            .as_deref()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .is_some_and(|content| template::is_managed(&content));

        let log_path = ctx.log_path();
        let session_id = std::fs::read_to_string(&log_path)
            .ok()
            .and_then(|content| session_id_from_log(&content));

        StatusReport {
            work_dir: work_dir.display().to_string(),
            version_controlled: ctx.version_controlled,
            hook_path: hook_path.map(|p| p.display().to_string()),
            hook_present,
            hook_managed,
            log_path: log_path.display().to_string(),
            log_present: log_path.is_file(),
            session_id: session_id.as_ref().map(SessionId::to_string),
        }
    }
}

/// Execute the status subcommand: print one JSON object to stdout.
pub fn run(dir: Option<&Path>) -> miette::Result<()> {
    let work_dir = super::work_dir(dir).into_diagnostic()?;
    let report = StatusReport::inspect(&work_dir);
    let json = serde_json::to_string(&report).into_diagnostic()?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn fresh_directory_reports_nothing_present() {
        let tmp = TempDir::new().unwrap();
        let report = StatusReport::inspect(tmp.path());

        assert!(!report.version_controlled);
        assert_eq!(report.hook_path, None);
        assert!(!report.hook_present);
        assert!(!report.log_present);
        assert_eq!(report.session_id, None);
        assert!(report.log_path.ends_with("results/setup.log"));
    }

    #[test]
    fn reports_artifacts_after_setup() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        crate::setup_in(tmp.path());

        let report = StatusReport::inspect(tmp.path());
        assert!(report.version_controlled);
        assert!(report.hook_present);
        assert!(report.hook_managed);
        assert!(report.log_present);
        assert_eq!(report.session_id.as_deref().map(str::len), Some(8));
    }

    #[test]
    fn foreign_hook_is_present_but_not_managed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(".git/hooks")).unwrap();
        fs::write(
            tmp.path().join(".git/hooks/pre-commit"),
            "#!/bin/sh\nmake lint\n",
        )
        .unwrap();

        let report = StatusReport::inspect(tmp.path());
        assert!(report.hook_present);
        assert!(!report.hook_managed);
    }

    #[test]
    fn report_serializes_camel_case() {
        let tmp = TempDir::new().unwrap();
        let value = serde_json::to_value(StatusReport::inspect(tmp.path())).unwrap();

        assert_eq!(value["versionControlled"], false);
        assert!(value["hookPath"].is_null());
        assert!(value.get("logPresent").is_some());
        assert!(value.get("sessionId").is_some());
    }
}
