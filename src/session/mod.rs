//! Session-stamped setup log.
//!
//! Every call writes a fresh [`SetupLogRecord`] to `setup.log`, replacing
//! whatever was there. Time and randomness come from injected [`Clock`] and
//! [`TokenSource`] implementations.

pub mod record;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::{RepositoryContext, SessionId};
use crate::error::{ensure_dir, SetupError};

pub use record::SetupLogRecord;

/// Source of the log timestamp.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Source of session tokens.
pub trait TokenSource {
    fn next_session_id(&mut self) -> SessionId;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Tokens drawn from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokens;

impl TokenSource for RandomTokens {
    fn next_session_id(&mut self) -> SessionId {
        SessionId::random(&mut rand::rng())
    }
}

/// Writes `setup.log` into `.git/hooks/logs` or the `results` fallback.
#[derive(Debug, Clone)]
pub struct SessionLogger<C = SystemClock, T = RandomTokens> {
    clock: C,
    tokens: T,
}

impl SessionLogger {
    /// Logger backed by the local clock and the thread RNG.
    pub fn system() -> Self {
        SessionLogger::new(SystemClock, RandomTokens)
    }
}

impl Default for SessionLogger {
    fn default() -> Self {
        SessionLogger::system()
    }
}

impl<C: Clock, T: TokenSource> SessionLogger<C, T> {
    pub fn new(clock: C, tokens: T) -> Self {
        SessionLogger { clock, tokens }
    }

    /// Build the record for one setup attempt.
    pub fn record(&mut self) -> SetupLogRecord {
        SetupLogRecord {
            created_at: self.clock.now(),
            session_id: self.tokens.next_session_id(),
            runtime_version: env!("CARGO_PKG_VERSION").to_string(),
            platform: std::env::consts::OS.to_string(),
        }
    }

    /// Write a new setup log for `work_dir` and return its path.
    pub fn write(&mut self, work_dir: &Path) -> Result<PathBuf, SetupError> {
        let ctx = RepositoryContext::probe(work_dir);
        ensure_dir(&ctx.log_dir())?;

        let record = self.record();
        let path = ctx.log_path();
        std::fs::write(&path, record.render()).map_err(|source| SetupError::WriteLog {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), session = %record.session_id, "wrote setup log");
        Ok(path)
    }
}
