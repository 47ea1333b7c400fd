//! The persisted session: project metadata plus the README draft.
//!
//! A session lives in `<session_dir>/session.json` and carries everything
//! `generate`, `preview` and `export` need between invocations.

use crate::error::{ReadmeError, Result};
use crate::fs::atomic_write_file;
use crate::project::ProjectMetadata;
use crate::readme::ReadmeDraft;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current on-disk format version.
pub const SESSION_VERSION: u32 = 1;

/// File name of the session inside the session directory.
pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub version: u32,
    pub metadata: ProjectMetadata,
    pub draft: ReadmeDraft,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(metadata: ProjectMetadata, skeleton: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: SESSION_VERSION,
            metadata,
            draft: ReadmeDraft::new(skeleton),
            created_at: now,
            updated_at: now,
        }
    }

    /// Load a session file.
    ///
    /// # Errors
    ///
    /// * `UserError` if there is no session yet or its version is unknown
    /// * `IoError` if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ReadmeError::UserError(format!(
                "no README session found at {}.\n\n\
                 Run `readmequick new` to start one.",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ReadmeError::IoError(format!("failed to read session {}: {}", path.display(), e))
        })?;

        let session: Session = serde_json::from_str(&content).map_err(|e| {
            ReadmeError::IoError(format!("failed to parse session {}: {}", path.display(), e))
        })?;

        if session.version != SESSION_VERSION {
            return Err(ReadmeError::UserError(format!(
                "session {} has unsupported version {} (expected {}).\n\n\
                 Run `readmequick new --force` to start over.",
                path.display(),
                session.version,
                SESSION_VERSION
            )));
        }

        tracing::debug!(path = %path.display(), "loaded session");
        Ok(session)
    }

    /// Write the session atomically, creating its directory if needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ReadmeError::IoError(format!("failed to serialize session: {}", e)))?;

        atomic_write_file(path, &json)?;
        tracing::debug!(path = %path.display(), "saved session");
        Ok(())
    }

    /// Mark the session as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
