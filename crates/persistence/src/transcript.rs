//! Transcript log sinks
//!
//! The file layout is one entry per spoken line:
//!
//! ```text
//! Aurora Airlines: Hello! Welcome to ...
//! --------------------------------------------------
//! User: I'd like to book a flight to Sydney
//! * * * * * * * * * * * * * * * * * * * * * * * * *
//! ```

use async_trait::async_trait;
use aurora_ivr_core::{Result, TranscriptEntry, TranscriptLog, TurnRole};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

use crate::PersistenceError;

const SYSTEM_RULE_WIDTH: usize = 50;
const USER_RULE_PAIRS: usize = 25;

/// Appends to a text file, opening and closing it for every entry
///
/// No handle is held between writes, so the file can be rotated or
/// tailed externally while a session runs. The parent directory is
/// created on first use.
#[derive(Debug, Clone)]
pub struct FileTranscriptLog {
    path: PathBuf,
    agent_name: String,
}

impl FileTranscriptLog {
    pub fn new(path: impl Into<PathBuf>, agent_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            agent_name: agent_name.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render one entry with its separator line
    pub fn render(&self, entry: &TranscriptEntry) -> String {
        match entry.role {
            TurnRole::System => format!(
                "{}: {}\n{}\n",
                self.agent_name,
                entry.text,
                "-".repeat(SYSTEM_RULE_WIDTH)
            ),
            TurnRole::User => format!(
                "User: {}\n{}\n",
                entry.text,
                "* ".repeat(USER_RULE_PAIRS)
            ),
        }
    }

    async fn write_entry(&self, entry: &TranscriptEntry) -> std::result::Result<(), PersistenceError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| PersistenceError::CreateDir {
                    path: dir.display().to_string(),
                    source,
                })?;
        }

        let write_err = |source| PersistenceError::Write {
            path: self.path.display().to_string(),
            source,
        };

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(write_err)?;
        file.write_all(self.render(entry).as_bytes())
            .await
            .map_err(write_err)?;
        file.flush().await.map_err(write_err)?;
        Ok(())
    }
}

#[async_trait]
impl TranscriptLog for FileTranscriptLog {
    async fn append(&self, entry: &TranscriptEntry) -> Result<()> {
        self.write_entry(entry).await?;
        tracing::trace!(path = %self.path.display(), role = ?entry.role, "Transcript entry appended");
        Ok(())
    }
}

/// Keeps entries in memory
#[derive(Debug, Default)]
pub struct MemoryTranscriptLog {
    entries: Mutex<Vec<TranscriptEntry>>,
}

impl MemoryTranscriptLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.entries.lock().clone()
    }

    /// Texts spoken by `role`, in order
    pub fn texts(&self, role: TurnRole) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.role == role)
            .map(|e| e.text.clone())
            .collect()
    }
}

#[async_trait]
impl TranscriptLog for MemoryTranscriptLog {
    async fn append(&self, entry: &TranscriptEntry) -> Result<()> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }
}

/// Accepts and discards every entry
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledTranscriptLog;

#[async_trait]
impl TranscriptLog for DisabledTranscriptLog {
    async fn append(&self, _entry: &TranscriptEntry) -> Result<()> {
        Ok(())
    }
}
