//! Conversation transcript sink

use async_trait::async_trait;

use crate::{Result, TranscriptEntry};

/// Append-only conversation log
///
/// One entry per spoken turn, actor-tagged. Implementations never
/// truncate or rotate.
#[async_trait]
pub trait TranscriptLog: Send + Sync + 'static {
    async fn append(&self, entry: &TranscriptEntry) -> Result<()>;
}
