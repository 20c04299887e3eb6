//! Operator console input

use async_trait::async_trait;

use crate::Result;

/// Line-based input from the operator console
///
/// Used for the input-method choice and for WAV file paths.
#[async_trait]
pub trait OperatorInput: Send + Sync + 'static {
    /// Show `prompt` and return the next line, without its line ending
    ///
    /// Returns `Error::Input` when the input stream is closed.
    async fn read_line(&self, prompt: &str) -> Result<String>;
}
