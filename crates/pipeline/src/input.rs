//! Operator input from stdin

use async_trait::async_trait;
use aurora_ivr_core::{OperatorInput, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;

use crate::PipelineError;

/// Reads one line per prompt
///
/// Generic over the reader so tests can feed scripted input.
pub struct StdinInput<R = BufReader<tokio::io::Stdin>> {
    reader: Mutex<R>,
}

impl StdinInput {
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AsyncBufRead + Unpin + Send> StdinInput<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send + 'static> OperatorInput for StdinInput<R> {
    async fn read_line(&self, prompt: &str) -> Result<String> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(prompt.as_bytes())
            .await
            .map_err(|e| PipelineError::Input(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| PipelineError::Input(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .reader
            .lock()
            .await
            .read_line(&mut line)
            .await
            .map_err(|e| PipelineError::Input(e.to_string()))?;
        if read == 0 {
            return Err(PipelineError::Input("input closed".to_string()).into());
        }
        Ok(line.trim().to_string())
    }
}
