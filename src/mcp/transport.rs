//! Newline-delimited JSON-RPC transport
//!
//! Each response is written as one JSON object followed by `\n`.
//! Production uses stdout; tests can hand in any async writer.

use crate::mcp::error::McpError;
use crate::mcp::protocol::JsonRpcResponse;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::debug;

pub struct StdioTransport<W = tokio::io::Stdout> {
    writer: BufWriter<W>,
}

impl StdioTransport<tokio::io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin> StdioTransport<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Write one response line and flush it
    pub async fn send_response(&mut self, response: JsonRpcResponse) -> Result<(), McpError> {
        // Notifications get no response
        if response.id.is_none() && response.result.is_none() && response.error.is_none() {
            return Ok(());
        }

        let json = serde_json::to_string(&response)?;
        debug!("Sending: {}", json);

        self.writer.write_all(json.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl Default for StdioTransport<tokio::io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}
