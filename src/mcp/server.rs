//! MCP server implementation

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::handlers::ProtocolHandlers;
use crate::mcp::protocol::*;
use crate::mcp::transport::StdioTransport;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, BufReader};
use tracing::{debug, error, info};

pub struct McpServer<W = tokio::io::Stdout> {
    transport: StdioTransport<W>,
    handlers: Arc<ProtocolHandlers>,
}

impl McpServer<tokio::io::Stdout> {
    pub fn new(services: Arc<Services>) -> Self {
        Self::with_transport(services, StdioTransport::new())
    }

    /// Serve stdin until EOF or Ctrl+C
    pub async fn run(&mut self) -> Result<(), McpError> {
        info!("Starting uxlex MCP server");

        let reader = BufReader::new(tokio::io::stdin());
        let shutdown = async {
            tokio::signal::ctrl_c().await.ok();
            info!("Received shutdown signal");
        };

        tokio::select! {
            result = self.serve(reader) => result?,
            _ = shutdown => {}
        }

        info!("MCP server shutting down");
        Ok(())
    }
}

impl<W: AsyncWrite + Unpin> McpServer<W> {
    pub fn with_transport(services: Arc<Services>, transport: StdioTransport<W>) -> Self {
        Self {
            transport,
            handlers: Arc::new(ProtocolHandlers::new(services)),
        }
    }

    pub fn handlers(&self) -> &ProtocolHandlers {
        &self.handlers
    }

    /// Process newline-delimited requests from `reader` until EOF
    pub async fn serve<R: AsyncBufRead + Unpin>(&mut self, reader: R) -> Result<(), McpError> {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            self.process_and_respond(&line).await?;
        }
        Ok(())
    }

    pub fn into_transport(self) -> StdioTransport<W> {
        self.transport
    }

    async fn process_and_respond(&mut self, line: &str) -> Result<(), McpError> {
        debug!("Received: {}", line);

        match self.process_message(line).await {
            Ok(response) => {
                self.transport.send_response(response).await?;
            }
            Err(e) => {
                error!("Error processing message: {}", e);
                let (code, message) = e.code_and_message();
                let error_response = JsonRpcResponse::failure(None, code, message);
                self.transport.send_response(error_response).await?;
            }
        }

        Ok(())
    }

    async fn process_message(&self, line: &str) -> Result<JsonRpcResponse, McpError> {
        let request: JsonRpcRequest =
            serde_json::from_str(line).map_err(|e| McpError::ParseError(e.to_string()))?;

        match request.method.as_str() {
            "initialize" => self.handlers.handle_initialize(request).await,
            "initialized" | "notifications/initialized" => {
                self.handlers.handle_initialized(request).await
            }
            "tools/list" => self.handlers.handle_tools_list(request).await,
            "tools/call" => self.handlers.handle_tools_call(request).await,
            "ping" => self.handlers.handle_ping(request).await,
            // Unknown notifications are ignored
            _ if request.id.is_none() => Ok(JsonRpcResponse::none()),
            _ => Ok(JsonRpcResponse::failure(
                request.id,
                METHOD_NOT_FOUND,
                format!("Unknown method: {}", request.method),
            )),
        }
    }
}
