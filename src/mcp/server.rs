//! MCP server lifecycle and method routing.
//!
//! 1. **Initialisation**: `initialize` request, then the
//!    `notifications/initialized` notification
//! 2. **Operation**: tools, resources and prompts are routed to the
//!    [`Dispatcher`]
//! 3. **Shutdown**: EOF on stdin, SIGINT or SIGTERM (Ctrl+C on Windows)

use std::io;
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info, warn};

use crate::error::DispatchError;
use crate::mcp::catalog;
use crate::mcp::dispatch::Dispatcher;
use crate::mcp::protocol::{
    parse_message, ErrorCode, IncomingMessage, JsonRpcError, JsonRpcErrorData,
    JsonRpcNotification, JsonRpcRequest, JsonRpcResponse, RequestId, MCP_PROTOCOL_VERSION,
};
use crate::mcp::transport::{StdioTransport, Transport};
use crate::mcp::types::{InitializeParams, ServerCapabilities, ServerInfo, ToolCallParams};

/// Server state in the MCP lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for initialize request.
    AwaitingInit,
    /// Initialize received, waiting for initialized notification.
    Initialising,
    /// Ready for normal operation.
    Running,
    /// Shutdown in progress.
    ShuttingDown,
}

/// The MCP server.
pub struct McpServer<R, W> {
    state: ServerState,
    transport: Transport<R, W>,
    dispatcher: Arc<Dispatcher>,
    protocol_version: Option<String>,
}

impl McpServer<tokio::io::BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    /// Creates a server on stdio.
    #[must_use]
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self::with_transport(dispatcher, StdioTransport::stdio())
    }
}

impl<R, W> McpServer<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a server on an arbitrary transport.
    #[must_use]
    pub const fn with_transport(dispatcher: Arc<Dispatcher>, transport: Transport<R, W>) -> Self {
        Self {
            state: ServerState::AwaitingInit,
            transport,
            dispatcher,
            protocol_version: None,
        }
    }

    /// Returns the current server state.
    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.state
    }

    /// Returns the protocol version agreed during initialisation.
    #[must_use]
    pub fn protocol_version(&self) -> Option<&str> {
        self.protocol_version.as_deref()
    }

    /// Consumes the server and returns its transport.
    pub fn into_transport(self) -> Transport<R, W> {
        self.transport
    }

    /// Serves requests until EOF or a shutdown signal.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails or signal handlers cannot be
    /// installed.
    pub async fn run(&mut self) -> io::Result<()> {
        let result = tokio::select! {
            result = self.serve() => result,
            signal = shutdown_signal() => {
                let name = signal?;
                info!(signal = name, "Received shutdown signal, stopping");
                Ok(())
            }
        };
        self.state = ServerState::ShuttingDown;
        result
    }

    /// Serves requests until the input reaches EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn serve(&mut self) -> io::Result<()> {
        loop {
            let line = match self.transport.read_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!(error = %e, "Rejected line that is not UTF-8");
                    self.transport.write_message(&JsonRpcError::parse_error()).await?;
                    continue;
                }
                Err(e) => return Err(e),
            };
            if line.trim().is_empty() {
                continue;
            }
            self.handle_line(&line).await?;
        }

        debug!("Input closed, shutting down");
        self.state = ServerState::ShuttingDown;
        Ok(())
    }

    async fn handle_line(&mut self, line: &str) -> io::Result<()> {
        match parse_message(line) {
            Ok(IncomingMessage::Request(req)) => self.handle_request(req).await,
            Ok(IncomingMessage::Notification(notif)) => {
                self.handle_notification(&notif);
                Ok(())
            }
            Err(error) => {
                warn!(code = error.error.code, "Rejected malformed message");
                self.transport.write_message(&error).await
            }
        }
    }

    async fn handle_request(&mut self, req: JsonRpcRequest) -> io::Result<()> {
        let outcome = match req.method.as_str() {
            "initialize" => self.handle_initialize(&req),
            "ping" => Ok(json!({})),
            method => match self.require_running(&req.id) {
                Ok(()) => self.route(method, &req).await,
                Err(error) => Err(error),
            },
        };

        match outcome {
            Ok(result) => {
                self.transport
                    .write_message(&JsonRpcResponse::success(req.id, result))
                    .await
            }
            Err(error) => self.transport.write_message(&error).await,
        }
    }

    fn handle_notification(&mut self, notif: &JsonRpcNotification) {
        match notif.method.as_str() {
            "notifications/initialized" if self.state == ServerState::Initialising => {
                info!("Client initialised, server running");
                self.state = ServerState::Running;
            }
            method => debug!(method, "Ignoring notification"),
        }
    }

    fn handle_initialize(&mut self, req: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
        if self.state != ServerState::AwaitingInit {
            return Err(JsonRpcError::invalid_state(
                req.id.clone(),
                "Server already initialised",
            ));
        }

        let params: InitializeParams = req
            .params
            .clone()
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| {
                JsonRpcError::invalid_params(
                    req.id.clone(),
                    format!("Invalid initialize params: {e}"),
                )
            })?
            .ok_or_else(|| {
                JsonRpcError::invalid_params(req.id.clone(), "Missing initialize params")
            })?;

        info!(
            client = params.client_info.as_ref().map_or("unknown", |c| c.name.as_str()),
            requested_version = %params.protocol_version,
            "Initialising session"
        );

        self.protocol_version = Some(MCP_PROTOCOL_VERSION.to_string());
        self.state = ServerState::Initialising;

        Ok(json!({
            "protocolVersion": MCP_PROTOCOL_VERSION,
            "capabilities": ServerCapabilities::default(),
            "serverInfo": ServerInfo::default(),
        }))
    }

    fn require_running(&self, id: &RequestId) -> Result<(), JsonRpcError> {
        if self.state == ServerState::Running {
            Ok(())
        } else {
            Err(JsonRpcError::invalid_state(id.clone(), "Server not initialised"))
        }
    }

    /// Maps an MCP method onto a dispatcher method.
    async fn route(&self, method: &str, req: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
        let params = req.params.as_ref();
        let result = match method {
            "tools/list" => self.dispatcher.dispatch("list_tools", None).await,
            "tools/call" => return self.call_tool(req).await,
            "resources/list" => self.dispatcher.dispatch("list_resources", None).await,
            "resources/templates/list" => {
                self.dispatcher.dispatch("list_resource_templates", None).await
            }
            "resources/read" => self.dispatcher.dispatch("read_resource", params).await,
            "prompts/list" => self.dispatcher.dispatch("list_prompts", None).await,
            "prompts/get" => self.dispatcher.dispatch("get_prompt", params).await,
            _ => return Err(JsonRpcError::method_not_found(req.id.clone(), method)),
        };

        result.map_err(|e| dispatch_error(req.id.clone(), &e))
    }

    async fn call_tool(&self, req: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
        let params: ToolCallParams = req
            .params
            .clone()
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| {
                JsonRpcError::invalid_params(
                    req.id.clone(),
                    format!("Invalid tool call params: {e}"),
                )
            })?
            .ok_or_else(|| {
                JsonRpcError::invalid_params(req.id.clone(), "Missing tool call params")
            })?;

        if !catalog::is_tool(&params.name) {
            return Err(JsonRpcError::new(
                Some(req.id.clone()),
                JsonRpcErrorData::with_message(
                    ErrorCode::MethodNotFound,
                    format!("Unknown tool: {}", params.name),
                ),
            ));
        }

        self.dispatcher
            .dispatch(&params.name, params.arguments.as_ref())
            .await
            .map_err(|e| dispatch_error(req.id.clone(), &e))
    }
}

/// Converts a pipeline error into a JSON-RPC error response.
#[must_use]
pub fn dispatch_error(id: RequestId, error: &DispatchError) -> JsonRpcError {
    let data = match error {
        DispatchError::Validation(v) => {
            let violations: Vec<_> = v
                .violations
                .iter()
                .map(|violation| json!({ "path": violation.path, "message": violation.message }))
                .collect();
            JsonRpcErrorData::with_message(ErrorCode::InvalidParams, error.to_string())
                .with_data(json!({ "violations": violations }))
        }
        DispatchError::UnknownMethod { .. } => {
            JsonRpcErrorData::with_message(ErrorCode::MethodNotFound, error.to_string())
        }
        DispatchError::BreakerOpen { name } => {
            JsonRpcErrorData::with_message(ErrorCode::ServiceUnavailable, error.to_string())
                .with_data(json!({ "breaker": name }))
        }
        DispatchError::Handler { .. } => {
            JsonRpcErrorData::with_message(ErrorCode::InternalError, error.to_string())
        }
    };
    JsonRpcError::new(Some(id), data)
}

#[cfg(unix)]
async fn shutdown_signal() -> io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = sigint.recv() => Ok("SIGINT"),
        _ = sigterm.recv() => Ok("SIGTERM"),
    }
}

#[cfg(windows)]
async fn shutdown_signal() -> io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl+C")
}
