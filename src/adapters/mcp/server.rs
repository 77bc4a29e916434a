//! McpServer - JSON-RPC dispatch and the newline-delimited stdio loop.
//!
//! Each line on the reader is one JSON-RPC message. `tools/call` requests run
//! on their own task; every response goes through a channel to a single
//! writer task, so replies can leave out of request order.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use super::protocol::{
    negotiate_protocol_version, CallToolParams, CallToolResult, Implementation,
    InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    JSONRPC_VERSION,
};
use crate::domain::tools::ToolCall;
use crate::ports::{ToolExecutionError, ToolExecutor};

pub const SERVER_NAME: &str = "recurrente";

/// Transport failures of the server loop.
#[derive(Debug, Error)]
pub enum McpError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Task failed: {0}")]
    Task(String),
}

/// A line that decoded into something the server must act on.
enum Incoming {
    Request(JsonRpcRequest),
    /// A response from the client; this server sends no requests of its own.
    Ignored,
}

#[derive(Clone)]
pub struct McpServer {
    executor: Arc<dyn ToolExecutor>,
    info: Implementation,
}

impl McpServer {
    pub fn new(executor: Arc<dyn ToolExecutor>) -> Self {
        Self {
            executor,
            info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Handles one raw message. `None` means nothing is written back.
    pub async fn handle_message(&self, line: &str) -> Option<JsonRpcResponse> {
        match decode(line) {
            Ok(Incoming::Request(request)) => self.handle_request(request).await,
            Ok(Incoming::Ignored) => None,
            Err(response) => Some(response),
        }
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id.clone() else {
            self.handle_notification(&request);
            return None;
        };

        let outcome = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.list_tools()),
            "tools/call" => self.call_tool(request.params).await,
            other => {
                tracing::warn!(method = %other, "Unknown method");
                Err(JsonRpcError::method_not_found(other))
            }
        };

        Some(JsonRpcResponse::from_result(id, outcome))
    }

    /// Serves until the reader reaches EOF, then waits for in-flight calls.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<(), McpError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
        let writer_task = tokio::spawn(write_responses(writer, rx));

        let mut lines = BufReader::new(reader).lines();
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if line.trim().is_empty() {
                        continue;
                    }

                    match decode(&line) {
                        Ok(Incoming::Request(request))
                            if request.method == "tools/call" && !request.is_notification() =>
                        {
                            let server = self.clone();
                            let tx = tx.clone();
                            in_flight.spawn(async move {
                                if let Some(response) = server.handle_request(request).await {
                                    let _ = tx.send(response);
                                }
                            });
                        }
                        Ok(Incoming::Request(request)) => {
                            if let Some(response) = self.handle_request(request).await {
                                if tx.send(response).is_err() {
                                    break;
                                }
                            }
                        }
                        Ok(Incoming::Ignored) => {}
                        Err(response) => {
                            if tx.send(response).is_err() {
                                break;
                            }
                        }
                    }
                }
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    log_join(joined);
                }
            }
        }

        tracing::debug!(pending = in_flight.len(), "Input closed, draining tool calls");
        while let Some(joined) = in_flight.join_next().await {
            log_join(joined);
        }
        drop(tx);

        writer_task
            .await
            .map_err(|e| McpError::Task(e.to_string()))?
    }

    fn handle_notification(&self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" => tracing::info!("Client initialized"),
            "notifications/cancelled" => tracing::debug!("Client cancelled a request"),
            other => tracing::debug!(method = %other, "Ignoring notification"),
        }
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = parse_params(params)?.unwrap_or_default();
        let protocol_version = negotiate_protocol_version(params.protocol_version.as_deref());

        if let Some(client) = &params.client_info {
            tracing::info!(
                client = %client.name,
                client_version = %client.version,
                protocol_version,
                "Initializing session"
            );
        }

        let result = InitializeResult {
            protocol_version: protocol_version.to_string(),
            capabilities: json!({ "tools": { "listChanged": false } }),
            server_info: self.info.clone(),
        };
        serde_json::to_value(result).map_err(|e| JsonRpcError::internal(e.to_string()))
    }

    fn list_tools(&self) -> Value {
        let tools: Vec<Value> = self
            .executor
            .available_tools()
            .iter()
            .map(|tool| tool.to_mcp_format())
            .collect();
        json!({ "tools": tools })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = parse_params(params)?
            .ok_or_else(|| JsonRpcError::invalid_params("Invalid params: missing tool name"))?;

        let call = ToolCall::new(params.name, params.arguments.unwrap_or(Value::Null));
        let result = match self.executor.execute(call).await {
            Ok(value) => CallToolResult::text(
                serde_json::to_string_pretty(&value)
                    .map_err(|e| JsonRpcError::internal(e.to_string()))?,
            ),
            Err(ToolExecutionError::Api(e)) => CallToolResult::error(e),
            Err(e) => return Err(JsonRpcError::invalid_params(e.to_string())),
        };

        serde_json::to_value(result).map_err(|e| JsonRpcError::internal(e.to_string()))
    }
}

fn decode(line: &str) -> Result<Incoming, JsonRpcResponse> {
    let value: Value = serde_json::from_str(line)
        .map_err(|_| JsonRpcResponse::failure(Value::Null, JsonRpcError::parse_error()))?;

    let Some(object) = value.as_object() else {
        return Err(JsonRpcResponse::failure(
            Value::Null,
            JsonRpcError::invalid_request("expected a JSON object"),
        ));
    };

    let id = object.get("id").cloned().unwrap_or(Value::Null);
    if !object.contains_key("method") {
        if object.contains_key("result") || object.contains_key("error") {
            return Ok(Incoming::Ignored);
        }
        return Err(JsonRpcResponse::failure(
            id,
            JsonRpcError::invalid_request("missing method"),
        ));
    }

    let request: JsonRpcRequest = serde_json::from_value(value).map_err(|e| {
        JsonRpcResponse::failure(id.clone(), JsonRpcError::invalid_request(e.to_string()))
    })?;

    if request.jsonrpc != JSONRPC_VERSION {
        return Err(JsonRpcResponse::failure(
            id,
            JsonRpcError::invalid_request("jsonrpc must be \"2.0\""),
        ));
    }

    Ok(Incoming::Request(request))
}

/// Absent or null params decode to `None`.
fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<Option<T>, JsonRpcError> {
    match params {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {}", e))),
    }
}

fn log_join(joined: Result<(), tokio::task::JoinError>) {
    if let Err(e) = joined {
        tracing::error!(error = %e, "Tool call task failed");
    }
}

async fn write_responses<W>(
    mut writer: W,
    mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>,
) -> Result<(), McpError>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut line = serde_json::to_vec(&response)?;
        line.push(b'\n');
        writer.write_all(&line).await?;
        writer.flush().await?;
    }
    writer.shutdown().await?;
    Ok(())
}
