use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, Implementation, JsonObject, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler,
};
use std::future::Future;
use std::sync::Arc;
use tracing::warn;

pub mod config;
pub mod envelope;
pub mod error;
pub mod prompt;
pub mod relay;
pub mod request;
pub mod sampling;


pub use config::*;
pub use error::*;
pub use relay::*;
pub use request::*;
pub use sampling::*;

pub const SERVER_NAME: &str = "architecture-mcp-server";

pub const CONSULTATION_TOOL: &str = "architecture_consultation";

const CONSULTATION_DESCRIPTION: &str = "Provides expert software architecture guidance and design solutions from a Senior Software Architect's perspective. \
    Analyzes technical challenges, recommends design patterns, system architectures, and best practices for scalable, maintainable software solutions.";

/// MCP server exposing the architecture consultation tool
#[derive(Clone)]
pub struct ArchitectureMcpServer {
    /// Relay shared by every tool invocation
    relay: Arc<ConsultationRelay>,
}

impl ArchitectureMcpServer {
    /// Create a new server from a validated configuration
    pub fn new(config: ArchitectureServerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            relay: Arc::new(ConsultationRelay::new(config)),
        })
    }

    pub fn relay(&self) -> &ConsultationRelay {
        &self.relay
    }

    /// Tools advertised to the host
    pub fn tool_definitions() -> Vec<Tool> {
        vec![Tool::new(
            CONSULTATION_TOOL,
            CONSULTATION_DESCRIPTION,
            Arc::new(consultation_input_schema()),
        )]
    }

    /// Route a tool call by name. Unknown names are the only hard failure.
    pub async fn dispatch<H>(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        host: &H,
    ) -> Result<ConsultationResult>
    where
        H: SamplingHost + ?Sized,
    {
        match name {
            CONSULTATION_TOOL => Ok(self.relay.consult_arguments(host, arguments).await),
            other => {
                warn!("Rejected call to unknown tool '{}'", other);
                Err(ConsultationError::unknown_tool(other))
            }
        }
    }
}

/// JSON schema of [`ConsultationRequest`] as a tool input schema
pub fn consultation_input_schema() -> JsonObject {
    let schema = schemars::schema_for!(ConsultationRequest);
    let mut object = schema.as_object().cloned().unwrap_or_default();
    // generator metadata, not part of the tool contract
    for key in ["$schema", "title", "description"] {
        object.remove(key);
    }
    object
}

impl ServerHandler for ArchitectureMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Software architecture consultation server. Call `architecture_consultation` with a question \
                (and optionally context, domain and complexity); guidance is generated through the client's sampling capability."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListToolsResult {
                tools: Self::tool_definitions(),
                next_cursor: None,
            })
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            let sampler = PeerSampler::new(context.peer.clone());
            let result = self
                .dispatch(&request.name, request.arguments, &sampler)
                .await?;
            Ok(result.into_call_tool_result())
        }
    }
}
