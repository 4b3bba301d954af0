// Serves the tool over an in-memory duplex to a client that answers sampling
// requests itself.

use architecture_mcp_server::{ArchitectureMcpServer, ArchitectureServerConfig, CONSULTATION_TOOL};
use rmcp::{
    model::{
        CallToolRequestParam, ClientCapabilities, ClientInfo, Content, CreateMessageRequestParam,
        CreateMessageResult, ErrorCode, Role, SamplingMessage,
    },
    service::RequestContext,
    ClientHandler, ErrorData as McpError, RoleClient, ServiceError, ServiceExt,
};
use serde_json::{json, Value};
use std::future::Future;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SamplingClient {
    prompts: Arc<Mutex<Vec<Value>>>,
}

impl ClientHandler for SamplingClient {
    fn create_message(
        &self,
        params: CreateMessageRequestParam,
        _context: RequestContext<RoleClient>,
    ) -> impl Future<Output = Result<CreateMessageResult, McpError>> + Send + '_ {
        async move {
            self.prompts
                .lock()
                .expect("lock")
                .push(serde_json::to_value(&params).expect("params"));
            Ok(CreateMessageResult {
                model: "m1".to_string(),
                stop_reason: Some("endTurn".to_string()),
                message: SamplingMessage {
                    role: Role::Assistant,
                    content: Content::text("Split the monolith along bounded contexts."),
                },
            })
        }
    }

    fn get_info(&self) -> ClientInfo {
        ClientInfo {
            capabilities: ClientCapabilities::builder().enable_sampling().build(),
            ..Default::default()
        }
    }
}

fn arguments(value: Value) -> Option<rmcp::model::JsonObject> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

#[tokio::test]
async fn call_tool_round_trips_through_client_sampling() {
    let (server_io, client_io) = tokio::io::duplex(64 * 1024);

    let server = ArchitectureMcpServer::new(ArchitectureServerConfig::default()).expect("server");
    tokio::spawn(async move {
        if let Ok(service) = server.serve(server_io).await {
            let _ = service.waiting().await;
        }
    });

    let handler = SamplingClient::default();
    let prompts = handler.prompts.clone();
    let client = handler.serve(client_io).await.expect("client");

    let tools = client.list_all_tools().await.expect("list tools");
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, CONSULTATION_TOOL);

    let result = client
        .call_tool(CallToolRequestParam {
            name: CONSULTATION_TOOL.into(),
            arguments: arguments(json!({"question": "Break up a <legacy> monolith?"})),
        })
        .await
        .expect("call tool");
    let result = serde_json::to_value(&result).expect("result json");

    assert_ne!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().expect("text block");
    assert!(text.contains("Split the monolith along bounded contexts."));
    assert!(text.contains("- **Expert Model:** m1"));
    assert!(text.contains("- **Analysis Depth:** endTurn"));
    assert!(text.contains("**Question:** Break up a legacy monolith?"));

    {
        let prompts = prompts.lock().expect("lock");
        assert_eq!(prompts.len(), 1);
        let params = &prompts[0];
        assert_eq!(params["maxTokens"], 4000);
        assert_eq!(params["includeContext"], "thisServer");
        assert_eq!(params["messages"][0]["role"], "user");
        assert!(params["messages"][0]["content"]["text"]
            .as_str()
            .expect("prompt text")
            .contains("**Question:** Break up a legacy monolith?"));
    }

    let err = client
        .call_tool(CallToolRequestParam {
            name: "nope".into(),
            arguments: arguments(json!({"question": "q"})),
        })
        .await
        .expect_err("unknown tool");
    match err {
        ServiceError::McpError(data) => {
            assert_eq!(data.code, ErrorCode::INVALID_PARAMS);
            assert!(data.message.contains("Unknown tool: nope"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let _ = client.cancel().await;
}
