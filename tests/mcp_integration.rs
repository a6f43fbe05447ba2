//! Integration tests for MCP protocol handling.
//!
//! These tests drive a live server over an in-memory duplex pipe, the same
//! way a client drives it over stdio.

use std::sync::Arc;

use anime_docs_mcp::config::Config;
use anime_docs_mcp::knowledge::KnowledgeBase;
use anime_docs_mcp::mcp::protocol::{parse_message, IncomingMessage, RequestId};
use anime_docs_mcp::mcp::server::ServerState;
use anime_docs_mcp::mcp::{Dispatcher, McpServer, Transport};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

// =============================================================================
// Protocol Parsing Tests
// =============================================================================

#[test]
fn test_parse_initialize_request() {
    let json = r#"{
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {
                "name": "test-client",
                "version": "1.0.0"
            }
        }
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Request(req) = result.unwrap() {
        assert_eq!(req.method, "initialize");
        assert_eq!(req.id, RequestId::Number(1));
    } else {
        panic!("Expected Request");
    }
}

#[test]
fn test_parse_tools_call_request() {
    let json = r#"{
        "jsonrpc": "2.0",
        "id": "call-1",
        "method": "tools/call",
        "params": {
            "name": "search_anime_examples",
            "arguments": { "query": "stagger" }
        }
    }"#;

    let IncomingMessage::Request(req) = parse_message(json).unwrap() else {
        panic!("Expected Request");
    };
    assert_eq!(req.id, RequestId::String("call-1".to_string()));
    assert_eq!(req.params.unwrap()["arguments"]["query"], "stagger");
}

#[test]
fn test_parse_notification() {
    let json = r#"{
        "jsonrpc": "2.0",
        "method": "notifications/initialized"
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Notification(notif) = result.unwrap() {
        assert_eq!(notif.method, "notifications/initialized");
    } else {
        panic!("Expected Notification");
    }
}

#[test]
fn test_parse_invalid_json() {
    assert!(parse_message("not valid json").is_err());
}

#[test]
fn test_parse_missing_jsonrpc_version() {
    let json = r#"{
        "id": 1,
        "method": "test"
    }"#;

    assert!(parse_message(json).is_err());
}

// =============================================================================
// Live Session Tests
// =============================================================================

/// Runs a full session: sends each request, collects one reply per request.
async fn session(requests: Vec<Value>) -> Vec<Value> {
    let (client, server_end) = tokio::io::duplex(64 * 1024);
    let (server_read, server_write) = tokio::io::split(server_end);
    let (client_read, mut client_write) = tokio::io::split(client);

    let dispatcher = Arc::new(Dispatcher::new(KnowledgeBase::builtin(), &Config::default()));
    let mut server = McpServer::with_transport(
        dispatcher,
        Transport::new(BufReader::new(server_read), server_write),
    );

    let client = async move {
        let mut lines = BufReader::new(client_read).lines();
        let mut replies = Vec::new();

        for request in requests {
            let expects_reply = request.get("id").is_some();
            let mut line = serde_json::to_string(&request).unwrap();
            line.push('\n');
            client_write.write_all(line.as_bytes()).await.unwrap();

            if expects_reply {
                let reply = lines.next_line().await.unwrap().unwrap();
                replies.push(serde_json::from_str(&reply).unwrap());
            }
        }

        client_write.shutdown().await.unwrap();
        replies
    };

    let (served, replies) = tokio::join!(server.serve(), client);
    served.unwrap();
    assert_eq!(server.state(), ServerState::ShuttingDown);
    replies
}

fn handshake() -> Vec<Value> {
    vec![
        json!({
            "jsonrpc": "2.0",
            "id": 0,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": { "name": "integration", "version": "0.0.1" }
            }
        }),
        json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
    ]
}

fn call(id: i64, name: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    })
}

#[tokio::test]
async fn test_tools_list_advertises_five_tools() {
    let mut requests = handshake();
    requests.push(json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }));

    let replies = session(requests).await;
    let tools = replies[1]["result"]["tools"].as_array().unwrap();
    let names: Vec<_> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        [
            "get_anime_component",
            "list_anime_components",
            "get_anime_example",
            "search_anime_examples",
            "get_anime_docs"
        ]
    );
    assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
}

#[tokio::test]
async fn test_component_lookup_over_the_wire() {
    let mut requests = handshake();
    requests.push(call(1, "get_anime_component", json!({ "componentName": "anime" })));
    requests.push(call(2, "get_anime_component", json!({ "componentName": "TIMELINE" })));
    requests.push(call(3, "get_anime_component", json!({ "componentName": "timeline" })));

    let replies = session(requests).await;
    let text = replies[1]["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("anime()"));
    assert_eq!(replies[2]["result"], replies[3]["result"]);
}

#[tokio::test]
async fn test_errors_over_the_wire() {
    let mut requests = handshake();
    requests.push(call(1, "get_anime_docs", json!({})));
    requests.push(call(2, "get_anime_docs", json!({ "topic": 42 })));
    requests.push(call(3, "render_animation", json!({})));
    requests.push(json!({ "jsonrpc": "2.0", "id": 4, "method": "completion/complete" }));

    let replies = session(requests).await;

    assert_eq!(replies[1]["id"], 1);
    assert_eq!(replies[1]["error"]["code"], -32602);
    assert!(replies[1]["error"]["message"]
        .as_str()
        .unwrap()
        .contains("topic: Required"));

    assert_eq!(
        replies[2]["error"]["data"]["violations"][0]["message"],
        "Expected string, received number"
    );
    assert_eq!(replies[3]["error"]["code"], -32601);
    assert_eq!(replies[4]["error"]["code"], -32601);
}

#[tokio::test]
async fn test_resource_read_over_the_wire() {
    let mut requests = handshake();
    requests.push(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "resources/read",
        "params": { "uri": "anime://docs/getting-started" }
    }));

    let replies = session(requests).await;
    let contents = &replies[1]["result"]["contents"][0];
    assert_eq!(contents["uri"], "anime://docs/getting-started");
    assert_eq!(contents["mimeType"], "text/markdown");
    assert!(contents["text"]
        .as_str()
        .unwrap()
        .contains("Getting Started with Anime.js"));
}
