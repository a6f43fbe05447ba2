//! Model Context Protocol (MCP) server implementation.
//!
//! The server speaks JSON-RPC 2.0 over stdio and exposes the Anime.js
//! knowledge base as tools, resources and prompts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                             MCP Server                              │
//! │                                                                     │
//! │  ┌───────────┐   ┌───────────┐   ┌────────────────────────────────┐ │
//! │  │ Transport │──▶│  Server   │──▶│          Dispatcher            │ │
//! │  │  (stdio)  │   │(lifecycle)│   │ validate ─▶ breaker ─▶ handler │ │
//! │  └───────────┘   └───────────┘   │                 cache ◀─┘      │ │
//! │                                  └────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Protocol Version
//!
//! This implementation targets MCP protocol version 2024-11-05.

pub mod catalog;
pub mod dispatch;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod transport;
pub mod types;

pub use dispatch::{Dispatcher, Request};
pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, MCP_PROTOCOL_VERSION};
pub use server::McpServer;
pub use transport::{StdioTransport, Transport};
