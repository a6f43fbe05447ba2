//! anime-docs-mcp: MCP server for Anime.js documentation lookup
//!
//! This library serves Anime.js API references, code examples and
//! documentation topics to AI assistants over the Model Context Protocol.
//!
//! # Architecture
//!
//! Every request runs through one pipeline:
//!
//! - **Validation**: per-method schemas, all violations reported together,
//!   string arguments sanitised
//! - **Circuit breaker**: handler execution is guarded by the `external`
//!   breaker, which fails fast after repeated handler failures
//! - **Cache**: successful lookups are kept for a per-method TTL
//!
//! # Modules
//!
//! - [`breaker`]: Three-state circuit breaker
//! - [`cache`]: TTL cache with lazy expiry
//! - [`config`]: Configuration loading and validation
//! - [`error`]: Error types
//! - [`knowledge`]: Built-in components, examples and documentation
//! - [`mcp`]: MCP protocol, dispatcher and handlers
//! - [`validation`]: Parameter schemas and input sanitising

pub mod breaker;
pub mod cache;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod mcp;
pub mod validation;
