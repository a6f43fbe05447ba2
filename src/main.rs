//! anime-docs-mcp: MCP server for Anime.js documentation lookup
//!
//! Serves API references, examples and documentation topics to AI
//! assistants over stdio.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use anime_docs_mcp::config;
use anime_docs_mcp::knowledge::KnowledgeBase;
use anime_docs_mcp::mcp::{Dispatcher, McpServer};

/// MCP server for Anime.js documentation, examples and component metadata.
#[derive(Parser, Debug)]
#[command(name = "anime-docs-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Access token for the external resource class (overrides the config file)
    #[arg(long, env = "ANIME_MCP_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

fn parse_level(level: &str) -> Option<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Resolves the log level: `--quiet`, then `-v`, then `LOG_LEVEL`, then the
/// config file, then `warn`.
fn get_log_level(verbose: u8, quiet: bool, env_level: Option<&str>, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => env_level
            .and_then(parse_level)
            .or_else(|| parse_level(config_level))
            .unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber. Logs go to stderr; stdout carries
/// protocol messages only.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the anime-docs-mcp server.
fn main() -> ExitCode {
    let args = Args::parse();

    let config_path = args.config.as_deref();
    let mut cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_level = get_log_level(
        args.verbose,
        args.quiet,
        args.log_level.as_deref(),
        &cfg.logging.level,
    );
    init_tracing(log_level);

    // Display GPL license notice (required by GPLv3 Section 5d)
    eprintln!(
        "anime-docs-mcp {}  Copyright (C) 2026  The Embedded Society",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!("This program comes with ABSOLUTELY NO WARRANTY.");
    eprintln!("This is free software, licensed under GPL-3.0-or-later.");
    eprintln!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
    eprintln!();

    if args.access_token.is_some() {
        cfg.access_token = args.access_token;
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        access_token = cfg.access_token.is_some(),
        failure_threshold = cfg.breaker.failure_threshold,
        reset_timeout_secs = cfg.breaker.reset_timeout_secs,
        "Starting anime-docs-mcp server"
    );

    let dispatcher = Arc::new(Dispatcher::new(KnowledgeBase::builtin(), &cfg));
    let mut server = McpServer::new(dispatcher);

    info!("MCP server ready, waiting for client connection...");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(server.run()) {
        Ok(()) => {
            info!("Server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn quiet_wins() {
        assert_eq!(get_log_level(3, true, Some("trace"), "debug"), Level::ERROR);
    }

    #[test]
    fn verbose_beats_environment() {
        assert_eq!(get_log_level(1, false, Some("error"), "warn"), Level::INFO);
        assert_eq!(get_log_level(2, false, None, "warn"), Level::DEBUG);
        assert_eq!(get_log_level(5, false, None, "warn"), Level::TRACE);
    }

    #[test]
    fn environment_beats_config() {
        assert_eq!(get_log_level(0, false, Some("DEBUG"), "error"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, Some("bogus"), "info"), Level::INFO);
    }

    #[test]
    fn defaults_to_warn() {
        assert_eq!(get_log_level(0, false, None, "nonsense"), Level::WARN);
    }
}
