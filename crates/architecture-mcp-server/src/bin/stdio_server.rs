use anyhow::{Context, Result};
use architecture_mcp_server::{ArchitectureMcpServer, ArchitectureServerConfig, CONSULTATION_TOOL};
use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(
    name = "architecture-mcp-server-stdio",
    version,
    about = "Software architecture consultation MCP server (STDIO transport)"
)]
struct Cli {
    #[arg(short, long, help = "Configuration file path (JSON)")]
    config: Option<PathBuf>,

    #[arg(long, help = "Log filter, overrides RUST_LOG (e.g. info, debug)")]
    log_level: Option<String>,

    #[arg(long, help = "Write logs to this file instead of stderr")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the protocol
    let _guard = init_tracing(&cli)?;

    info!("Starting Architecture MCP Server (STDIO)...");

    let config = ArchitectureServerConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    info!("Configuration loaded");
    info!("Max tokens: {}", config.sampling.max_tokens);
    info!("Temperature: {}", config.sampling.temperature);
    info!("Strict options: {}", config.validation.strict_options);

    let server = ArchitectureMcpServer::new(config).context("Invalid configuration")?;

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("Error starting server: {}", e);
    })?;

    info!("🚀 Architecture MCP Server started on STDIO transport");
    info!("Available tools: {}", CONSULTATION_TOOL);

    match service.waiting().await {
        Ok(reason) => info!("Server shut down gracefully: {:?}", reason),
        Err(e) => error!("Server error: {}", e),
    }

    Ok(())
}

fn init_tracing(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level).context("Invalid log level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    match &cli.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let file_name = path
                .file_name()
                .context("Log file path has no file name")?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let file_appender = tracing_appender::rolling::never(&dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false)
                .with_line_number(true)
                .init();

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .init();

            Ok(None)
        }
    }
}
