//! logseq-lsp binary: flags, config, logging, then serve over stdio.
//!
//! stdout belongs to the JSON-RPC channel, so diagnostics go to a log file
//! (and fatal startup errors to stderr).

use clap::Parser;
use logseq_config::{Loader, LspConfig};
use logseq_graph::{GraphLayout, GraphQuery, HttpClient};
use logseq_lsp::{GraphContext, LogseqLanguageServer};
use std::fs::File;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Language server for navigating Logseq graphs.
#[derive(Parser)]
#[command(name = "logseq-lsp", version)]
struct Cli {
    /// Token to auth to the Logseq API server.
    #[arg(short, long)]
    token: Option<String>,

    /// Port the Logseq API server is listening on.
    #[arg(short, long)]
    port: Option<u16>,

    /// Log file path (defaults to ~/.config/logseq-lsp/logseq-lsp.log).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable or disable logging.
    #[arg(short, long)]
    logging: Option<bool>,

    /// Configuration file (defaults to ~/.config/logseq-lsp/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn config_dir() -> PathBuf {
    home::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("logseq-lsp")
}

fn load_config(cli: &Cli) -> Result<LspConfig, Box<dyn std::error::Error>> {
    let mut loader = match &cli.config {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(config_dir().join("config.toml")),
    };
    if let Some(token) = &cli.token {
        loader = loader.set_override("api.token", token.as_str())?;
    }
    if let Some(port) = cli.port {
        loader = loader.set_override("api.port", i64::from(port))?;
    }
    if let Some(logging) = cli.logging {
        loader = loader.set_override("log.enabled", logging)?;
    }
    if let Some(log_file) = &cli.log_file {
        loader = loader.set_override("log.file", log_file.display().to_string())?;
    }
    Ok(loader.build()?)
}

fn init_logging(config: &LspConfig) -> Result<(), Box<dyn std::error::Error>> {
    let path = config
        .log
        .file
        .clone()
        .unwrap_or_else(|| config_dir().join("logseq-lsp.log"));
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = load_config(&cli).unwrap_or_else(|err| {
        eprintln!("logseq-lsp: configuration error: {err}");
        process::exit(1);
    });

    if config.log.enabled {
        init_logging(&config).unwrap_or_else(|err| {
            eprintln!("logseq-lsp: cannot set up logging: {err}");
            process::exit(1);
        });
    }
    info!(version = env!("CARGO_PKG_VERSION"), "starting up");

    let client = HttpClient::new(config.api.port, config.api.token.clone());
    let graph = client.current_graph().await.unwrap_or_else(|err| {
        eprintln!(
            "logseq-lsp: cannot reach the Logseq API on port {}: {err}",
            config.api.port
        );
        process::exit(1);
    });
    info!(name = %graph.name, path = %graph.path, "connected to graph");

    let layout = GraphLayout {
        root: PathBuf::from(&graph.path),
        pages_path: config.graph.pages_path.clone(),
        journals_path: config.graph.journals_path.clone(),
    };
    let context = GraphContext::new(layout, client);

    info!("serving");
    let (service, socket) =
        LspService::new(move |client| LogseqLanguageServer::new(client, context));
    Server::new(stdin(), stdout(), socket).serve(service).await;
}
