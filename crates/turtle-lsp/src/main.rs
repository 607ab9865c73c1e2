use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;
use turtle_lsp_core::{Catalog, DiagnosticEngine};

mod capabilities;
mod document;
mod handlers;
mod server;

#[derive(Parser)]
#[command(name = "turtle-lsp")]
#[command(about = "Language Server for TinyScheme turtle scripts")]
struct Cli {
    /// Use stdio for communication (required)
    #[arg(long)]
    stdio: bool,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// JSON catalog replacing the built-in commands, keywords and variables
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Language id that activates the server (repeatable)
    #[arg(long = "language-id", value_name = "ID", default_value = "scheme")]
    language_ids: Vec<String>,
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = Catalog::from_path(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded catalog");
            Ok(catalog)
        }
        None => Ok(Catalog::turtle()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if !args.stdio {
        bail!("--stdio flag is required");
    }

    init_logging(args.debug);

    let catalog = load_catalog(args.catalog.as_ref())?;
    let engine = DiagnosticEngine::new(catalog).context("failed to compile diagnostic rules")?;
    let config = server::ServerConfig {
        debug: args.debug,
        language_ids: args.language_ids,
    };

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        LspService::new(move |client| server::Backend::new(client, engine, config));

    Server::new(stdin, stdout, socket).serve(service).await;
    Ok(())
}
