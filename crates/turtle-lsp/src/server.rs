use dashmap::DashMap;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use turtle_lsp_core::DiagnosticEngine;

use crate::capabilities;
use crate::document::Document;
use crate::handlers;

/// Settings resolved from the command line
pub struct ServerConfig {
    pub debug: bool,
    /// Language ids that activate completions and diagnostics
    pub language_ids: Vec<String>,
}

pub struct Backend {
    client: Client,
    documents: DashMap<Url, Document>,
    engine: DiagnosticEngine,
    config: ServerConfig,
}

impl Backend {
    pub fn new(client: Client, engine: DiagnosticEngine, config: ServerConfig) -> Self {
        Self {
            client,
            documents: DashMap::new(),
            engine,
            config,
        }
    }

    async fn log_debug(&self, message: &str) {
        tracing::debug!("{}", message);
        if self.config.debug {
            self.client
                .log_message(MessageType::INFO, format!("[DEBUG] {}", message))
                .await;
        }
    }

    /// Rescan a document and replace its published diagnostics
    async fn refresh_diagnostics(&self, uri: Url) {
        let Some(doc) = self.documents.get(&uri) else {
            return;
        };

        if !doc.is_enabled_for(&self.config.language_ids) {
            tracing::debug!(%uri, language = doc.language_id(), "language not enabled, skipping");
            return;
        }

        let diagnostics = handlers::diagnostics::compute_diagnostics(&self.engine, &doc);
        let version = doc.version();

        drop(doc); // Release the lock before async call

        self.client
            .publish_diagnostics(uri, diagnostics, Some(version))
            .await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        self.log_debug("Initializing turtle LSP server").await;

        Ok(InitializeResult {
            capabilities: capabilities::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "turtle-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!(
            languages = ?self.config.language_ids,
            commands = self.engine.catalog().commands.len(),
            "server initialized"
        );
        self.client
            .log_message(MessageType::INFO, "Turtle LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.log_debug("Shutting down server").await;
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let item = params.text_document;
        let uri = item.uri.clone();

        self.log_debug(&format!("Document opened: {} ({})", uri, item.language_id))
            .await;

        self.documents.insert(
            uri.clone(),
            Document::new(item.text, item.language_id, item.version),
        );
        self.refresh_diagnostics(uri).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri.clone();
        let version = params.text_document.version;

        self.log_debug(&format!("Document changed: {}", uri)).await;

        if let Some(mut doc) = self.documents.get_mut(&uri) {
            // Apply changes (for full sync, we just replace the entire text)
            for change in params.content_changes {
                doc.update_text(change.text, version);
            }
        }

        self.refresh_diagnostics(uri).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.log_debug(&format!("Document closed: {}", uri)).await;

        if self.documents.remove(&uri).is_some() {
            self.client.publish_diagnostics(uri, Vec::new(), None).await;
        }
    }

    async fn completion(
        &self,
        params: CompletionParams,
    ) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        self.log_debug(&format!("Completion request at {:?}", position))
            .await;

        match self.documents.get(uri) {
            Some(doc) if doc.is_enabled_for(&self.config.language_ids) => {
                let items = handlers::completion::get_completions(self.engine.catalog(), &doc);
                Ok(Some(CompletionResponse::Array(items)))
            }
            _ => Ok(None),
        }
    }
}
