use tower_lsp::lsp_types::*;

/// Define the server capabilities for the turtle LSP
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        // Full text sync; every pass rescans the whole document anyway
        text_document_sync: Some(TextDocumentSyncCapability::Kind(
            TextDocumentSyncKind::FULL,
        )),

        completion_provider: Some(CompletionOptions {
            trigger_characters: Some(vec!["(".to_string()]),
            ..Default::default()
        }),

        // Diagnostics are pushed via publishDiagnostics (no special capability needed)

        ..Default::default()
    }
}
