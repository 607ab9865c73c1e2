use tower_lsp::lsp_types::*;
use turtle_lsp_core::{complete, Catalog, CompletionEntry, CompletionKind};

use crate::document::Document;

/// Convert a core completion entry to an LSP completion item
fn convert_to_lsp_completion(entry: &CompletionEntry) -> CompletionItem {
    let kind = match entry.kind {
        CompletionKind::Function => CompletionItemKind::FUNCTION,
        CompletionKind::Snippet => CompletionItemKind::SNIPPET,
        CompletionKind::Variable => CompletionItemKind::VARIABLE,
        CompletionKind::Keyword => CompletionItemKind::KEYWORD,
        CompletionKind::Constant => CompletionItemKind::CONSTANT,
        CompletionKind::Color => CompletionItemKind::COLOR,
        CompletionKind::Text => CompletionItemKind::TEXT,
    };

    let insert_text_format = if entry.insert_text.contains('$') {
        InsertTextFormat::SNIPPET
    } else {
        InsertTextFormat::PLAIN_TEXT
    };

    CompletionItem {
        label: entry.label.clone(),
        kind: Some(kind),
        detail: Some(entry.detail.clone()),
        documentation: Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: entry.documentation.clone(),
        })),
        insert_text: Some(entry.insert_text.clone()),
        insert_text_format: Some(insert_text_format),
        ..Default::default()
    }
}

/// Get completion items for the whole document
pub fn get_completions(catalog: &Catalog, doc: &Document) -> Vec<CompletionItem> {
    let items: Vec<CompletionItem> = complete(catalog, doc.text())
        .iter()
        .enumerate()
        .map(|(rank, entry)| CompletionItem {
            // Keep the precedence order instead of the client's alphabetical one
            sort_text: Some(format!("{:05}", rank)),
            ..convert_to_lsp_completion(entry)
        })
        .collect();

    tracing::debug!(count = items.len(), "computed completions");
    items
}
