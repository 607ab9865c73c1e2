use tower_lsp::lsp_types::*;
use turtle_lsp_core::{Diagnostic as CoreDiagnostic, DiagnosticEngine, Severity};

use crate::document::Document;

/// Compute diagnostics for a document by scanning it line by line
pub fn compute_diagnostics(engine: &DiagnosticEngine, doc: &Document) -> Vec<Diagnostic> {
    let diagnostics: Vec<Diagnostic> = engine
        .diagnose(doc.text())
        .iter()
        .map(convert_to_lsp_diagnostic)
        .collect();

    tracing::debug!(count = diagnostics.len(), "computed diagnostics");
    diagnostics
}

fn convert_to_lsp_diagnostic(diagnostic: &CoreDiagnostic) -> Diagnostic {
    let line = diagnostic.line as u32;

    Diagnostic {
        range: Range {
            start: Position {
                line,
                character: diagnostic.start_column as u32,
            },
            end: Position {
                line,
                character: diagnostic.end_column as u32,
            },
        },
        severity: Some(convert_severity(diagnostic.severity)),
        code: Some(NumberOrString::String(diagnostic.code.to_string())),
        source: Some("turtle".to_string()),
        message: diagnostic.message.clone(),
        ..Default::default()
    }
}

fn convert_severity(severity: Severity) -> DiagnosticSeverity {
    match severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
        Severity::Information => DiagnosticSeverity::INFORMATION,
    }
}
