//! Core LSP functionality for TinyScheme turtle scripts
//!
//! This crate holds the editor-independent logic used by the language server:
//! the language catalog, the regex-based identifier classifier and the
//! line-by-line pattern diagnostics. Nothing here parses Scheme; every check
//! is a line-local pattern match, so half-typed input never fails, it simply
//! matches nothing.
//!
//! # Features
//!
//! - **Completion**: commands, shortcuts, variables, keywords, angle constants,
//!   user-defined identifiers and free words, in that order
//! - **Diagnostics**: at most one diagnostic per line, picked by rule tier
//!
//! # Example
//!
//! ```
//! use turtle_lsp_core::{complete, Catalog, DiagnosticEngine};
//!
//! let catalog = Catalog::turtle();
//! let items = complete(&catalog, "(define (square side) (move-forward side))");
//! assert!(items.iter().any(|item| item.label == "square"));
//!
//! let engine = DiagnosticEngine::new(catalog).unwrap();
//! let diagnostics = engine.diagnose("(move-forward)");
//! assert_eq!(diagnostics[0].message, "`move-forward` expected exactly 1 arguments.");
//! ```

pub mod builtins;
pub mod catalog;
pub mod completion;
pub mod diagnostics;
pub mod documentation;
pub mod error;
pub mod identifiers;
pub mod pattern;
pub mod words;

// Re-export main types for convenience
pub use catalog::{Catalog, Command, Keyword, Variable, TURTLE_CATALOG};
pub use completion::{complete, CompletionEntry, CompletionKind};
pub use diagnostics::{Diagnostic, DiagnosticEngine, Severity, Tier, DIAGNOSTIC_CODE};
pub use error::{Error, Result};
pub use identifiers::{classify, ClassifiedIdentifier, IdentifierRole};
pub use words::words;
