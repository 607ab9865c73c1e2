//! Completion entries for turtle scripts
//! Merges catalog entries, classified identifiers and free words into one list

use std::collections::HashSet;

use crate::catalog::{Catalog, Command, Keyword, Variable, COMMANDS_URL, SCHEME_URL, VARIABLES_URL};
use crate::documentation::documentation;
use crate::identifiers::{classify, ClassifiedIdentifier, IdentifierRole};
use crate::words::words;

/// Angles offered as numeric constants, in degrees
pub const ANGLE_CONSTANTS: [i32; 4] = [45, 90, 135, 180];

const WORDS_URL: &str = "https://translate.google.ca/?sl=auto&tl=en&op=translate";

const INACCURATE_SUGGESTION_NOTE: &str = "Suggestions may be inaccurate because they are \
    RegExp-based, we are working on the LSP server to provide the best experience";

/// A completion entry that can be used by both LSP server and CLI
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionEntry {
    pub label: String,
    pub kind: CompletionKind,
    pub detail: String,
    pub documentation: String,
    /// Snippet text with `${n:name}` placeholders
    pub insert_text: String,
}

/// The kind of completion item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Function,
    Snippet,
    Variable,
    Keyword,
    Constant,
    Color,
    Text,
}

impl CompletionKind {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionKind::Function => "function",
            CompletionKind::Snippet => "snippet",
            CompletionKind::Variable => "variable",
            CompletionKind::Keyword => "keyword",
            CompletionKind::Constant => "constant",
            CompletionKind::Color => "color",
            CompletionKind::Text => "text",
        }
    }
}

impl From<IdentifierRole> for CompletionKind {
    fn from(role: IdentifierRole) -> Self {
        match role {
            IdentifierRole::Variable => CompletionKind::Variable,
            IdentifierRole::Function => CompletionKind::Function,
            IdentifierRole::Color => CompletionKind::Color,
            IdentifierRole::Vector => CompletionKind::Constant,
        }
    }
}

/// `(name ${1:a} ${2:b})`
pub fn call_template<S: AsRef<str>>(name: &str, args: &[S]) -> String {
    let mut text = format!("({}", name);
    for (index, arg) in args.iter().enumerate() {
        text.push_str(&format!(" ${{{}:{}}}", index + 1, arg.as_ref()));
    }
    text.push(')');
    text
}

fn command_entry(command: &Command, label: &str, kind: CompletionKind) -> CompletionEntry {
    CompletionEntry {
        label: label.to_string(),
        kind,
        detail: call_signature(command),
        documentation: documentation(&command.description, COMMANDS_URL, None),
        insert_text: call_template(&command.name, &command.args),
    }
}

fn call_signature(command: &Command) -> String {
    if command.args.is_empty() {
        format!("({})", command.name)
    } else {
        format!("({} {})", command.name, command.args.join(" "))
    }
}

/// Tier 1: every command under its full name
pub fn command_completions(catalog: &Catalog) -> Vec<CompletionEntry> {
    catalog
        .commands
        .iter()
        .map(|c| command_entry(c, &c.name, CompletionKind::Function))
        .collect()
}

/// Tier 2: commands reachable through a shortcut
pub fn command_shortcut_completions(catalog: &Catalog) -> Vec<CompletionEntry> {
    catalog
        .commands
        .iter()
        .filter_map(|c| {
            c.shortcut
                .as_deref()
                .map(|shortcut| command_entry(c, shortcut, CompletionKind::Snippet))
        })
        .collect()
}

fn variable_entry(variable: &Variable, label: &str, kind: CompletionKind) -> CompletionEntry {
    CompletionEntry {
        label: label.to_string(),
        kind,
        detail: "Configuration variable".to_string(),
        documentation: documentation(&variable.description, VARIABLES_URL, None),
        insert_text: format!("(define {} '(${{1:commands}}))", variable.name),
    }
}

/// Tier 3: predeclared variables, full names first, then shortcuts
pub fn variable_completions(catalog: &Catalog) -> Vec<CompletionEntry> {
    let full = catalog
        .variables
        .iter()
        .map(|v| variable_entry(v, &v.name, CompletionKind::Variable));
    let shortcuts = catalog.variables.iter().filter_map(|v| {
        v.shortcut
            .as_deref()
            .map(|shortcut| variable_entry(v, shortcut, CompletionKind::Snippet))
    });

    full.chain(shortcuts).collect()
}

fn keyword_entry(keyword: &Keyword, label: &str, kind: CompletionKind) -> CompletionEntry {
    let body = format!("{} {}", keyword.name, keyword.body);
    let insert_text = if keyword.wraps_in_parens {
        format!("({})", body)
    } else {
        body
    };

    CompletionEntry {
        label: label.to_string(),
        kind,
        detail: "Keyword".to_string(),
        documentation: documentation(&keyword.description, SCHEME_URL, None),
        insert_text,
    }
}

/// Tier 4: keywords, full names first, then shortcuts
pub fn keyword_completions(catalog: &Catalog) -> Vec<CompletionEntry> {
    let full = catalog
        .keywords
        .iter()
        .map(|k| keyword_entry(k, &k.name, CompletionKind::Keyword));
    let shortcuts = catalog.keywords.iter().filter_map(|k| {
        k.shortcut
            .as_deref()
            .map(|shortcut| keyword_entry(k, shortcut, CompletionKind::Snippet))
    });

    full.chain(shortcuts).collect()
}

/// Tier 5: common angles and their negations
pub fn constant_completions() -> Vec<CompletionEntry> {
    ANGLE_CONSTANTS
        .iter()
        .copied()
        .chain(ANGLE_CONSTANTS.iter().map(|angle| -angle))
        .map(|angle| CompletionEntry {
            label: angle.to_string(),
            kind: CompletionKind::Constant,
            detail: "Angle in degrees".to_string(),
            documentation: documentation(
                &format!("A commonly used **angle** of {} degrees", angle),
                COMMANDS_URL,
                None,
            ),
            insert_text: angle.to_string(),
        })
        .collect()
}

/// Tier 6: identifiers found by the classifier
pub fn identifier_completions(identifiers: &[ClassifiedIdentifier]) -> Vec<CompletionEntry> {
    identifiers.iter().map(identifier_entry).collect()
}

fn identifier_entry(identifier: &ClassifiedIdentifier) -> CompletionEntry {
    let insert_text = match identifier.role {
        IdentifierRole::Function => call_template(&identifier.name, &identifier.args),
        _ => identifier.name.clone(),
    };

    let text = match &identifier.signature {
        Some(signature) => format!("{}: *{}*", identifier.description, signature),
        None => identifier.description.to_string(),
    };

    CompletionEntry {
        label: identifier.name.clone(),
        kind: identifier.role.into(),
        detail: format!("user defined {}", identifier.role.as_str()),
        documentation: documentation(&text, SCHEME_URL, Some(INACCURATE_SUGGESTION_NOTE)),
        insert_text,
    }
}

/// Tier 7: free words
pub fn word_completions(words: &[String]) -> Vec<CompletionEntry> {
    words
        .iter()
        .map(|word| CompletionEntry {
            label: word.clone(),
            kind: CompletionKind::Text,
            detail: "Word".to_string(),
            documentation: documentation(
                "A **word** typed in the current document",
                WORDS_URL,
                None,
            ),
            insert_text: word.clone(),
        })
        .collect()
}

/// Every suggestion for `text`, in precedence order, without duplicate labels
pub fn complete(catalog: &Catalog, text: &str) -> Vec<CompletionEntry> {
    let identifiers = classify(catalog, text);
    let free_words = words(catalog, text, &identifiers);

    let mut items = Vec::new();
    items.extend(command_completions(catalog));
    items.extend(command_shortcut_completions(catalog));
    items.extend(variable_completions(catalog));
    items.extend(keyword_completions(catalog));
    items.extend(constant_completions());
    items.extend(identifier_completions(&identifiers));
    items.extend(word_completions(&free_words));

    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.label.clone()));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[CompletionEntry]) -> Vec<&str> {
        items.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_command_count() {
        let catalog = Catalog::turtle();
        assert_eq!(command_completions(&catalog).len(), catalog.commands.len());
    }

    #[test]
    fn test_shortcut_completions() {
        let catalog = Catalog::turtle();
        let shortcuts = command_shortcut_completions(&catalog);
        assert_eq!(labels(&shortcuts), vec!["f", "b", "l", "r"]);
        assert!(shortcuts.iter().all(|c| c.kind == CompletionKind::Snippet));
        assert_eq!(shortcuts[0].insert_text, "(move-forward ${1:units})");
    }

    #[test]
    fn test_command_placeholders_numbered_from_one() {
        let catalog = Catalog::turtle();
        let items = command_completions(&catalog);
        let rgb = items.iter().find(|c| c.label == "rgb").unwrap();
        assert_eq!(rgb.insert_text, "(rgb ${1:red} ${2:green} ${3:blue})");
        assert_eq!(rgb.detail, "(rgb red green blue)");

        let up = items.iter().find(|c| c.label == "up").unwrap();
        assert_eq!(up.insert_text, "(up)");
    }

    #[test]
    fn test_variable_completions() {
        let catalog = Catalog::turtle();
        let items = variable_completions(&catalog);
        assert_eq!(labels(&items), vec!["turtle-configuration", "turtle-theme", "c"]);
        assert_eq!(items[0].insert_text, "(define turtle-configuration '(${1:commands}))");
        assert_eq!(items[2].kind, CompletionKind::Snippet);
    }

    #[test]
    fn test_keyword_completions() {
        let catalog = Catalog::turtle();
        let items = keyword_completions(&catalog);
        let define = items.iter().find(|c| c.label == "define").unwrap();
        assert_eq!(define.insert_text, "(define ${1:variable} ${2:value})");

        let author = items.iter().find(|c| c.label == "@author").unwrap();
        assert_eq!(author.insert_text, "@author - ${1:author}");

        let shortcut = items.last().unwrap();
        assert_eq!(shortcut.label, "d");
        assert_eq!(shortcut.kind, CompletionKind::Snippet);
    }

    #[test]
    fn test_constant_completions() {
        let constants = constant_completions();
        assert_eq!(
            labels(&constants),
            vec!["45", "90", "135", "180", "-45", "-90", "-135", "-180"]
        );
    }

    #[test]
    fn test_tier_order() {
        let items = complete(&Catalog::turtle(), "(define (area x y) (* x y))\nhello");
        let position = |label: &str| items.iter().position(|c| c.label == label).unwrap();

        assert!(position("move-on") < position("f"));
        assert!(position("f") < position("turtle-configuration"));
        assert!(position("turtle-configuration") < position("if"));
        assert!(position("if") < position("45"));
        assert!(position("45") < position("area"));
        assert!(position("area") < position("hello"));
    }

    #[test]
    fn test_function_identifier_completion() {
        let items = complete(&Catalog::turtle(), "(define area (x y) (* x y))");
        let area = items.iter().find(|c| c.label == "area").unwrap();
        assert_eq!(area.kind, CompletionKind::Function);
        assert_eq!(area.insert_text, "(area ${1:x} ${2:y})");
        assert!(area.documentation.contains("*Notice:"));
    }

    #[test]
    fn test_signature_in_documentation() {
        let text = "; @signature - area integer integer\n(define (area x y) (* x y))";
        let items = complete(&Catalog::turtle(), text);
        let area = items.iter().find(|c| c.label == "area").unwrap();
        assert!(area
            .documentation
            .starts_with("A possible user defined **function**: *area integer integer*"));
    }

    #[test]
    fn test_color_and_vector_kinds() {
        let items = complete(&Catalog::turtle(), "(255 0 0)\n(move-to 10 -20)");
        let color = items.iter().find(|c| c.label == "(255 0 0)").unwrap();
        assert_eq!(color.kind, CompletionKind::Color);
        let vector = items.iter().find(|c| c.label == "10 -20").unwrap();
        assert_eq!(vector.kind, CompletionKind::Constant);
    }

    #[test]
    fn test_catalog_wins_over_user_definition() {
        let items = complete(&Catalog::turtle(), "(define move-on (x y) (+ x y))");
        let move_on: Vec<&CompletionEntry> =
            items.iter().filter(|c| c.label == "move-on").collect();
        assert_eq!(move_on.len(), 1);
        assert_eq!(move_on[0].kind, CompletionKind::Function);
        assert_eq!(move_on[0].insert_text, "(move-on ${1:x} ${2:y})");
        assert!(!move_on[0].documentation.contains("*Notice:"));
    }

    #[test]
    fn test_labels_are_unique() {
        let text = "(turn-left 90)\n(define f 45)\n(define (l) (r))\nf 45 90 word word";
        let items = complete(&Catalog::turtle(), text);
        let mut seen = HashSet::new();
        for item in &items {
            assert!(seen.insert(item.label.as_str()), "duplicate label {}", item.label);
        }
    }

    #[test]
    fn test_completion_kind_as_str() {
        assert_eq!(CompletionKind::Function.as_str(), "function");
        assert_eq!(CompletionKind::Snippet.as_str(), "snippet");
        assert_eq!(CompletionKind::Color.as_str(), "color");
        assert_eq!(CompletionKind::Text.as_str(), "text");
    }
}
