//! Regex-based recognition of user-defined identifiers
//!
//! There is no parser behind this module. Each line of a document is tested
//! against [`IDENTIFIER_RULES`] in order and the first rule that matches
//! decides what the line defines. The order is part of the contract: the
//! function rules must come before the variable rule, whose pattern is a
//! prefix of theirs.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::catalog::Catalog;

/// What a classified identifier stands for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdentifierRole {
    Variable,
    Function,
    Color,
    Vector,
}

impl IdentifierRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierRole::Variable => "variable",
            IdentifierRole::Function => "function",
            IdentifierRole::Color => "color",
            IdentifierRole::Vector => "vector",
        }
    }
}

/// One structural recognition rule
#[derive(Debug)]
pub struct IdentifierRule {
    pub role: IdentifierRole,
    pub description: &'static str,
    /// Must define a `name` group; function rules may define `args`
    pub pattern: Regex,
}

/// A name found in a document together with its role
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedIdentifier {
    pub name: String,
    pub role: IdentifierRole,
    pub description: &'static str,
    /// Parameter names of a function, variadic marker excluded
    pub args: Vec<String>,
    /// Zero-based line of first appearance
    pub line: usize,
    /// Text of a matching `; @signature - name ...` comment
    pub signature: Option<String>,
}

const IDENT: &str = r"[a-zA-Z][a-zA-Z0-9\-]*";

/// Marks a variadic tail in a parameter list, as in `(define (f a . rest))`
const VARIADIC_MARKER: &str = ".";

/// Recognition rules in evaluation order
pub static IDENTIFIER_RULES: Lazy<Vec<IdentifierRule>> = Lazy::new(|| {
    vec![
        // (define (name arg ...) body)
        rule(
            IdentifierRole::Function,
            "A possible user defined **function**",
            &format!(r"\(\s*define\s+\((?P<name>{IDENT})(?:\s+(?P<args>[^()]*?))?\s*\)"),
        ),
        // (define name (arg ...) body), the body keeps `(define pen (up))` a variable
        rule(
            IdentifierRole::Function,
            "A possible user defined **function**",
            &format!(
                r"\(\s*define\s+(?P<name>{IDENT})\s+\((?P<args>\s*(?:(?:{IDENT}|\.)\s*)*)\)\s+[^\s)]"
            ),
        ),
        rule(
            IdentifierRole::Variable,
            "A possible user defined **variable**",
            &format!(r"\(\s*define\s+(?P<name>{IDENT})"),
        ),
        rule(
            IdentifierRole::Color,
            "A possible user defined **color**",
            r"(?P<name>\(\s*\d+\s+\d+\s+\d+\s*\))",
        ),
        rule(
            IdentifierRole::Vector,
            "A possible user defined **vector**",
            r"\((?:move-on|move-to)\s+(?P<name>-?\d+\s+-?\d+)\)",
        ),
    ]
});

static SIGNATURE_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r";.*@signature\s+-\s+(?P<name>[a-zA-Z][a-zA-Z0-9\-]*)\s+(?P<types>[a-zA-Z\[\]].*)",
    )
    .expect("signature comment pattern")
});

fn rule(role: IdentifierRole, description: &'static str, pattern: &str) -> IdentifierRule {
    IdentifierRule {
        role,
        description,
        pattern: Regex::new(pattern).expect("identifier rule pattern"),
    }
}

/// Find the first rule matching `line`
pub fn classify_line(line: &str) -> Option<(&'static IdentifierRule, Captures<'_>)> {
    IDENTIFIER_RULES
        .iter()
        .find_map(|rule| rule.pattern.captures(line).map(|caps| (rule, caps)))
}

fn split_parameters(args: &str) -> impl Iterator<Item = &str> {
    args.split_whitespace().filter(|arg| *arg != VARIADIC_MARKER)
}

/// Parameter names of the function defined on `line`, if any
pub fn line_parameters(line: &str) -> Vec<&str> {
    match classify_line(line) {
        Some((rule, caps)) if rule.role == IdentifierRole::Function => caps
            .name("args")
            .map(|args| split_parameters(args.as_str()).collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Extract user-defined identifiers from a document
///
/// Identical lines are considered once, and each name is reported once, at
/// its first appearance. Names owned by the catalog are dropped.
pub fn classify(catalog: &Catalog, text: &str) -> Vec<ClassifiedIdentifier> {
    let mut seen_lines = HashSet::new();
    let mut seen_names = HashSet::new();
    let mut identifiers = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if !seen_lines.insert(line) {
            continue;
        }

        let Some((rule, caps)) = classify_line(line) else {
            continue;
        };
        let name = &caps["name"];

        if catalog.contains_name(name) || !seen_names.insert(name.to_string()) {
            continue;
        }

        let args = caps
            .name("args")
            .map(|args| split_parameters(args.as_str()).map(str::to_string).collect())
            .unwrap_or_default();

        identifiers.push(ClassifiedIdentifier {
            name: name.to_string(),
            role: rule.role,
            description: rule.description,
            args,
            line: index,
            signature: None,
        });
    }

    attach_signatures(text, &mut identifiers);
    identifiers
}

/// Attach `; @signature - name types` comments to the functions they describe
fn attach_signatures(text: &str, identifiers: &mut [ClassifiedIdentifier]) {
    let signatures: Vec<(&str, &str)> = text
        .lines()
        .filter_map(|line| SIGNATURE_COMMENT.captures(line))
        .filter_map(|caps| Some((caps.name("name")?.as_str(), caps.name("types")?.as_str())))
        .collect();

    if signatures.is_empty() {
        return;
    }

    for identifier in identifiers
        .iter_mut()
        .filter(|i| i.role == IdentifierRole::Function)
    {
        if let Some((name, types)) = signatures.iter().find(|(name, _)| *name == identifier.name) {
            identifier.signature = Some(format!("{} {}", name, types.trim()));
        }
    }
}
