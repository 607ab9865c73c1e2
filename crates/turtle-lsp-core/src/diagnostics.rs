//! Line-by-line pattern diagnostics
//!
//! Every line is tested against an ordered list of rules grouped in tiers:
//!
//! 1. style hints
//! 2. structural checks that need no catalog knowledge
//! 3. argument count, one rule per command
//! 4. argument type, one rule per command taking arguments
//! 5. unknown identifier, rebuilt for every document from the names it defines
//!
//! The first rule that matches a line produces that line's only diagnostic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::{Catalog, Command};
use crate::error::Result;
use crate::identifiers::{classify, line_parameters, ClassifiedIdentifier, IdentifierRole};
use crate::pattern::{escape, exact_names};

/// Code attached to every diagnostic
pub const DIAGNOSTIC_CODE: &str = "turtle";

pub const UNKNOWN_IDENTIFIER_MESSAGE: &str =
    "Unknown command or identifier, possibly unknown built-in or defined externally.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Information,
}

/// Rule groups in evaluation order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Style,
    Structural,
    ArgumentCount,
    ArgumentType,
    UnknownIdentifier,
}

/// A problem found on one line
///
/// Columns count UTF-16 code units, as editors address them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub start_column: usize,
    pub end_column: usize,
    pub message: String,
    pub severity: Severity,
    pub tier: Tier,
    pub code: &'static str,
}

#[derive(Debug)]
pub struct PatternRule {
    pub pattern: Regex,
    pub message: String,
    pub severity: Severity,
    pub tier: Tier,
}

impl PatternRule {
    fn new(
        pattern: &str,
        message: impl Into<String>,
        severity: Severity,
        tier: Tier,
    ) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
            severity,
            tier,
        })
    }
}

/// Innermost parenthesised forms; the head token is the first word inside
static INNER_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*([^()]*)\)").expect("inner form pattern"));

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").expect("number pattern"));

/// Flags forms whose head is not a known name
///
/// Function parameters only count as known on the line that declares them.
struct UnknownIdentifierRule {
    known: Regex,
}

impl UnknownIdentifierRule {
    fn find(&self, line: &str) -> Option<(usize, usize)> {
        let parameters = line_parameters(line);
        INNER_FORM.captures_iter(line).find_map(|caps| {
            let form = caps.get(0)?;
            let head = caps.get(1)?.as_str().split_whitespace().next()?;

            // Numeric heads are data lists such as colors, not calls
            if NUMBER.is_match(head) || self.known.is_match(head) || parameters.contains(&head) {
                None
            } else {
                Some((form.start(), form.end()))
            }
        })
    }
}

/// Compiled rule set for one catalog
#[derive(Debug)]
pub struct DiagnosticEngine {
    catalog: Catalog,
    rules: Vec<PatternRule>,
}

impl DiagnosticEngine {
    pub fn new(catalog: Catalog) -> Result<Self> {
        let mut rules = Vec::new();
        rules.extend(style_rules()?);
        rules.extend(structural_rules()?);
        for command in &catalog.commands {
            rules.push(argument_count_rule(command)?);
        }
        for command in catalog.commands.iter().filter(|c| c.arity() > 0) {
            rules.push(argument_type_rule(command)?);
        }

        tracing::debug!(rules = rules.len(), "compiled diagnostic rules");
        Ok(Self { catalog, rules })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The static tiers in evaluation order
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Scan a whole document, reporting at most one diagnostic per line
    pub fn diagnose(&self, text: &str) -> Vec<Diagnostic> {
        let classified = classify(&self.catalog, text);
        let fallback = match self.unknown_identifier_rule(&classified) {
            Ok(rule) => Some(rule),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unknown identifier check");
                None
            }
        };

        text.lines()
            .enumerate()
            .filter_map(|(index, line)| self.diagnose_line(index, line, fallback.as_ref()))
            .collect()
    }

    fn diagnose_line(
        &self,
        index: usize,
        line: &str,
        fallback: Option<&UnknownIdentifierRule>,
    ) -> Option<Diagnostic> {
        let found = self
            .rules
            .iter()
            .find_map(|rule| {
                rule.pattern.find(line).map(|m| {
                    (m.start(), m.end(), rule.message.clone(), rule.severity, rule.tier)
                })
            })
            .or_else(|| {
                let (start, end) = fallback?.find(line)?;
                Some((
                    start,
                    end,
                    UNKNOWN_IDENTIFIER_MESSAGE.to_string(),
                    Severity::Warning,
                    Tier::UnknownIdentifier,
                ))
            });

        let (start, end, message, severity, tier) = found?;
        Some(Diagnostic {
            line: index,
            start_column: utf16_len(&line[..start]),
            end_column: utf16_len(&line[..end]),
            message,
            severity,
            tier,
            code: DIAGNOSTIC_CODE,
        })
    }

    fn unknown_identifier_rule(
        &self,
        classified: &[ClassifiedIdentifier],
    ) -> Result<UnknownIdentifierRule> {
        let local = classified
            .iter()
            .filter(|i| matches!(i.role, IdentifierRole::Variable | IdentifierRole::Function))
            .map(|i| i.name.as_str());

        let known = exact_names(self.catalog.known_names().chain(local))?;
        Ok(UnknownIdentifierRule { known })
    }
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

fn style_rules() -> Result<Vec<PatternRule>> {
    Ok(vec![
        PatternRule::new(
            r"\(\s*define\s+turtle-(?:configuration|theme)\s+\(",
            "It's recommended to escape the whole command list with a single quote.",
            Severity::Information,
            Tier::Style,
        )?,
        PatternRule::new(
            r"\(\s+\S",
            "It's recommended to remove spaces right after the opening parenthesis.",
            Severity::Information,
            Tier::Style,
        )?,
        PatternRule::new(
            r"\S\s+\)",
            "It's recommended to remove spaces right before the closing parenthesis.",
            Severity::Information,
            Tier::Style,
        )?,
    ])
}

fn structural_rules() -> Result<Vec<PatternRule>> {
    Ok(vec![
        PatternRule::new(
            r"\(\s*\d+(?:\s+\d+)?\s*\)",
            "Red, green, blue color components were expected, less were found.",
            Severity::Warning,
            Tier::Structural,
        )?,
        PatternRule::new(
            r"\(\s*\d+(?:\s+\d+){3,}\s*\)",
            "Just red, green, blue color components were expected, more were found.",
            Severity::Warning,
            Tier::Structural,
        )?,
        PatternRule::new(
            r"\([^()a-zA-Z]*-\d+[^()a-zA-Z]*\)",
            "Just positive color components expected, negative were found.",
            Severity::Warning,
            Tier::Structural,
        )?,
        PatternRule::new(
            r"\(\s*\)",
            "Valid command expected.",
            Severity::Warning,
            Tier::Structural,
        )?,
        PatternRule::new(
            r"list\s*<\s*[^ ()]*\s*>",
            "T[] syntax is expected instead of list<T>.",
            Severity::Warning,
            Tier::Structural,
        )?,
    ])
}

const INTEGER_ARGUMENT: &str = r"\s+-?\d+";
const IDENTIFIER_ARGUMENT: &str = r"\s+[a-zA-Z][a-zA-Z0-9\-]*";

/// Flags a call with strictly fewer or strictly more integer arguments than
/// the command's arity
fn argument_count_rule(command: &Command) -> Result<PatternRule> {
    let arity = command.arity();
    let counts = if arity == 0 {
        format!("(?:{INTEGER_ARGUMENT})+")
    } else {
        format!(
            "(?:{INTEGER_ARGUMENT}){{0,{}}}|(?:{INTEGER_ARGUMENT}){{{},}}",
            arity - 1,
            arity + 1
        )
    };

    PatternRule::new(
        &format!(r"\(\s*{}(?:{})\s*\)", escape(&command.name), counts),
        format!("`{}` expected exactly {} arguments.", command.name, arity),
        Severity::Error,
        Tier::ArgumentCount,
    )
}

/// Flags a call mixing in at least one identifier where integers belong
fn argument_type_rule(command: &Command) -> Result<PatternRule> {
    PatternRule::new(
        &format!(
            r"\(\s*{}(?:{INTEGER_ARGUMENT})*{IDENTIFIER_ARGUMENT}(?:{INTEGER_ARGUMENT}|{IDENTIFIER_ARGUMENT})*\s*\)",
            escape(&command.name),
        ),
        format!("`{}` expected integer arguments.", command.name),
        Severity::Error,
        Tier::ArgumentType,
    )
}
