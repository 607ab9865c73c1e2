use std::collections::HashSet;

use proptest::prelude::*;
use regex::Regex;
use turtle_lsp_core::pattern::{alternation, escape};
use turtle_lsp_core::{classify, complete, Catalog, DiagnosticEngine, Tier, TURTLE_CATALOG};

/// Lines built from the language's own vocabulary, so rules actually fire
fn script_line() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just(" ".to_string()),
        Just("define".to_string()),
        Just("move-forward".to_string()),
        Just("move-on".to_string()),
        Just("turn-left".to_string()),
        Just("rgb".to_string()),
        Just("'".to_string()),
        Just(";".to_string()),
        "-?[0-9]{1,3}",
        "[a-z]{1,6}",
    ];
    prop::collection::vec(token, 0..12).prop_map(|tokens| tokens.concat())
}

fn script() -> impl Strategy<Value = String> {
    prop::collection::vec(script_line(), 0..8).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn at_most_one_diagnostic_per_line(text in script()) {
        let engine = DiagnosticEngine::new(Catalog::turtle()).unwrap();
        let diagnostics = engine.diagnose(&text);

        let mut lines = HashSet::new();
        for d in &diagnostics {
            prop_assert!(lines.insert(d.line), "line {} reported twice", d.line);
            prop_assert!(d.start_column < d.end_column);
        }
    }

    #[test]
    fn classify_is_idempotent(text in script()) {
        let first = classify(&TURTLE_CATALOG, &text);
        let second = classify(&TURTLE_CATALOG, &text);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn classified_names_never_shadow_the_catalog(text in script()) {
        for identifier in classify(&TURTLE_CATALOG, &text) {
            prop_assert!(!TURTLE_CATALOG.contains_name(&identifier.name));
        }
    }

    #[test]
    fn completion_labels_are_unique(text in script()) {
        let items = complete(&TURTLE_CATALOG, &text);
        let mut labels = HashSet::new();
        for item in &items {
            prop_assert!(labels.insert(item.label.clone()), "duplicate {}", item.label);
        }
    }

    #[test]
    fn exact_arity_never_triggers_argument_rules(
        index in 0usize..28,
        values in prop::collection::vec(-999i32..999, 3),
    ) {
        let engine = DiagnosticEngine::new(Catalog::turtle()).unwrap();
        let command = &engine.catalog().commands[index];
        let args: Vec<String> = values[..command.arity()].iter().map(i32::to_string).collect();
        let line = if args.is_empty() {
            format!("({})", command.name)
        } else {
            format!("({} {})", command.name, args.join(" "))
        };

        for d in engine.diagnose(&line) {
            prop_assert!(d.tier != Tier::ArgumentCount && d.tier != Tier::ArgumentType, "{}", line);
        }
    }

    #[test]
    fn escaped_names_match_literally(name in "[ -~]{1,12}") {
        let re = Regex::new(&format!("^{}$", escape(&name))).unwrap();
        prop_assert!(re.is_match(&name));
    }

    #[test]
    fn alternation_compiles_for_any_names(names in prop::collection::vec("[ -~]{1,8}", 1..10)) {
        let alt = alternation(names.iter().map(String::as_str));
        let re = Regex::new(&format!("^(?:{})$", alt)).unwrap();
        for name in &names {
            prop_assert!(re.is_match(name));
        }
    }
}
