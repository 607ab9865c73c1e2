use turtle_lsp_core::{
    classify, complete, Catalog, CompletionKind, DiagnosticEngine, IdentifierRole, Severity, Tier,
};

fn engine() -> DiagnosticEngine {
    DiagnosticEngine::new(Catalog::turtle()).unwrap()
}

#[test]
fn test_count_and_type_errors() {
    let diagnostics = engine().diagnose("(move-forward 5)\n(move-forward)\n(turn-left ten)");

    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|d| d.line != 0));

    let missing = &diagnostics[0];
    assert_eq!(missing.line, 1);
    assert_eq!(missing.severity, Severity::Error);
    assert_eq!(missing.message, "`move-forward` expected exactly 1 arguments.");

    let wrong_type = &diagnostics[1];
    assert_eq!(wrong_type.line, 2);
    assert_eq!(wrong_type.severity, Severity::Error);
    assert_eq!(wrong_type.message, "`turn-left` expected integer arguments.");
}

#[test]
fn test_unquoted_configuration_hint() {
    let diagnostics = engine().diagnose("(define turtle-configuration (move-forward 5))");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Information);
    assert!(diagnostics[0].message.contains("single quote"));
}

#[test]
fn test_function_with_placeholders() {
    let catalog = Catalog::turtle();
    let text = "(define area (x y) (* x y))";

    let ids = classify(&catalog, text);
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].name, "area");
    assert_eq!(ids[0].role, IdentifierRole::Function);
    assert_eq!(ids[0].args, vec!["x", "y"]);

    let items = complete(&catalog, text);
    let area = items.iter().find(|c| c.label == "area").unwrap();
    assert_eq!(area.insert_text, "(area ${1:x} ${2:y})");
}

#[test]
fn test_variable_bound_to_a_call() {
    let catalog = Catalog::turtle();
    let text = "(define pen (random-color))\n(define c (foobar))";

    let ids = classify(&catalog, text);
    assert!(ids.iter().all(|i| i.role == IdentifierRole::Variable), "{:?}", ids);

    let items = complete(&catalog, text);
    let pen = items.iter().find(|c| c.label == "pen").unwrap();
    assert_eq!(pen.kind, CompletionKind::Variable);
    assert_eq!(pen.insert_text, "pen");

    let diagnostics = engine().diagnose(text);
    assert_eq!(diagnostics.len(), 1, "{:?}", diagnostics);
    assert_eq!(diagnostics[0].line, 1);
    assert_eq!(diagnostics[0].tier, Tier::UnknownIdentifier);
}

#[test]
fn test_color_form() {
    let catalog = Catalog::turtle();
    let ids = classify(&catalog, "(255 0 0)");
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].role, IdentifierRole::Color);

    let items = complete(&catalog, "(255 0 0)");
    assert!(items
        .iter()
        .any(|c| c.label == "(255 0 0)" && c.kind == CompletionKind::Color));

    assert!(engine().diagnose("(255 0 0)").is_empty());
}

#[test]
fn test_unknown_head_token() {
    let diagnostics = engine().diagnose("(foobar 1 2)");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(diagnostics[0].tier, Tier::UnknownIdentifier);
    assert!(diagnostics[0].message.starts_with("Unknown command or identifier"));
}

#[test]
fn test_catalog_precedence() {
    let catalog = Catalog::turtle();
    let text = "(define move-on (x y) (+ x y))\n(define (move-to-center) (up))";

    assert!(classify(&catalog, text).is_empty());

    let items = complete(&catalog, text);
    let user_defined = items.iter().filter(|c| c.detail.starts_with("user defined")).count();
    assert_eq!(user_defined, 0);
}

#[test]
fn test_every_command_accepts_its_exact_arity() {
    let catalog = Catalog::turtle();
    let engine = DiagnosticEngine::new(catalog.clone()).unwrap();

    for command in &catalog.commands {
        let args: Vec<String> = (0..command.arity()).map(|i| (i * 10 + 1).to_string()).collect();
        let line = if args.is_empty() {
            format!("({})", command.name)
        } else {
            format!("({} {})", command.name, args.join(" "))
        };

        let diagnostics = engine.diagnose(&line);
        assert!(diagnostics.is_empty(), "{} -> {:?}", line, diagnostics);
    }
}

#[test]
fn test_non_numeric_argument_is_a_type_error_for_every_command() {
    let catalog = Catalog::turtle();
    let engine = DiagnosticEngine::new(catalog.clone()).unwrap();

    for command in catalog.commands.iter().filter(|c| c.arity() > 0) {
        for replaced in 0..command.arity() {
            let args: Vec<String> = (0..command.arity())
                .map(|i| if i == replaced { "ten".to_string() } else { "5".to_string() })
                .collect();
            let line = format!("({} {})", command.name, args.join(" "));

            let diagnostics = engine.diagnose(&line);
            assert_eq!(diagnostics.len(), 1, "{}", line);
            assert_eq!(diagnostics[0].tier, Tier::ArgumentType, "{}", line);
            assert_eq!(
                diagnostics[0].message,
                format!("`{}` expected integer arguments.", command.name)
            );
        }
    }
}

#[test]
fn test_custom_catalog() {
    let json = r#"{
        "commands": [{ "name": "hop", "description": "Hop", "args": ["distance"] }],
        "keywords": [],
        "variables": []
    }"#;
    let catalog = Catalog::from_json_str(json).unwrap();
    let engine = DiagnosticEngine::new(catalog.clone()).unwrap();

    assert!(engine.diagnose("(hop 3)").is_empty());
    assert_eq!(engine.diagnose("(hop)")[0].message, "`hop` expected exactly 1 arguments.");
    assert_eq!(engine.diagnose("(move-forward 3)")[0].tier, Tier::UnknownIdentifier);

    let items = complete(&catalog, "");
    assert_eq!(items[0].label, "hop");
}

#[test]
fn test_realistic_script() {
    let script = "\
; @author - Jane
; @signature - square integer
(define (square side)
  (begin (move-forward side) (turn-left 90)))
(define turtle-theme '((255 255 255) (0 0 0)))
(define turtle-configuration '((square 40) (rgb 255 0 0)))
(move-on 10 -10)
";
    let diagnostics = engine().diagnose(script);
    assert!(
        diagnostics.iter().all(|d| d.tier == Tier::ArgumentType && d.line == 3),
        "{:?}",
        diagnostics
    );

    let items = complete(&Catalog::turtle(), script);
    let square = items.iter().find(|c| c.label == "square").unwrap();
    assert!(square.documentation.contains("*square integer*"));
    assert!(items.iter().any(|c| c.label == "10 -10" && c.kind == CompletionKind::Constant));
}
