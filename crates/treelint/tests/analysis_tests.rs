//! Integration tests: built-in rules end-to-end via the facade.
//!
//! Exercises the full pipeline (parse → validate → registry dispatch →
//! diagnostics) on the behaviors the analyzer guarantees.

use treelint::rules::MissingCatchClause;
use treelint::{check_source, check_source_with_config, Analyzer, Config, Severity};

// ── missing-catch-clause behavior ──

#[test]
fn finally_only_try_yields_exactly_one_warning() {
    let result = check_source("method Foo() { try { bar(); } finally { } }").unwrap();

    assert_eq!(result.diagnostics.len(), 1);
    let d = &result.diagnostics[0];
    assert_eq!(d.code, "TL001");
    assert_eq!(d.rule, "missing-catch-clause");
    assert_eq!(d.severity, Severity::Warning);
    assert_eq!(d.message, "method may have an unhandled exception path");
    assert_eq!(d.location.line, 1);
    assert_eq!(d.location.column, 1);
}

#[test]
fn try_with_catch_yields_nothing_from_missing_catch() {
    let analyzer = Analyzer::builder()
        .rule(MissingCatchClause::new())
        .build()
        .unwrap();
    let result = analyzer
        .analyze_source("method Foo() { try { bar(); } catch (E e) { handle(e); } }")
        .unwrap();
    assert!(result.is_clean());
}

#[test]
fn empty_method_body_is_flagged() {
    let analyzer = Analyzer::builder()
        .rule(MissingCatchClause::new())
        .build()
        .unwrap();
    let result = analyzer.analyze_source("method Foo() { }").unwrap();
    assert_eq!(result.diagnostics.len(), 1);
}

#[test]
fn two_offending_methods_report_in_source_order() {
    let source = "\
method First() { try { a(); } finally { } }
method Second() { b(); }
";
    let analyzer = Analyzer::builder()
        .rule(MissingCatchClause::new())
        .build()
        .unwrap();
    let result = analyzer.analyze_source(source).unwrap();

    assert_eq!(result.diagnostics.len(), 2);
    assert_eq!(result.diagnostics[0].location.line, 1);
    assert_eq!(result.diagnostics[1].location.line, 2);
}

#[test]
fn nested_methods_are_judged_independently() {
    // B catches; A does not. A's scan must not be satisfied by B's catch.
    let source = "method A() { method B() { try { x(); } catch (E e) { log(e); } } }";
    let analyzer = Analyzer::builder()
        .rule(MissingCatchClause::new())
        .build()
        .unwrap();
    let result = analyzer.analyze_source(source).unwrap();

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].location.column, 1);
}

// ── combined rule runs ──

#[test]
fn all_rules_report_in_traversal_order() {
    // Foo's empty catch fires TL002; Bar fires TL001. Foo comes first in
    // the source, so its diagnostic comes first.
    let source = "\
method Foo() { try { a(); } catch (E e) { } }
method Bar() { b(); }
";
    let result = check_source(source).unwrap();
    let codes: Vec<&str> = result.diagnostics.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["TL002", "TL001"]);
}

#[test]
fn analysis_of_same_source_is_reproducible() {
    let source = "method A() { }\nmethod B() { try { x(); } catch (E e) { } }";
    let first = check_source(source).unwrap();
    let second = check_source(source).unwrap();
    assert_eq!(first.diagnostics, second.diagnostics);
}

// ── configuration interplay ──

#[test]
fn config_can_silence_one_rule_and_harden_another() {
    let config = Config::parse(
        "\
[rules.empty-catch-clause]
enabled = false

[rules.missing-catch-clause]
severity = \"error\"
",
    )
    .unwrap();

    let source = "\
method Foo() { try { a(); } catch (E e) { } }
method Bar() { b(); }
";
    let result = check_source_with_config(source, &config).unwrap();

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, "TL001");
    assert_eq!(result.diagnostics[0].severity, Severity::Error);
    assert!(result.has_errors());
}

#[test]
fn parse_failure_reports_no_diagnostics() {
    let err = check_source("method Foo( {").unwrap_err();
    assert!(matches!(err, treelint::AnalyzerError::Parse(_)));
}
