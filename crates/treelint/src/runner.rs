//! One-call analysis entry points over the built-in rule set.

use treelint_core::{AnalysisResult, Analyzer, AnalyzerError, Config};
use treelint_rules::{all_rules, rules_from_config};
use treelint_syntax::SyntaxTree;

/// Analyzes `source` with every built-in rule at default settings.
///
/// # Errors
///
/// Returns an error if the source does not parse.
pub fn check_source(source: &str) -> Result<AnalysisResult, AnalyzerError> {
    let analyzer = Analyzer::builder().rules(all_rules()).build()?;
    analyzer.analyze_source(source)
}

/// Analyzes `source` with the built-in rules as configured by `config`.
///
/// Disabled rules are skipped, severity overrides are applied, and
/// rule-specific options are honored.
///
/// # Errors
///
/// Returns an error if the source does not parse.
pub fn check_source_with_config(
    source: &str,
    config: &Config,
) -> Result<AnalysisResult, AnalyzerError> {
    let analyzer = Analyzer::builder()
        .rules(rules_from_config(config))
        .config(config.clone())
        .build()?;
    analyzer.analyze_source(source)
}

/// Analyzes an existing tree with every built-in rule at default settings.
///
/// # Errors
///
/// Returns an error if the tree fails structural validation.
pub fn check_tree(tree: &SyntaxTree) -> Result<AnalysisResult, AnalyzerError> {
    let analyzer = Analyzer::builder().rules(all_rules()).build()?;
    analyzer.analyze(tree)
}
