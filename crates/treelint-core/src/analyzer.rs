//! Analysis driver orchestrating rule execution over a tree.

use thiserror::Error;
use tracing::{debug, info};
use treelint_syntax::{parse, ParseError, SyntaxTree, TreeError};

use crate::config::Config;
use crate::registry::{RegistryError, RuleRegistry};
use crate::rule::{Rule, RuleBox};
use crate::types::AnalysisResult;

/// Errors that can occur while building or running an [`Analyzer`].
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Source text failed to parse.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The input tree violates a structural invariant.
    #[error("malformed tree: {0}")]
    MalformedTree(#[from] TreeError),

    /// The rule set could not be assembled.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple boxed rules to the analyzer.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer, registering every enabled rule.
    ///
    /// # Errors
    ///
    /// Returns an error if two rules share a name.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();
        let mut registry = RuleRegistry::new();
        for rule in self.rules {
            if !config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            registry.register(rule)?;
        }
        Ok(Analyzer { registry, config })
    }
}

/// The main analyzer that runs rules over syntax trees.
///
/// Analysis is a pure function of the tree and the registered rules:
/// the same input always yields the same diagnostics in the same order,
/// and nothing outside the returned [`AnalysisResult`] is touched.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    registry: RuleRegistry,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.registry.len()
    }

    /// Analyzes a syntax tree and returns all diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::MalformedTree`] if the tree fails
    /// structural validation; no rules are run in that case.
    pub fn analyze(&self, tree: &SyntaxTree) -> Result<AnalysisResult, AnalyzerError> {
        tree.validate()?;

        let mut diagnostics = self.registry.run(tree);
        for diagnostic in &mut diagnostics {
            if let Some(severity) = self.config.rule_severity(&diagnostic.rule) {
                diagnostic.severity = severity;
            }
        }

        info!(
            diagnostics = diagnostics.len(),
            rules = self.registry.len(),
            "analysis complete"
        );
        Ok(AnalysisResult { diagnostics })
    }

    /// Parses `source` and analyzes the resulting tree.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Parse`] if the source does not parse.
    pub fn analyze_source(&self, source: &str) -> Result<AnalysisResult, AnalyzerError> {
        let tree = parse(source)?;
        self.analyze(&tree)
    }
}
