//! Rule registry: owns the rules and dispatches them over a tree.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};
use treelint_syntax::{NodeKind, SyntaxTree};

use crate::context::RuleContext;
use crate::rule::RuleBox;
use crate::types::{Diagnostic, Severity};

/// Code attached to synthetic diagnostics reporting a failed rule.
pub const RULE_FAILURE_CODE: &str = "TL000";

/// Rule name attached to synthetic diagnostics reporting a failed rule.
pub const RULE_FAILURE_NAME: &str = "rule-failure";

/// Errors raised while assembling a rule set.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two rules were registered under the same name.
    #[error("duplicate rule '{0}': rule names must be unique")]
    DuplicateRule(String),
}

/// Holds the registered rules and runs them over syntax trees.
///
/// Registration is where uniqueness is enforced; dispatch is driven by a
/// kind-to-rules table built as rules are added, so a traversal touches
/// only the rules that subscribed to each node's kind.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<RuleBox>,
    by_kind: HashMap<NodeKind, Vec<usize>>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRule`] if a rule with the same
    /// name is already registered; the registry is left unchanged.
    pub fn register(&mut self, rule: RuleBox) -> Result<(), RegistryError> {
        if self.rules.iter().any(|r| r.name() == rule.name()) {
            return Err(RegistryError::DuplicateRule(rule.name().to_string()));
        }
        let index = self.rules.len();
        for &kind in rule.interested_kinds() {
            let entries = self.by_kind.entry(kind).or_default();
            // A rule listing a kind twice still runs once per node.
            if !entries.contains(&index) {
                entries.push(index);
            }
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every registered rule over `tree` and collects diagnostics.
    ///
    /// Nodes are visited in pre-order; rules subscribed to a node's kind
    /// fire in registration order. A rule returning an error is converted
    /// into a synthetic [`RULE_FAILURE_CODE`] diagnostic at that node and
    /// the run continues, so no finding from other rules is lost.
    #[must_use]
    pub fn run(&self, tree: &SyntaxTree) -> Vec<Diagnostic> {
        let ctx = RuleContext::new(tree);
        let mut diagnostics = Vec::new();

        for node in tree.preorder() {
            let Some(indices) = self.by_kind.get(&node.kind()) else {
                continue;
            };
            for &index in indices {
                let rule = &self.rules[index];
                match rule.check(node, &ctx) {
                    Ok(found) => diagnostics.extend(found),
                    Err(err) => {
                        warn!(
                            rule = rule.name(),
                            node = %node.kind(),
                            error = %err,
                            "rule failed, continuing"
                        );
                        diagnostics.push(Diagnostic::new(
                            RULE_FAILURE_CODE,
                            RULE_FAILURE_NAME,
                            Severity::Error,
                            ctx.location(node.span()),
                            format!("rule '{}' failed on {}: {err}", rule.name(), node.kind()),
                        ));
                    }
                }
            }
        }

        debug!(
            diagnostics = diagnostics.len(),
            rules = self.rules.len(),
            "registry run complete"
        );
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Rule, RuleError};
    use treelint_syntax::{parse, SyntaxNode};

    struct KindCollector {
        name: &'static str,
        kinds: &'static [NodeKind],
    }

    impl Rule for KindCollector {
        fn name(&self) -> &'static str {
            self.name
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn interested_kinds(&self) -> &'static [NodeKind] {
            self.kinds
        }

        fn check(
            &self,
            node: &SyntaxNode,
            ctx: &RuleContext<'_>,
        ) -> Result<Vec<Diagnostic>, RuleError> {
            Ok(vec![Diagnostic::new(
                self.code(),
                self.name(),
                Severity::Info,
                ctx.location(node.span()),
                format!("saw {}", node.kind()),
            )])
        }
    }

    struct AlwaysFails;

    impl Rule for AlwaysFails {
        fn name(&self) -> &'static str {
            "always-fails"
        }
        fn code(&self) -> &'static str {
            "TEST999"
        }
        fn interested_kinds(&self) -> &'static [NodeKind] {
            &[NodeKind::MethodDeclaration]
        }

        fn check(
            &self,
            _node: &SyntaxNode,
            _ctx: &RuleContext<'_>,
        ) -> Result<Vec<Diagnostic>, RuleError> {
            Err(RuleError::new("boom"))
        }
    }

    fn collector(name: &'static str, kinds: &'static [NodeKind]) -> RuleBox {
        Box::new(KindCollector { name, kinds })
    }

    #[test]
    fn duplicate_name_is_rejected_and_registry_unchanged() {
        let mut registry = RuleRegistry::new();
        registry
            .register(collector("same-name", &[NodeKind::Block]))
            .unwrap();
        let err = registry
            .register(collector("same-name", &[NodeKind::TryStatement]))
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateRule(name) if name == "same-name"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn rules_only_see_subscribed_kinds() {
        let mut registry = RuleRegistry::new();
        registry
            .register(collector("methods-only", &[NodeKind::MethodDeclaration]))
            .unwrap();

        let tree = parse("method A() { x(); }\nmethod B() { y(); }").unwrap();
        let diagnostics = registry.run(&tree);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics
            .iter()
            .all(|d| d.message == "saw MethodDeclaration"));
    }

    #[test]
    fn same_node_fires_rules_in_registration_order() {
        let mut registry = RuleRegistry::new();
        registry
            .register(collector("first", &[NodeKind::MethodDeclaration]))
            .unwrap();
        registry
            .register(collector("second", &[NodeKind::MethodDeclaration]))
            .unwrap();

        let tree = parse("method A() { }").unwrap();
        let diagnostics = registry.run(&tree);
        let rules: Vec<&str> = diagnostics.iter().map(|d| d.rule.as_str()).collect();
        assert_eq!(rules, vec!["first", "second"]);
    }

    #[test]
    fn diagnostics_follow_traversal_order() {
        let mut registry = RuleRegistry::new();
        registry
            .register(collector(
                "order-probe",
                &[NodeKind::MethodDeclaration, NodeKind::CallExpression],
            ))
            .unwrap();

        let tree = parse("method A() { ping(); }\nmethod B() { pong(); }").unwrap();
        let messages: Vec<String> = registry.run(&tree).into_iter().map(|d| d.message).collect();
        assert_eq!(
            messages,
            vec![
                "saw MethodDeclaration",
                "saw CallExpression",
                "saw MethodDeclaration",
                "saw CallExpression",
            ]
        );
    }

    #[test]
    fn failing_rule_becomes_synthetic_diagnostic() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(AlwaysFails)).unwrap();
        registry
            .register(collector("still-runs", &[NodeKind::MethodDeclaration]))
            .unwrap();

        let tree = parse("method A() { }").unwrap();
        let diagnostics = registry.run(&tree);
        assert_eq!(diagnostics.len(), 2);

        let failure = &diagnostics[0];
        assert_eq!(failure.code, RULE_FAILURE_CODE);
        assert_eq!(failure.rule, RULE_FAILURE_NAME);
        assert_eq!(failure.severity, Severity::Error);
        assert!(failure.message.contains("always-fails"));
        assert!(failure.message.contains("MethodDeclaration"));
        assert!(failure.message.contains("boom"));

        assert_eq!(diagnostics[1].rule, "still-runs");
    }

    #[test]
    fn empty_registry_reports_nothing() {
        let registry = RuleRegistry::new();
        let tree = parse("method A() { }").unwrap();
        assert!(registry.run(&tree).is_empty());
        assert!(registry.is_empty());
    }
}
