//! The rule trait for defining checks.

use thiserror::Error;
use treelint_syntax::{NodeKind, SyntaxNode};

use crate::context::RuleContext;
use crate::types::{Diagnostic, Severity};

/// A check that inspects syntax nodes and reports diagnostics.
///
/// A rule declares which node kinds it cares about through
/// [`interested_kinds`](Rule::interested_kinds); the registry then calls
/// [`check`](Rule::check) once for every matching node in traversal
/// order. Rules hold no per-run state, so one instance can be reused
/// across any number of trees.
///
/// # Example
///
/// ```
/// use treelint_core::{Diagnostic, Rule, RuleContext, RuleError, Severity};
/// use treelint_syntax::{NodeKind, SyntaxNode};
///
/// pub struct NoEmptyBlocks;
///
/// impl Rule for NoEmptyBlocks {
///     fn name(&self) -> &'static str {
///         "no-empty-blocks"
///     }
///     fn code(&self) -> &'static str {
///         "EX001"
///     }
///     fn interested_kinds(&self) -> &'static [NodeKind] {
///         &[NodeKind::Block]
///     }
///
///     fn check(
///         &self,
///         node: &SyntaxNode,
///         ctx: &RuleContext<'_>,
///     ) -> Result<Vec<Diagnostic>, RuleError> {
///         if node.children().is_empty() {
///             return Ok(vec![Diagnostic::new(
///                 self.code(),
///                 self.name(),
///                 self.default_severity(),
///                 ctx.location(node.span()),
///                 "block is empty",
///             )]);
///         }
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "missing-catch-clause").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "TL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Returns the node kinds this rule wants to be called for.
    ///
    /// An empty slice means the rule is never invoked.
    fn interested_kinds(&self) -> &'static [NodeKind];

    /// Checks a single node and returns any diagnostics found.
    ///
    /// `node` is guaranteed to have one of the kinds returned by
    /// [`interested_kinds`](Rule::interested_kinds).
    ///
    /// # Errors
    ///
    /// A rule that cannot complete its check returns a [`RuleError`].
    /// The registry converts the error into a synthetic diagnostic and
    /// continues with the remaining rules, so one misbehaving rule never
    /// aborts the run.
    fn check(&self, node: &SyntaxNode, ctx: &RuleContext<'_>) -> Result<Vec<Diagnostic>, RuleError>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Error returned by a rule that could not complete a check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RuleError {
    message: String,
}

impl RuleError {
    /// Creates a rule error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }
        fn interested_kinds(&self) -> &'static [NodeKind] {
            &[NodeKind::Block]
        }

        fn check(
            &self,
            _node: &SyntaxNode,
            _ctx: &RuleContext<'_>,
        ) -> Result<Vec<Diagnostic>, RuleError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn rule_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Warning);
        assert_eq!(rule.interested_kinds(), &[NodeKind::Block]);
    }

    #[test]
    fn rule_error_carries_message() {
        let err = RuleError::new("lookup table missing");
        assert_eq!(err.message(), "lookup table missing");
        assert_eq!(err.to_string(), "lookup table missing");
    }
}
