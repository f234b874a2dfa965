//! Rule flagging methods with no catch clause anywhere in their body.
//!
//! # Rationale
//!
//! A method whose body never catches an exception lets every failure
//! propagate to the caller. That can be intentional, so the finding is a
//! warning rather than an error, but it deserves a look: a `try` with
//! only a `finally` still leaks the exception, which is easy to miss.
//!
//! # Scope
//!
//! Methods are judged independently. A catch clause inside a nested
//! method declaration belongs to that method and does not count for the
//! enclosing one.

use treelint_core::{Diagnostic, Rule, RuleContext, RuleError, Severity};
use treelint_syntax::{NodeKind, SyntaxNode};

/// Rule code for missing-catch-clause.
pub const CODE: &str = "TL001";

/// Rule name for missing-catch-clause.
pub const NAME: &str = "missing-catch-clause";

/// Flags methods whose body contains no catch clause.
#[derive(Debug, Clone)]
pub struct MissingCatchClause {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MissingCatchClause {
    fn default() -> Self {
        Self::new()
    }
}

impl MissingCatchClause {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for MissingCatchClause {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Flags methods whose body contains no catch clause"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn interested_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::MethodDeclaration]
    }

    fn check(
        &self,
        node: &SyntaxNode,
        ctx: &RuleContext<'_>,
    ) -> Result<Vec<Diagnostic>, RuleError> {
        let mut walker = node.preorder();
        // First yield is the method node itself; consuming it here keeps
        // the nested-method pruning below from skipping the whole scan.
        let _ = walker.next();

        while let Some(descendant) = walker.next() {
            match descendant.kind() {
                NodeKind::CatchClause => return Ok(Vec::new()),
                // A nested method handles its own exceptions.
                NodeKind::MethodDeclaration => walker.skip_subtree(),
                _ => {}
            }
        }

        Ok(vec![Diagnostic::new(
            CODE,
            NAME,
            self.severity,
            ctx.location(node.span()),
            "method may have an unhandled exception path",
        )
        .with_suggestion("add a catch clause to a try statement in the method body")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treelint_syntax::parse;

    fn check_source(source: &str) -> Vec<Diagnostic> {
        let tree = parse(source).expect("Failed to parse");
        let ctx = RuleContext::new(&tree);
        let rule = MissingCatchClause::new();
        let mut diagnostics = Vec::new();
        for node in tree.preorder() {
            if rule.interested_kinds().contains(&node.kind()) {
                diagnostics.extend(rule.check(node, &ctx).expect("rule failed"));
            }
        }
        diagnostics
    }

    #[test]
    fn method_with_catch_is_clean() {
        let diagnostics = check_source("method Foo() { try { bar(); } catch (E e) { } }");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn finally_only_try_still_fires() {
        let diagnostics = check_source("method Foo() { try { bar(); } finally { } }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, CODE);
        assert_eq!(
            diagnostics[0].message,
            "method may have an unhandled exception path"
        );
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn empty_body_fires() {
        let diagnostics = check_source("method Foo() { }");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn method_without_try_fires() {
        let diagnostics = check_source("method Foo() { bar(); baz(); }");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn catch_in_nested_method_does_not_count_for_outer() {
        let diagnostics = check_source(
            "method A() { method B() { try { x(); } catch (E e) { } } }",
        );
        // Only A fires: B's catch belongs to B.
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn only_the_offending_method_is_flagged() {
        let diagnostics =
            check_source("method Foo() { a(); }\nmethod Bar() { try { b(); } catch (E e) { } }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.line, 1);
    }

    #[test]
    fn outer_catch_does_not_excuse_nested_method() {
        let diagnostics = check_source(
            "method A() { try { run(); } catch (E e) { } method B() { x(); } }",
        );
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn catch_deep_in_nested_blocks_counts() {
        let diagnostics =
            check_source("method Foo() { { { try { bar(); } catch (E e) { } } } }");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn diagnostic_points_at_method_start() {
        let diagnostics = check_source("method Foo() { }\nmethod Bar() { }");
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].location.line, 1);
        assert_eq!(diagnostics[1].location.line, 2);
        assert_eq!(diagnostics[1].location.column, 1);
    }
}
