//! Rule flagging catch clauses that silently swallow the exception.
//!
//! # Rationale
//!
//! A catch clause with an empty block discards the exception without
//! logging, rethrowing, or compensating. Failures then disappear at
//! runtime with nothing to debug from.
//!
//! # Configuration
//!
//! - `allow_commented`: Treat a catch block that contains a comment as
//!   deliberate and skip it (default: false)

use treelint_core::{Diagnostic, Rule, RuleConfig, RuleContext, RuleError, Severity};
use treelint_syntax::{NodeKind, SyntaxNode};

/// Rule code for empty-catch-clause.
pub const CODE: &str = "TL002";

/// Rule name for empty-catch-clause.
pub const NAME: &str = "empty-catch-clause";

/// Flags catch clauses whose block contains no statements.
#[derive(Debug, Clone)]
pub struct EmptyCatchClause {
    /// Treat a commented-but-empty block as deliberate.
    pub allow_commented: bool,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for EmptyCatchClause {
    fn default() -> Self {
        Self::new()
    }
}

impl EmptyCatchClause {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_commented: false,
            severity: Severity::Warning,
        }
    }

    /// Sets whether a comment inside the block counts as handling.
    #[must_use]
    pub fn allow_commented(mut self, allow: bool) -> Self {
        self.allow_commented = allow;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Creates the rule from its per-rule configuration table.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        Self::new().allow_commented(config.get_bool("allow_commented", false))
    }
}

impl Rule for EmptyCatchClause {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Flags catch clauses whose block contains no statements"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn interested_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::CatchClause]
    }

    fn check(
        &self,
        node: &SyntaxNode,
        ctx: &RuleContext<'_>,
    ) -> Result<Vec<Diagnostic>, RuleError> {
        let Some(body) = node.child_of_kind(NodeKind::Block) else {
            return Err(RuleError::new("catch clause has no block"));
        };
        if !body.children().is_empty() {
            return Ok(Vec::new());
        }
        if self.allow_commented && ctx.node_text(body).contains("//") {
            return Ok(Vec::new());
        }

        Ok(vec![Diagnostic::new(
            CODE,
            NAME,
            self.severity,
            ctx.location(node.span()),
            "empty catch clause swallows the exception",
        )
        .with_suggestion("log the exception or rethrow it")])
    }
}
