//! Node kind tags for the demo language.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural category of a [`SyntaxNode`](crate::SyntaxNode).
///
/// Rules subscribe to kinds, so the set is closed and cheap to compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Root of every parsed file; children are top-level method declarations.
    CompilationUnit,
    /// `method name(params) { ... }`, at top level or nested in a block.
    MethodDeclaration,
    /// Parenthesized parameter list of a method declaration.
    ParameterList,
    /// A single `Type name` parameter.
    Parameter,
    /// Brace-delimited statement sequence.
    Block,
    /// `try { ... }` with its catch and finally clauses.
    TryStatement,
    /// `catch (Type name) { ... }` attached to a try statement.
    CatchClause,
    /// `finally { ... }` attached to a try statement.
    FinallyClause,
    /// An expression used in statement position, including the semicolon.
    ExpressionStatement,
    /// `callee(args)`.
    CallExpression,
    /// Parenthesized argument list of a call expression.
    ArgumentList,
    /// A bare name.
    Identifier,
    /// A numeric literal.
    NumberLiteral,
    /// A double-quoted string literal.
    StringLiteral,
}

impl NodeKind {
    /// The kind's name as it appears in the grammar, used in error
    /// messages and debug output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::CompilationUnit => "CompilationUnit",
            NodeKind::MethodDeclaration => "MethodDeclaration",
            NodeKind::ParameterList => "ParameterList",
            NodeKind::Parameter => "Parameter",
            NodeKind::Block => "Block",
            NodeKind::TryStatement => "TryStatement",
            NodeKind::CatchClause => "CatchClause",
            NodeKind::FinallyClause => "FinallyClause",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::ArgumentList => "ArgumentList",
            NodeKind::Identifier => "Identifier",
            NodeKind::NumberLiteral => "NumberLiteral",
            NodeKind::StringLiteral => "StringLiteral",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
