//! Context passed to rules during a run.

use treelint_syntax::{LineIndex, Span, SyntaxNode, SyntaxTree};

use crate::types::Location;

/// Read-only view of the tree under analysis, shared by all rules in a run.
///
/// The context owns the line index so every rule resolves positions
/// against the same precomputed table instead of rescanning the source.
#[derive(Debug)]
pub struct RuleContext<'a> {
    tree: &'a SyntaxTree,
    line_index: LineIndex,
}

impl<'a> RuleContext<'a> {
    /// Creates a context for `tree`, indexing its source for position lookups.
    #[must_use]
    pub fn new(tree: &'a SyntaxTree) -> Self {
        Self {
            tree,
            line_index: LineIndex::new(tree.source()),
        }
    }

    /// The tree being analyzed.
    #[must_use]
    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    /// The full source text behind the tree.
    #[must_use]
    pub fn source(&self) -> &'a str {
        self.tree.source()
    }

    /// The source text a node covers.
    #[must_use]
    pub fn node_text(&self, node: &SyntaxNode) -> &'a str {
        self.tree.text(node.span())
    }

    /// Resolves a span to a diagnostic location at its start offset.
    #[must_use]
    pub fn location(&self, span: Span) -> Location {
        let (line, column) = self.line_index.line_col(span.start);
        Location::new(line, column, span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treelint_syntax::parse;

    #[test]
    fn location_resolves_line_and_column() {
        let tree = parse("method A() { }\nmethod B() { }").unwrap();
        let ctx = RuleContext::new(&tree);
        let second = &tree.root().children()[1];
        let location = ctx.location(second.span());
        assert_eq!(location.line, 2);
        assert_eq!(location.column, 1);
        assert_eq!(location.span, second.span());
    }

    #[test]
    fn node_text_returns_covered_source() {
        let tree = parse("method Greet() { say(\"hi\"); }").unwrap();
        let ctx = RuleContext::new(&tree);
        let name = &tree.root().children()[0].children()[0];
        assert_eq!(ctx.node_text(name), "Greet");
    }
}
