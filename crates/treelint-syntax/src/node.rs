//! Immutable syntax nodes and trees.

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::kind::NodeKind;
use crate::span::Span;
use crate::walk::Preorder;

/// A node in a [`SyntaxTree`]: a kind tag, a source span, and an ordered
/// list of children.
///
/// Nodes are plain values with no parent pointers or interior mutability,
/// so a tree can be shared freely across rules. Positions are byte spans;
/// line/column resolution lives in [`LineIndex`](crate::LineIndex).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    kind: NodeKind,
    span: Span,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Creates a node with the given children.
    #[must_use]
    pub fn new(kind: NodeKind, span: Span, children: Vec<SyntaxNode>) -> Self {
        Self {
            kind,
            span,
            children,
        }
    }

    /// Creates a node with no children.
    #[must_use]
    pub fn leaf(kind: NodeKind, span: Span) -> Self {
        Self::new(kind, span, Vec::new())
    }

    /// The node's structural category.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The byte range of source text this node covers.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The node's children, in source order.
    #[must_use]
    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    /// First child with the given kind, if any.
    #[must_use]
    pub fn child_of_kind(&self, kind: NodeKind) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| c.kind() == kind)
    }

    /// Depth-first pre-order traversal of this node and everything below it.
    #[must_use]
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder::new(self)
    }

    /// Pre-order traversal of strictly the nodes below this one.
    pub fn descendants(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.preorder().skip(1)
    }
}

/// A parsed source file: the root node plus the text it was built from.
///
/// The pairing lets any consumer recover the text behind a span without
/// carrying the source separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxTree {
    root: SyntaxNode,
    source: String,
}

impl SyntaxTree {
    /// Pairs a root node with the source text it describes.
    #[must_use]
    pub fn new(root: SyntaxNode, source: impl Into<String>) -> Self {
        Self {
            root,
            source: source.into(),
        }
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// The full source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The source text covered by `span`, or `""` if the span does not
    /// fall on character boundaries inside the text.
    #[must_use]
    pub fn text(&self, span: Span) -> &str {
        self.source.get(span.start..span.end).unwrap_or("")
    }

    /// Pre-order traversal of the whole tree, starting at the root.
    #[must_use]
    pub fn preorder(&self) -> Preorder<'_> {
        self.root.preorder()
    }

    /// Checks the structural invariants every well-formed tree upholds:
    /// the root span stays within the source text, every node's span
    /// contains its children's spans, and siblings are ordered by position
    /// without overlapping.
    ///
    /// # Errors
    ///
    /// Returns the first [`TreeError`] encountered in pre-order.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.root.span().end > self.source.len() {
            return Err(TreeError::RootOutOfBounds {
                root_span: self.root.span(),
                source_len: self.source.len(),
            });
        }
        validate_node(&self.root)
    }
}

fn validate_node(node: &SyntaxNode) -> Result<(), TreeError> {
    let mut prev: Option<&SyntaxNode> = None;
    for child in node.children() {
        if !node.span().contains(child.span()) {
            return Err(TreeError::SpanNotContained {
                parent: node.kind(),
                parent_span: node.span(),
                child: child.kind(),
                child_span: child.span(),
            });
        }
        if let Some(prev) = prev {
            if prev.span().end > child.span().start {
                return Err(TreeError::UnorderedChildren {
                    parent: node.kind(),
                    prev_span: prev.span(),
                    next_span: child.span(),
                });
            }
        }
        prev = Some(child);
        validate_node(child)?;
    }
    Ok(())
}
