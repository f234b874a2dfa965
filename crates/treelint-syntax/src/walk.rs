//! Depth-first pre-order traversal.

use crate::node::{SyntaxNode, SyntaxTree};

/// Pre-order iterator over a subtree: each node is yielded before its
/// children, siblings in source order.
///
/// The iterator descends lazily, so [`skip_subtree`](Preorder::skip_subtree)
/// can cancel the descent into the most recently yielded node. Rules use
/// this to stop a scan at a nested scope boundary.
#[derive(Debug)]
pub struct Preorder<'a> {
    stack: Vec<&'a SyntaxNode>,
    pending: Option<&'a SyntaxNode>,
}

impl<'a> Preorder<'a> {
    pub(crate) fn new(root: &'a SyntaxNode) -> Self {
        Self {
            stack: vec![root],
            pending: None,
        }
    }

    /// Skips the children of the node most recently returned by `next`.
    ///
    /// Has no effect before the first `next` call or after the iterator
    /// is exhausted.
    pub fn skip_subtree(&mut self) {
        self.pending = None;
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(parent) = self.pending.take() {
            for child in parent.children().iter().rev() {
                self.stack.push(child);
            }
        }
        let node = self.stack.pop()?;
        self.pending = Some(node);
        Some(node)
    }
}

/// Callback interface for [`walk`].
pub trait Visitor {
    /// Called once per node, in pre-order.
    fn visit_node(&mut self, node: &SyntaxNode);
}

/// Invokes `visitor` on every node of `tree` in pre-order.
pub fn walk<V: Visitor>(tree: &SyntaxTree, visitor: &mut V) {
    for node in tree.preorder() {
        visitor.visit_node(node);
    }
}
