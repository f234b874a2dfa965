//! Syntax tree model and demo-language front end for treelint.
//!
//! The crate has two halves:
//!
//! - **Tree contract**: [`SyntaxNode`], [`SyntaxTree`], [`Span`], and the
//!   pre-order [`Preorder`] walker. Everything here is immutable and
//!   language-agnostic; any front end that produces these types can be
//!   analyzed.
//! - **Demo front end**: a [`tokenize`] / [`parse`] pipeline for a small
//!   method-and-try-statement language used to exercise the analyzer.
//!
//! # Example
//!
//! ```
//! use treelint_syntax::{parse, NodeKind};
//!
//! let tree = parse("method Greet() { say(\"hi\"); }")?;
//! let methods = tree
//!     .preorder()
//!     .filter(|n| n.kind() == NodeKind::MethodDeclaration)
//!     .count();
//! assert_eq!(methods, 1);
//! # Ok::<(), treelint_syntax::ParseError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod kind;
mod lexer;
mod node;
mod parser;
mod span;
mod walk;

pub use error::{LexError, ParseError, TreeError};
pub use kind::NodeKind;
pub use lexer::{tokenize, SpannedToken, Token};
pub use node::{SyntaxNode, SyntaxTree};
pub use parser::parse;
pub use span::{LineIndex, Span};
pub use walk::{walk, Preorder, Visitor};
