//! Errors produced while lexing, parsing, and validating trees.

use thiserror::Error;

use crate::kind::NodeKind;
use crate::span::Span;

/// A character-level error found while tokenizing source text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A character with no place in the grammar.
    #[error("unexpected character '{ch}'")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Where it occurred.
        span: Span,
    },

    /// A string literal with no closing quote before end of input.
    #[error("unterminated string literal")]
    UnterminatedString {
        /// From the opening quote to end of input.
        span: Span,
    },

    /// Digits that do not form a valid number.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The raw text of the failed literal.
        text: String,
        /// Where it occurred.
        span: Span,
    },
}

impl LexError {
    /// The source range the error points at.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::InvalidNumber { span, .. } => *span,
        }
    }
}

/// A token-level error found while building the tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Tokenization failed before parsing could begin.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The parser needed one construct and found another.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        /// Description of what the grammar allows here.
        expected: String,
        /// Description of the token actually present.
        found: String,
        /// Location of the offending token.
        span: Span,
    },

    /// Input ended while a construct was still open.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what the grammar allows here.
        expected: String,
        /// Zero-length span at the end of input.
        span: Span,
    },
}

impl ParseError {
    /// The source range the error points at.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span(),
            ParseError::UnexpectedToken { span, .. } | ParseError::UnexpectedEof { span, .. } => {
                *span
            }
        }
    }
}

/// A structural invariant violation in a syntax tree.
///
/// Trees produced by the parser never trip these; hand-built trees can.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    /// The root span reaches past the end of the source text.
    #[error("root span {root_span} exceeds source length {source_len}")]
    RootOutOfBounds {
        /// Span claimed by the root node.
        root_span: Span,
        /// Actual length of the source text in bytes.
        source_len: usize,
    },

    /// A child's span is not fully inside its parent's span.
    #[error("{parent} at {parent_span} does not contain child {child} at {child_span}")]
    SpanNotContained {
        /// Kind of the parent node.
        parent: NodeKind,
        /// Span of the parent node.
        parent_span: Span,
        /// Kind of the escaping child.
        child: NodeKind,
        /// Span of the escaping child.
        child_span: Span,
    },

    /// Siblings out of source order or overlapping.
    #[error("children of {parent} out of order: {prev_span} before {next_span}")]
    UnorderedChildren {
        /// Kind of the parent node.
        parent: NodeKind,
        /// Span of the earlier sibling.
        prev_span: Span,
        /// Span of the sibling that should follow it.
        next_span: Span,
    },
}
