//! # treelint
//!
//! Rule-based static analysis over immutable syntax trees.
//!
//! This is the main facade crate that re-exports the tree model, the
//! analysis framework, and the built-in rules.
//!
//! ## Quick Start
//!
//! ```
//! let result = treelint::check_source("method Foo() { try { bar(); } finally { } }")?;
//!
//! assert_eq!(result.diagnostics.len(), 1);
//! assert_eq!(result.diagnostics[0].code, "TL001");
//! # Ok::<(), treelint::AnalyzerError>(())
//! ```
//!
//! ## Programmatic Usage
//!
//! Pick rules and configuration explicitly through the builder:
//!
//! ```
//! use treelint::rules::MissingCatchClause;
//! use treelint::{Analyzer, Severity};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MissingCatchClause::new().severity(Severity::Error))
//!     .build()?;
//!
//! let result = analyzer.analyze_source("method Foo() { }")?;
//! assert!(result.has_errors());
//! # Ok::<(), treelint::AnalyzerError>(())
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use treelint_core::*;

// Re-export the tree model and demo parser
pub use treelint_syntax::{parse, NodeKind, ParseError, Span, SyntaxNode, SyntaxTree};

/// Built-in rules.
pub mod rules {
    pub use treelint_rules::*;
}

/// Full syntax crate, for front ends that build trees directly.
pub mod syntax {
    pub use treelint_syntax::*;
}

mod runner;

pub use runner::{check_source, check_source_with_config, check_tree};
