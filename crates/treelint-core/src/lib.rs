//! # treelint-core
//!
//! Core framework for rule-based analysis of syntax trees.
//!
//! This crate provides the foundational traits and types for building
//! tree analyzers. It includes:
//!
//! - [`Rule`] trait for kind-subscribed node checks
//! - [`RuleRegistry`] for owning rules and dispatching them over a tree
//! - [`Analyzer`] for orchestrating analysis runs
//! - [`Diagnostic`] for representing findings
//!
//! ## Example
//!
//! ```
//! use treelint_core::{Analyzer, Diagnostic, Rule, RuleContext, RuleError, Severity};
//! use treelint_syntax::{NodeKind, SyntaxNode};
//!
//! struct NoNestedMethods;
//!
//! impl Rule for NoNestedMethods {
//!     fn name(&self) -> &'static str {
//!         "no-nested-methods"
//!     }
//!     fn code(&self) -> &'static str {
//!         "EX002"
//!     }
//!     fn interested_kinds(&self) -> &'static [NodeKind] {
//!         &[NodeKind::MethodDeclaration]
//!     }
//!     fn check(
//!         &self,
//!         node: &SyntaxNode,
//!         ctx: &RuleContext<'_>,
//!     ) -> Result<Vec<Diagnostic>, RuleError> {
//!         let nested = node
//!             .descendants()
//!             .filter(|n| n.kind() == NodeKind::MethodDeclaration)
//!             .map(|n| {
//!                 Diagnostic::new(
//!                     self.code(),
//!                     self.name(),
//!                     Severity::Info,
//!                     ctx.location(n.span()),
//!                     "nested method declaration",
//!                 )
//!             })
//!             .collect();
//!         Ok(nested)
//!     }
//! }
//!
//! let analyzer = Analyzer::builder().rule(NoNestedMethods).build()?;
//! let result = analyzer.analyze_source("method A() { method B() { } }")?;
//! assert_eq!(result.diagnostics.len(), 1);
//! # Ok::<(), treelint_core::AnalyzerError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod registry;
mod rule;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::RuleContext;
pub use registry::{RegistryError, RuleRegistry, RULE_FAILURE_CODE, RULE_FAILURE_NAME};
pub use rule::{Rule, RuleBox, RuleError};
pub use types::{AnalysisResult, Diagnostic, Location, Severity};
