//! # treelint-rules
//!
//! Built-in analysis rules for treelint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | TL001 | `missing-catch-clause` | Flags methods whose body contains no catch clause |
//! | TL002 | `empty-catch-clause` | Flags catch clauses whose block contains no statements |
//!
//! ## Usage
//!
//! ```
//! use treelint_core::Analyzer;
//! use treelint_rules::{EmptyCatchClause, MissingCatchClause};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MissingCatchClause::new())
//!     .rule(EmptyCatchClause::new())
//!     .build()?;
//!
//! let result = analyzer.analyze_source("method F() { try { a(); } finally { } }")?;
//! assert_eq!(result.diagnostics.len(), 1);
//! # Ok::<(), treelint_core::AnalyzerError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod empty_catch;
mod missing_catch;

pub use empty_catch::EmptyCatchClause;
pub use missing_catch::MissingCatchClause;

/// Re-export core types for convenience.
pub use treelint_core::{Rule, RuleBox, Severity};

use treelint_core::Config;

/// Returns every built-in rule with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(MissingCatchClause::new()),
        Box::new(EmptyCatchClause::new()),
    ]
}

/// Returns every built-in rule, constructed with its options from `config`.
///
/// Enablement and severity overrides are applied by the analyzer; this
/// only wires rule-specific options such as `allow_commented`.
#[must_use]
pub fn rules_from_config(config: &Config) -> Vec<RuleBox> {
    let empty_catch = config
        .rules
        .get(empty_catch::NAME)
        .map_or_else(EmptyCatchClause::new, EmptyCatchClause::from_config);
    vec![
        Box::new(MissingCatchClause::new()),
        Box::new(empty_catch),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_have_unique_names() {
        let rules = all_rules();
        let mut names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), rules.len());
    }

    #[test]
    fn rules_from_config_applies_options() {
        let config = Config::parse("[rules.empty-catch-clause]\nallow_commented = true").unwrap();
        let rules = rules_from_config(&config);
        assert_eq!(rules.len(), all_rules().len());
    }
}
