//! Core types for diagnostics and analysis results.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use treelint_syntax::Span;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail analysis.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "unknown severity '{other}', expected info, warning, or error"
            )),
        }
    }
}

/// Source position of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte range of the offending node.
    pub span: Span,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(line: usize, column: usize, span: Span) -> Self {
        Self { line, column, span }
    }
}

/// A finding reported by a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule code (e.g., "TL001").
    pub code: String,
    /// Rule name (e.g., "missing-catch-clause").
    pub rule: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Where in the source the finding points.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to this diagnostic.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.location.line, self.location.column, self.severity, self.code, self.message
        )
    }
}

/// Result of analyzing one syntax tree.
///
/// Diagnostics are kept in emission order: tree traversal order first,
/// rule registration order for findings on the same node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// All diagnostics found.
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no diagnostics were reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Checks if any diagnostics meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_diagnostics_at(&self, severity: Severity) -> bool {
        self.diagnostics.iter().any(|d| d.severity >= severity)
    }

    /// Counts diagnostics by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let mut errors = 0;
        let mut warnings = 0;
        let mut infos = 0;
        for d in &self.diagnostics {
            match d.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
                Severity::Info => infos += 1,
            }
        }
        (errors, warnings, infos)
    }

    /// Adds diagnostics from another result.
    pub fn extend(&mut self, other: Self) {
        self.diagnostics.extend(other.diagnostics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_diagnostic(severity: Severity) -> Diagnostic {
        Diagnostic::new(
            "TL001",
            "missing-catch-clause",
            severity,
            Location::new(3, 1, Span::new(20, 60)),
            "method may have an unhandled exception path",
        )
    }

    #[test]
    fn severity_orders_info_below_error() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn severity_round_trips_through_from_str() {
        for s in [Severity::Info, Severity::Warning, Severity::Error] {
            assert_eq!(s.to_string().parse::<Severity>(), Ok(s));
        }
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn diagnostic_new_has_no_suggestion() {
        assert!(make_diagnostic(Severity::Warning).suggestion.is_none());
    }

    #[test]
    fn diagnostic_display_is_compact() {
        let d = make_diagnostic(Severity::Warning);
        assert_eq!(
            d.to_string(),
            "3:1: warning [TL001] method may have an unhandled exception path"
        );
    }

    #[test]
    fn diagnostic_serializes_without_null_suggestion() {
        let d = make_diagnostic(Severity::Warning);
        let json = serde_json::to_string(&d).unwrap();
        assert!(!json.contains("suggestion"));
        assert!(json.contains("\"severity\":\"warning\""));
    }

    #[test]
    fn has_diagnostics_at_respects_threshold() {
        let mut result = AnalysisResult::new();
        result.diagnostics.push(make_diagnostic(Severity::Warning));
        assert!(result.has_diagnostics_at(Severity::Warning));
        assert!(result.has_diagnostics_at(Severity::Info));
        assert!(!result.has_diagnostics_at(Severity::Error));
        assert!(!result.has_errors());
    }

    #[test]
    fn count_by_severity_tallies_each_level() {
        let mut result = AnalysisResult::new();
        result.diagnostics.push(make_diagnostic(Severity::Error));
        result.diagnostics.push(make_diagnostic(Severity::Warning));
        result.diagnostics.push(make_diagnostic(Severity::Warning));
        result.diagnostics.push(make_diagnostic(Severity::Info));
        assert_eq!(result.count_by_severity(), (1, 2, 1));
    }

    #[test]
    fn extend_appends_in_order() {
        let mut first = AnalysisResult::new();
        first.diagnostics.push(make_diagnostic(Severity::Warning));
        let mut second = AnalysisResult::new();
        second.diagnostics.push(make_diagnostic(Severity::Error));
        second.diagnostics.push(make_diagnostic(Severity::Info));

        let mut combined = AnalysisResult::new();
        combined.extend(first);
        combined.extend(second);

        assert_eq!(combined.count_by_severity(), (1, 1, 1));
        assert_eq!(combined.diagnostics[0].severity, Severity::Warning);
        assert_eq!(combined.diagnostics[2].severity, Severity::Info);
    }
}
