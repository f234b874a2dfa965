//! Shared output formatting for analysis results.

use anyhow::Result;
use miette::{NamedSource, SourceSpan};
use serde::Serialize;
use std::path::{Path, PathBuf};
use treelint_core::{AnalysisResult, Severity};
use treelint_syntax::ParseError;

use crate::OutputFormat;

/// Analysis result for a single file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Path of the analyzed file.
    pub path: PathBuf,
    /// Diagnostics found in the file.
    #[serde(flatten)]
    pub result: AnalysisResult,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files_checked: usize,
    reports: &'a [FileReport],
}

/// Print analysis results in the specified format.
pub fn print(reports: &[FileReport], files_checked: usize, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(reports, files_checked),
        OutputFormat::Json => return print_json(reports, files_checked),
        OutputFormat::Compact => print_compact(reports),
    }
    Ok(())
}

fn print_text(reports: &[FileReport], files_checked: usize) {
    let mut combined = AnalysisResult::new();

    for report in reports {
        combined.extend(report.result.clone());

        for diagnostic in &report.result.diagnostics {
            let severity_indicator = match diagnostic.severity {
                Severity::Error => "\x1b[31merror\x1b[0m",
                Severity::Warning => "\x1b[33mwarning\x1b[0m",
                Severity::Info => "\x1b[34minfo\x1b[0m",
            };

            println!(
                "{} {} at {}:{}:{}",
                diagnostic.code,
                diagnostic.rule,
                report.path.display(),
                diagnostic.location.line,
                diagnostic.location.column,
            );
            println!("  {}: {}", severity_indicator, diagnostic.message);
            if let Some(suggestion) = &diagnostic.suggestion {
                println!("  = help: {suggestion}");
            }
            println!();
        }
    }

    let (errors, warnings, infos) = combined.count_by_severity();

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, files_checked
    );
}

fn print_json(reports: &[FileReport], files_checked: usize) -> Result<()> {
    let json = serde_json::to_string_pretty(&JsonReport {
        files_checked,
        reports,
    })?;
    println!("{json}");
    Ok(())
}

fn print_compact(reports: &[FileReport]) {
    for report in reports {
        for diagnostic in &report.result.diagnostics {
            println!(
                "{}:{}:{}: {} [{}] {}",
                report.path.display(),
                diagnostic.location.line,
                diagnostic.location.column,
                diagnostic.severity,
                diagnostic.code,
                diagnostic.message,
            );
        }
    }
}

/// A parse failure rendered against its source text.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
struct ParseReport {
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("syntax error")]
    span: SourceSpan,
}

/// Prints a parse failure to stderr with the offending source region.
pub fn print_parse_error(path: &Path, source: String, error: &ParseError) {
    let span = error.span();
    let report = ParseReport {
        message: error.to_string(),
        src: NamedSource::new(path.display().to_string(), source),
        span: SourceSpan::from((span.start, span.len())),
    };
    eprintln!("{:?}", miette::Report::new(report));
}
