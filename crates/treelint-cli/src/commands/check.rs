//! Check command implementation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use treelint_core::{Analyzer, AnalyzerError, Config, Severity};
use treelint_rules::rules_from_config;
use walkdir::WalkDir;

use super::output::{self, FileReport};
use crate::OutputFormat;

/// Config file names looked up next to the analyzed path, in order.
const CONFIG_CANDIDATES: &[&str] = &["treelint.toml", ".treelint.toml"];

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    ext: Option<String>,
    fail_on: Option<Severity>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(path, config_path)?;

    let extension = ext.unwrap_or_else(|| config.analyzer.extension.clone());
    let fail_on = fail_on.or(config.fail_on).unwrap_or(Severity::Error);

    let mut excludes = config.analyzer.exclude.clone();
    excludes.extend(exclude);

    let mut rules = rules_from_config(&config);
    if let Some(filter) = rules_filter {
        let requested: Vec<&str> = filter.split(',').map(str::trim).collect();
        for name in &requested {
            if !rules.iter().any(|r| r.name() == *name || r.code() == *name) {
                tracing::warn!("Unknown rule: {}", name);
            }
        }
        rules.retain(|r| requested.contains(&r.name()) || requested.contains(&r.code()));
    }

    let analyzer = Analyzer::builder()
        .rules(rules)
        .config(config)
        .build()
        .context("Failed to build analyzer")?;

    let files = discover_files(path, &extension, &excludes)?;

    tracing::info!(
        "Analyzing {} file(s) with {} rule(s)",
        files.len(),
        analyzer.rule_count()
    );

    let mut reports = Vec::new();
    let mut parse_failures = 0usize;
    for file in &files {
        let source = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        match analyzer.analyze_source(&source) {
            Ok(result) => reports.push(FileReport {
                path: file.clone(),
                result,
            }),
            Err(AnalyzerError::Parse(err)) => {
                parse_failures += 1;
                output::print_parse_error(file, source, &err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    output::print(&reports, files.len(), format)?;

    // Unparseable input outranks any finding threshold.
    if parse_failures > 0 {
        std::process::exit(2);
    }
    if reports.iter().any(|r| r.result.has_diagnostics_at(fail_on)) {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads configuration from an explicit path, or searches next to the target.
fn load_config(path: &Path, explicit: Option<&Path>) -> Result<Config> {
    if let Some(p) = explicit {
        return Config::from_file(p)
            .with_context(|| format!("Failed to load config: {}", p.display()));
    }

    let base = if path.is_dir() {
        path
    } else {
        path.parent().unwrap_or_else(|| Path::new("."))
    };

    for name in CONFIG_CANDIDATES {
        let candidate = base.join(name);
        if candidate.is_file() {
            tracing::debug!("Using config: {}", candidate.display());
            return Config::from_file(&candidate)
                .with_context(|| format!("Failed to load config: {}", candidate.display()));
        }
    }

    Ok(Config::default())
}

/// Collects source files under `path` in sorted order.
fn discover_files(path: &Path, extension: &str, excludes: &[String]) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        let display = entry.path().to_string_lossy();
        if excludes.iter().any(|pattern| display.contains(pattern.as_str())) {
            continue;
        }
        files.push(entry.path().to_path_buf());
    }
    Ok(files)
}
