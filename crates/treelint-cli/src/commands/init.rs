//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# treelint configuration
# See https://github.com/treelint/treelint for documentation

# Lowest severity that causes a failing exit: "info", "warning", or "error"
fail_on = "error"

[analyzer]
# File extension of sources to analyze
extension = "tl"

# Path substrings to exclude from analysis
exclude = [
    "vendor/",
    "generated/",
]

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.missing-catch-clause]
enabled = true
# severity = "error"  # Override default severity

[rules.empty-catch-clause]
enabled = true
# Treat a catch body holding only a comment as handled
allow_commented = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("treelint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created treelint.toml");
    println!("\nNext steps:");
    println!("  1. Edit treelint.toml to configure rules");
    println!("  2. Run: treelint check");

    Ok(())
}
