//! Check command implementation.
//!
//! The `unknown-sdk check` command runs a descriptor's version predicate
//! over candidate version strings, the way a resolver filters discovered
//! installations. Exits 0 if any candidate is accepted, 1 if none are, and 2
//! if the descriptor file or the named descriptor is unusable.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::cli::args::CheckArgs;
use crate::config::load_config_file;
use crate::error::{Result, SdkError};
use crate::ui::theme::SdkTheme;

use super::dispatcher::{config_failure, Command, CommandResult};

/// Outcome for a single candidate version.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateResult {
    /// Version string as given
    pub version: String,
    /// Whether the predicate accepted it
    pub accepted: bool,
}

/// JSON report for `check --json`.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    descriptor: &'a str,
    tool_type: &'a str,
    declared_name: Option<&'a str>,
    version: &'a str,
    matched: bool,
    candidates: &'a [CandidateResult],
}

/// The check command implementation.
pub struct CheckCommand {
    config_path: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config_path: &Path, args: CheckArgs) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let theme = SdkTheme::new();
        let sdk = match load_config_file(&self.config_path)
            .and_then(|config| config.descriptor(&self.args.descriptor))
        {
            Ok(sdk) => sdk,
            Err(e) => return config_failure(e, out),
        };

        debug!(
            "Checking {} candidate(s) against '{}' ({})",
            self.args.versions.len(),
            self.args.descriptor,
            sdk.tool_type()
        );

        let results: Vec<CandidateResult> = self
            .args
            .versions
            .iter()
            .map(|version| CandidateResult {
                version: version.clone(),
                accepted: sdk.accepts_version(version),
            })
            .collect();
        let matched = results.iter().any(|r| r.accepted);

        if self.args.json {
            let report = CheckReport {
                descriptor: &self.args.descriptor,
                tool_type: sdk.tool_type().name(),
                declared_name: sdk.declared_name(),
                version: sdk.version_predicate().description(),
                matched,
                candidates: &results,
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| SdkError::Other(e.into()))?;
            writeln!(out, "{}", json)?;
        } else {
            writeln!(
                out,
                "  {} {}",
                theme.key.apply_to(&self.args.descriptor),
                theme.dim.apply_to(format!(
                    "({} {})",
                    sdk.tool_type(),
                    sdk.version_predicate()
                ))
            )?;
            for result in &results {
                if result.accepted {
                    writeln!(
                        out,
                        "    {} {}",
                        theme.success.apply_to("✓"),
                        theme.success.apply_to(&result.version)
                    )?;
                } else {
                    writeln!(
                        out,
                        "    {} {}",
                        theme.rejected.apply_to("✗"),
                        theme.rejected.apply_to(&result.version)
                    )?;
                }
            }
        }

        if matched {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
