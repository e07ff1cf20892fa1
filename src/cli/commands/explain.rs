//! Explain command implementation.
//!
//! The `resdir explain` command runs the probe chain fresh, without
//! consulting or populating the cache, and prints a step-by-step trace.

use std::sync::Arc;

use crate::cli::args::ExplainArgs;
use crate::cli::output::Output;
use crate::error::{ResdirError, Result};
use crate::resolver::{ProbeOutcome, ResourceDir};

use super::dispatcher::{Command, CommandResult};

/// The explain command implementation.
pub struct ExplainCommand {
    dir: Arc<ResourceDir>,
    args: ExplainArgs,
}

impl ExplainCommand {
    /// Create a new explain command.
    pub fn new(dir: Arc<ResourceDir>, args: ExplainArgs) -> Self {
        Self { dir, args }
    }
}

impl Command for ExplainCommand {
    async fn execute(&self, out: &Output) -> Result<CommandResult> {
        let run = self.dir.explain().await;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&run).map_err(|e| ResdirError::Other(e.into()))?;
            out.payload(&json);
            return Ok(CommandResult::success());
        }

        let theme = out.theme();
        for report in &run.trace {
            let line = match &report.outcome {
                ProbeOutcome::Matched { path } => {
                    theme.format_matched(&format!("{}: {}", report.step, path.display()))
                }
                ProbeOutcome::Fallback { path } => theme.format_fallback(&format!(
                    "{}: {} (does not exist)",
                    report.step,
                    path.display()
                )),
                ProbeOutcome::Missed { detail } => {
                    theme.format_missed(&format!("{}: {}", report.step, detail))
                }
                ProbeOutcome::Skipped { reason } => {
                    theme.format_skipped(&format!("{}: {}", report.step, reason))
                }
            };
            out.detail(&line);
        }
        out.payload(&run.resolution.path.display().to_string());

        Ok(CommandResult::success())
    }
}
