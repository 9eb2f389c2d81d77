//! Dispatch - hand the assembled plan to the external launcher.

use std::process::Command;

use anyhow::{Context, Result};

use crate::command::LaunchPlan;

/// Run the plan to completion and return the exit code to propagate.
///
/// No retries, no interpretation of the child's status beyond mapping it
/// to our own exit code. Termination signals reach the child through the
/// process group, not through logic here.
pub fn run(plan: &LaunchPlan) -> Result<i32> {
    tracing::info!("🚀 {}", plan.render());

    let mut command = Command::new(&plan.program);
    command.args(&plan.args);
    for (key, value) in &plan.env {
        command.env(key, value);
    }

    let status = command
        .status()
        .with_context(|| format!("Failed to start launcher: {}", plan.program))?;

    match status.code() {
        Some(code) => {
            if code != 0 {
                tracing::warn!("Launcher exited with code {}", code);
            }
            Ok(code)
        }
        // Killed by a signal (Unix): no code to forward.
        None => {
            tracing::warn!("Launcher terminated by signal: {}", status);
            Ok(1)
        }
    }
}
