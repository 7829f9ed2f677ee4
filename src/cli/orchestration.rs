//! Main workflow orchestration logic
//!
//! Runs the two file updates in a fixed order and collects their results
//! for reporting. Kept apart from main.rs so the workflow can be driven
//! programmatically against any project root.

use std::fmt;

use crate::config::Config;
use crate::error::Result;
use crate::patcher::UpdateResult;
use crate::target::{update_target, PatchTarget};

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Version change in the component manifest
    pub control_manifest: UpdateResult,

    /// Version change in the solution descriptor
    pub solution: UpdateResult,
}

impl fmt::Display for WorkflowResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ControlManifest version {} -> {} | Solution version {} -> {}",
            self.control_manifest.old,
            self.control_manifest.new,
            self.solution.old,
            self.solution.new
        )
    }
}

/// Bump both target files.
///
/// The manifest is updated first. If it fails the solution is never
/// touched; if the solution fails the manifest write stays in place.
pub fn run_bump_workflow(config: &Config) -> Result<WorkflowResult> {
    let control_manifest = update_target(&PatchTarget::control_manifest(&config.control_manifest))?;
    let solution = update_target(&PatchTarget::solution(&config.solution))?;

    Ok(WorkflowResult {
        control_manifest,
        solution,
    })
}
