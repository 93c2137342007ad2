//! Picks the declared files that are generator inputs.

use std::path::PathBuf;

use tracing::debug;

use crate::model::Target;

/// Return the target's resource and unknown-typed files, in declaration order.
///
/// No sorting and no deduplication: the argument list must be reproducible
/// from the host's declaration order alone.
pub fn discover(target: &Target) -> Vec<PathBuf> {
    let files: Vec<PathBuf> = target
        .files
        .iter()
        .filter(|file| file.file_type.is_resource_input())
        .map(|file| file.path.clone())
        .collect();

    debug!(
        target = %target.name,
        declared = target.files.len(),
        inputs = files.len(),
        "discovered resource inputs"
    );

    files
}
