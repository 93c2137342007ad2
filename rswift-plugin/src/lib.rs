//! rswift-plugin — build-graph integration for the R.swift resource generator.
//!
//! Given a snapshot of a module target, synthesizes the single `rswift
//! generate` command the host build system should schedule, together with the
//! one output file it declares.
//!
//! # Quick start
//!
//! From a snapshot file on disk:
//!
//! ```no_run
//! use std::path::Path;
//! use rswift_plugin::{BuildContext, PluginContext};
//!
//! let context = PluginContext::new("/tmp/plugin-work");
//! let commands =
//!     rswift_plugin::run(BuildContext::Generic, Path::new("target.json"), &context).unwrap();
//! ```
//!
//! Or from an in-memory target:
//!
//! ```no_run
//! use rswift_plugin::{HostTarget, ModuleKind, PluginContext, Target};
//!
//! let target = HostTarget::SourceModule(Target {
//!     name: "App".into(),
//!     kind: ModuleKind::Generic,
//!     directory: "/proj/App".into(),
//!     files: Vec::new(),
//! });
//! let context = PluginContext::new("/tmp/plugin-work").with_tool("rswift", "/usr/local/bin/rswift");
//! let commands = rswift_plugin::create_build_commands(&context, &target).unwrap();
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

pub mod command;
pub mod config;
pub mod inspect;
pub mod model;
pub mod plugin;

pub use model::{
    Command, DeclaredFile, FileType, HostTarget, ModuleKind, Target, XcodeProduct, XcodeTarget,
};
pub use plugin::{PluginContext, create_build_commands, create_xcode_build_commands};

/// Which kind of host is asking for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildContext {
    /// A package build with per-file enumeration.
    Generic,
    /// An IDE-project build without a file listing.
    Xcode,
}

/// Load a target snapshot and synthesize its build commands.
///
/// `snapshot_path` is a `.json` or `.toml` file holding a [`HostTarget`] for
/// [`BuildContext::Generic`] or an [`XcodeTarget`] for [`BuildContext::Xcode`].
pub fn run(
    build_context: BuildContext,
    snapshot_path: &Path,
    context: &PluginContext,
) -> Result<Vec<Command>> {
    let commands = match build_context {
        BuildContext::Generic => {
            let target: HostTarget = model::load_snapshot(snapshot_path)
                .with_context(|| format!("loading target from {}", snapshot_path.display()))?;
            create_build_commands(context, &target)?
        }
        BuildContext::Xcode => {
            let target: XcodeTarget = model::load_snapshot(snapshot_path)
                .with_context(|| format!("loading target from {}", snapshot_path.display()))?;
            create_xcode_build_commands(context, &target)?
        }
    };

    info!(count = commands.len(), "synthesized build commands");

    Ok(commands)
}
