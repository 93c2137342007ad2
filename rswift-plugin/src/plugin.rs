//! Entry points the host calls once per target per build.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::command::{self, GenerateArgs, TOOL_NAME};
use crate::config;
use crate::inspect;
use crate::model::{Command, HostTarget, Target, XcodeTarget};

/// What the host provides to an invocation: a private work directory and a
/// way to find tools.
#[derive(Debug, Clone)]
pub struct PluginContext {
    work_directory: PathBuf,
    tools: HashMap<String, PathBuf>,
    /// `PATH`-style list searched instead of the process `PATH`.
    search_path: Option<OsString>,
}

impl PluginContext {
    pub fn new(work_directory: impl Into<PathBuf>) -> Self {
        Self {
            work_directory: work_directory.into(),
            tools: HashMap::new(),
            search_path: None,
        }
    }

    /// Pin `name` to a specific executable instead of searching `PATH`.
    pub fn with_tool(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.tools.insert(name.into(), path.into());
        self
    }

    /// Look tools up in `paths` (same syntax as `PATH`) instead of the
    /// process environment.
    pub fn with_search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.search_path = Some(paths.into());
        self
    }

    pub fn work_directory(&self) -> &Path {
        &self.work_directory
    }

    /// Resolve a tool's executable path.
    pub fn tool(&self, name: &str) -> Result<PathBuf> {
        if let Some(path) = self.tools.get(name) {
            return Ok(path.clone());
        }
        match &self.search_path {
            Some(paths) => which::which_in(name, Some(paths), &self.work_directory)
                .with_context(|| format!("tool '{name}' not found in {}", paths.to_string_lossy())),
            None => which::which(name).with_context(|| format!("tool '{name}' not found on PATH")),
        }
    }
}

/// Generic module build: one command per source-module target, none otherwise.
pub fn create_build_commands(context: &PluginContext, target: &HostTarget) -> Result<Vec<Command>> {
    match target {
        HostTarget::SourceModule(target) => Ok(vec![source_module_command(context, target)?]),
        HostTarget::Binary { name } => {
            info!(target = %name, "not a source module, nothing to generate");
            Ok(Vec::new())
        }
    }
}

fn source_module_command(context: &PluginContext, target: &Target) -> Result<Command> {
    let output_root = context.work_directory();
    ensure_dir(&output_root.join(&target.name))?;

    let files = inspect::discover(target);
    let resolved = config::resolve(&target.directory);

    let args = GenerateArgs {
        target_name: &target.name,
        kind: target.kind,
        output_root,
        files: &files,
        config: resolved.config.as_ref(),
        ignore: resolved.ignore.as_ref(),
    };
    let command = command::build(&context.tool(TOOL_NAME)?, &args);

    info!(
        target = %target.name,
        inputs = files.len(),
        output = %args.output_path().display(),
        "synthesized generate command"
    );

    Ok(command)
}

/// IDE-project build. Skips file discovery and config lookup entirely.
pub fn create_xcode_build_commands(
    context: &PluginContext,
    target: &XcodeTarget,
) -> Result<Vec<Command>> {
    let output_root = context.work_directory();
    ensure_dir(
        &output_root
            .join(&target.display_name)
            .join("Resources"),
    )?;

    let command = command::build_xcode(&context.tool(TOOL_NAME)?, output_root, target);

    info!(
        target = %target.display_name,
        output = %command.output_files[0].display(),
        "synthesized xcodeproj generate command"
    );

    Ok(vec![command])
}

/// Create `path` and its parents. Succeeds if another target got there first.
fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("creating output directory {}", path.display()))
}
