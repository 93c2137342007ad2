//! Assembles the generator invocation.
//!
//! Everything here is pure: the same inputs always give the same argument
//! list, which is what lets the host treat an unchanged target as a cache hit.

use std::path::{Path, PathBuf};

use crate::config::{GeneratorConfig, IgnoreFileRef};
use crate::model::{Command, ModuleKind, XcodeTarget};

/// Name of the generator executable the host provides.
pub const TOOL_NAME: &str = "rswift";

/// File name of the generated source.
pub const GENERATED_FILE_NAME: &str = "R.generated.swift";

/// Generators requested for IDE-project targets, which have no config lookup.
pub const XCODE_GENERATORS: &str = "image,string";

/// How the generated code locates its resource bundle at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleSource {
    /// By build-module identity.
    Module,
    /// By searching the filesystem.
    Finder,
}

impl BundleSource {
    pub fn for_kind(kind: ModuleKind) -> Self {
        match kind {
            ModuleKind::Generic => Self::Module,
            _ => Self::Finder,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Finder => "finder",
        }
    }
}

/// Where the generator learns about the input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    InputFiles,
    Xcodeproj,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InputFiles => "input-files",
            Self::Xcodeproj => "xcodeproj",
        }
    }
}

/// `<output_root>/<target_name>/R.generated.swift`
pub fn output_path(output_root: &Path, target_name: &str) -> PathBuf {
    output_root.join(target_name).join(GENERATED_FILE_NAME)
}

/// `<output_root>/<display_name>/Resources/R.generated.swift`
pub fn xcode_output_path(output_root: &Path, display_name: &str) -> PathBuf {
    output_root
        .join(display_name)
        .join("Resources")
        .join(GENERATED_FILE_NAME)
}

/// Inputs for a generic module-build invocation.
#[derive(Debug, Clone, Copy)]
pub struct GenerateArgs<'a> {
    pub target_name: &'a str,
    pub kind: ModuleKind,
    pub output_root: &'a Path,
    /// Discovered input files, in discovery order.
    pub files: &'a [PathBuf],
    pub config: Option<&'a GeneratorConfig>,
    pub ignore: Option<&'a IgnoreFileRef>,
}

impl GenerateArgs<'_> {
    pub fn output_path(&self) -> PathBuf {
        output_path(self.output_root, self.target_name)
    }

    pub fn bundle_source(&self) -> BundleSource {
        BundleSource::for_kind(self.kind)
    }

    /// The argument list, in its fixed order.
    pub fn arguments(&self) -> Vec<String> {
        let mut args = vec![
            "generate".to_string(),
            self.output_path().display().to_string(),
            "--input-type".to_string(),
            InputType::InputFiles.as_str().to_string(),
            "--bundle-source".to_string(),
            self.bundle_source().as_str().to_string(),
        ];

        for file in self.files {
            args.push("--input-files".to_string());
            args.push(file.display().to_string());
        }

        // An empty list leaves the tool's defaults in charge.
        if let Some(config) = self.config.filter(|c| !c.generators.is_empty()) {
            args.push("--generators".to_string());
            args.push(config.generators_arg());
        }

        if let Some(ignore) = self.ignore {
            args.push("--rswiftignore".to_string());
            args.push(ignore.path().display().to_string());
        }

        args
    }
}

/// Build the generic module-build command.
pub fn build(executable: &Path, args: &GenerateArgs<'_>) -> Command {
    Command {
        display_name: format!(
            "R.swift generate resources for {} module {}",
            args.kind, args.target_name
        ),
        executable: executable.to_path_buf(),
        arguments: args.arguments(),
        output_files: vec![args.output_path()],
    }
}

/// Build the IDE-project command. Takes no file list and no config.
pub fn build_xcode(executable: &Path, output_root: &Path, target: &XcodeTarget) -> Command {
    let output = xcode_output_path(output_root, &target.display_name);

    let description = match &target.product {
        Some(product) => format!("{} {}", product.kind, target.display_name),
        None => target.display_name.clone(),
    };

    Command {
        display_name: format!("R.swift generate resources for {description}"),
        executable: executable.to_path_buf(),
        arguments: vec![
            "generate".to_string(),
            output.display().to_string(),
            "--target".to_string(),
            target.display_name.clone(),
            "--input-type".to_string(),
            InputType::Xcodeproj.as_str().to_string(),
            "--bundle-source".to_string(),
            BundleSource::Finder.as_str().to_string(),
            "--generators".to_string(),
            XCODE_GENERATORS.to_string(),
        ],
        output_files: vec![output],
    }
}
