//! Host-side snapshot types and the command descriptor handed back to the host.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A target as handed over by the host build system.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostTarget {
    /// A module built from sources in a directory.
    SourceModule(Target),
    /// Anything without a source directory (prebuilt binaries and the like).
    Binary { name: String },
}

impl HostTarget {
    pub fn name(&self) -> &str {
        match self {
            Self::SourceModule(target) => &target.name,
            Self::Binary { name } => name,
        }
    }
}

/// A source-module target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Target {
    pub name: String,
    pub kind: ModuleKind,
    /// Directory holding the target's sources; scanned for generator config.
    pub directory: PathBuf,
    /// Files in the order the host declared them.
    #[serde(default)]
    pub files: Vec<DeclaredFile>,
}

/// Module kind as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Generic,
    Executable,
    Test,
    Snippet,
    Macro,
    #[serde(other)]
    Other,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Executable => "executable",
            Self::Test => "test",
            Self::Snippet => "snippet",
            Self::Macro => "macro",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file the host declared as part of a target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeclaredFile {
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub file_type: FileType,
}

impl DeclaredFile {
    pub fn new(path: impl Into<PathBuf>, file_type: FileType) -> Self {
        Self {
            path: path.into(),
            file_type,
        }
    }
}

/// Host-assigned build role of a declared file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Resource,
    Unknown,
    Source,
    #[serde(other)]
    Other,
}

impl FileType {
    /// Whether files of this type are fed to the generator.
    pub fn is_resource_input(&self) -> bool {
        matches!(self, Self::Resource | Self::Unknown)
    }
}

/// A target from an IDE project, where no file listing is available.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct XcodeTarget {
    pub display_name: String,
    #[serde(default)]
    pub product: Option<XcodeProduct>,
}

/// The product an IDE-project target builds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct XcodeProduct {
    /// Product kind as the host prints it (e.g. `application`).
    pub kind: String,
}

/// A single build command for the host to schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub display_name: String,
    pub executable: PathBuf,
    /// Command-line arguments. Paths are rendered with `Path::display`, so a
    /// path that is not valid UTF-8 has its invalid bytes replaced by
    /// U+FFFD and will not name the original file.
    pub arguments: Vec<String>,
    /// Files the command produces. The host keys its caching on these.
    pub output_files: Vec<PathBuf>,
}

/// Load a target snapshot from a `.json` or `.toml` file.
pub fn load_snapshot<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read snapshot {}: {}", path.display(), e))?;
    let snapshot = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("failed to parse snapshot {}: {}", path.display(), e))?,
        _ => serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("failed to parse snapshot {}: {}", path.display(), e))?,
    };
    Ok(snapshot)
}
