//! Optional per-target generator configuration (`rswift.json`) and ignore file
//! (`.rswiftignore`).
//!
//! Both are advisory. Anything that goes wrong while reading the config file
//! degrades to "no config" so a broken file never blocks the module build.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Substring that selects the config file among the directory entries.
pub const CONFIG_FILE_MARKER: &str = "rswift.json";

/// Substring that selects the ignore file among the directory entries.
pub const IGNORE_FILE_MARKER: &str = ".rswiftignore";

/// Category of accessor code the generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Generator {
    Image,
    String,
    Color,
    File,
    Font,
    Nib,
    Segue,
    Storyboard,
    ReuseIdentifier,
    Entitlements,
    Info,
    Id,
}

impl Generator {
    /// Identifier as the generator's command line spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::String => "string",
            Self::Color => "color",
            Self::File => "file",
            Self::Font => "font",
            Self::Nib => "nib",
            Self::Segue => "segue",
            Self::Storyboard => "storyboard",
            Self::ReuseIdentifier => "reuseIdentifier",
            Self::Entitlements => "entitlements",
            Self::Info => "info",
            Self::Id => "id",
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contents of an `rswift.json` file. Unknown keys are ignored; an unknown
/// generator name rejects the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    pub generators: Vec<Generator>,
}

impl GeneratorConfig {
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Comma-joined generator list, in file order, duplicates kept.
    pub fn generators_arg(&self) -> String {
        self.generators
            .iter()
            .map(Generator::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Path of an ignore file. Passed through to the generator, never opened here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreFileRef(PathBuf);

impl IgnoreFileRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// What was found in a target directory. Either half may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub config: Option<GeneratorConfig>,
    pub ignore: Option<IgnoreFileRef>,
}

/// Scan `directory` (non-recursively) for the config and ignore files.
///
/// Entries are matched by substring on the file name, first match wins after
/// sorting the names. The two lookups are independent of each other. This
/// never fails: an unreadable directory resolves to nothing.
pub fn resolve(directory: &Path) -> ResolvedConfig {
    let names = match list_entries(directory) {
        Ok(names) => names,
        Err(e) => {
            debug!(
                directory = %directory.display(),
                error = %e,
                "cannot list target directory, skipping config lookup"
            );
            return ResolvedConfig::default();
        }
    };

    let config = names
        .iter()
        .find(|name| name.contains(CONFIG_FILE_MARKER))
        .and_then(|name| load_generator_config(&directory.join(name)));

    let ignore = names
        .iter()
        .find(|name| name.contains(IGNORE_FILE_MARKER))
        .map(|name| IgnoreFileRef::new(directory.join(name)));

    ResolvedConfig { config, ignore }
}

/// Read and decode a config file, or `None` if that fails for any reason.
pub fn load_generator_config(path: &Path) -> Option<GeneratorConfig> {
    match read_generator_config(path) {
        Ok(config) => {
            debug!(path = %path.display(), generators = %config.generators_arg(), "loaded generator config");
            Some(config)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring generator config");
            None
        }
    }
}

fn read_generator_config(path: &Path) -> anyhow::Result<GeneratorConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config file {}: {}", path.display(), e))?;
    let config = GeneratorConfig::from_json(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse config file {}: {}", path.display(), e))?;
    Ok(config)
}

fn list_entries(directory: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        // Names that are not valid UTF-8 cannot match either marker.
        if let Some(name) = entry?.file_name().to_str() {
            names.push(name.to_owned());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_keeps_order_and_duplicates() {
        let config =
            GeneratorConfig::from_json(r#"{"generators": ["font", "color", "font"]}"#).unwrap();
        assert_eq!(
            config.generators,
            vec![Generator::Font, Generator::Color, Generator::Font]
        );
        assert_eq!(config.generators_arg(), "font,color,font");
    }

    #[test]
    fn test_decode_every_identifier() {
        let config = GeneratorConfig::from_json(
            r#"{"generators": ["image", "string", "color", "file", "font", "nib", "segue",
                "storyboard", "reuseIdentifier", "entitlements", "info", "id"]}"#,
        )
        .unwrap();
        assert_eq!(
            config.generators_arg(),
            "image,string,color,file,font,nib,segue,storyboard,reuseIdentifier,entitlements,info,id"
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config =
            GeneratorConfig::from_json(r#"{"generators": ["id"], "accessLevel": "public"}"#)
                .unwrap();
        assert_eq!(config.generators, vec![Generator::Id]);
    }

    #[test]
    fn test_unknown_generator_rejects_file() {
        assert!(GeneratorConfig::from_json(r#"{"generators": ["image", "sound"]}"#).is_err());
    }

    #[test]
    fn test_missing_generators_rejects_file() {
        assert!(GeneratorConfig::from_json(r#"{}"#).is_err());
        assert!(GeneratorConfig::from_json(r#"{"generators": "image"}"#).is_err());
    }

    #[test]
    fn test_empty_list_is_a_config() {
        let config = GeneratorConfig::from_json(r#"{"generators": []}"#).unwrap();
        assert!(config.generators.is_empty());
        assert_eq!(config.generators_arg(), "");
    }

    #[test]
    fn test_missing_directory_resolves_to_nothing() {
        let resolved = resolve(Path::new("/nonexistent/rswift-plugin/target"));
        assert_eq!(resolved, ResolvedConfig::default());
    }
}
