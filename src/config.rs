use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BumpError, Result};

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE_NAME: &str = "bump_versions.toml";

/// Default location of the component manifest, relative to the project root.
pub const DEFAULT_CONTROL_MANIFEST: &str =
    "pcf/HtmlPdfPrintButton/HtmlPdfPrintButton/ControlManifest.Input.xml";

/// Default location of the solution descriptor, relative to the project root.
pub const DEFAULT_SOLUTION: &str = "solution/Html_to_PDF_Component_Solution/src/Other/Solution.xml";

fn default_control_manifest() -> PathBuf {
    PathBuf::from(DEFAULT_CONTROL_MANIFEST)
}

fn default_solution() -> PathBuf {
    PathBuf::from(DEFAULT_SOLUTION)
}

/// Locations of the two files whose versions get bumped.
///
/// Relative paths are interpreted against the project root; see [`Config::resolve`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_control_manifest")]
    pub control_manifest: PathBuf,

    #[serde(default = "default_solution")]
    pub solution: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            control_manifest: default_control_manifest(),
            solution: default_solution(),
        }
    }
}

impl Config {
    /// Make every relative path absolute against `root`.
    pub fn resolve(self, root: &Path) -> Self {
        Config {
            control_manifest: root.join(self.control_manifest),
            solution: root.join(self.solution),
        }
    }
}

/// Loads configuration for the project rooted at `root`.
///
/// Reads `bump_versions.toml` from the root when present and falls back to
/// the defaults otherwise. Paths in the returned config are resolved
/// against `root`.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If the file exists but cannot be read or parsed
pub fn load_config(root: &Path) -> Result<Config> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(Config::default().resolve(root));
    }

    let config_str = fs::read_to_string(&config_path).map_err(|e| {
        BumpError::config(format!("Failed to read {}: {}", config_path.display(), e))
    })?;
    let config: Config = toml::from_str(&config_str).map_err(|e| {
        BumpError::config(format!("Failed to parse {}: {}", config_path.display(), e))
    })?;

    Ok(config.resolve(root))
}
