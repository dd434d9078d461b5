use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GitVersionError, Result};

/// File name searched in the working directory.
pub const CONFIG_FILE_NAME: &str = "gitversion.toml";

/// Represents the complete configuration for git-version.
///
/// Every value may be overridden on the command line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub describe: DescribeConfig,
}

/// Where and in which format the version file is generated.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    /// Output format name (`cpp`, `python`, `rust`)
    #[serde(default)]
    pub lang: Option<String>,

    /// Destination file
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Returns the default length of abbreviated commit ids.
fn default_abbrev() -> u32 {
    7
}

/// Options for the describe query.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DescribeConfig {
    #[serde(default = "default_abbrev")]
    pub abbrev: u32,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        DescribeConfig {
            abbrev: default_abbrev(),
        }
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| GitVersionError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitversion.toml` in current directory
/// 3. `.gitversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => match find_config_file() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    let text = fs::read_to_string(&path).map_err(|e| {
        GitVersionError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    toml::from_str(&text)
        .map_err(|e| GitVersionError::config(format!("{}: {}", path.display(), e)))
}

fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let global = dirs::config_dir()?.join(format!(".{}", CONFIG_FILE_NAME));
    global.exists().then_some(global)
}
