use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseError, Result};

/// Represents the complete configuration for relcut.
///
/// Covers release policy (protected branches), the version file target, and
/// the formatting command run before committing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_protected_branches")]
    pub protected_branches: Vec<String>,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default)]
    pub version_file: VersionFileConfig,

    #[serde(default)]
    pub format: FormatConfig,
}

/// Returns the default list of branches releases are refused from.
fn default_protected_branches() -> Vec<String> {
    vec!["dev".to_string()]
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Configuration for the generated version file.
///
/// The file is a Go source file holding a single constant the host project
/// reads to report its own version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionFileConfig {
    #[serde(default = "default_version_file_path")]
    pub path: String,

    #[serde(default = "default_version_file_package")]
    pub package: String,

    #[serde(default = "default_version_file_constant")]
    pub constant: String,
}

fn default_version_file_path() -> String {
    "./miso/version.go".to_string()
}

fn default_version_file_package() -> String {
    "miso".to_string()
}

fn default_version_file_constant() -> String {
    "MisoVersion".to_string()
}

impl Default for VersionFileConfig {
    fn default() -> Self {
        VersionFileConfig {
            path: default_version_file_path(),
            package: default_version_file_package(),
            constant: default_version_file_constant(),
        }
    }
}

/// Configuration for the source-formatting step.
///
/// An empty command disables formatting entirely.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FormatConfig {
    #[serde(default = "default_format_command")]
    pub command: Vec<String>,
}

fn default_format_command() -> Vec<String> {
    vec!["go".to_string(), "fmt".to_string(), "./...".to_string()]
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            command: default_format_command(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            protected_branches: default_protected_branches(),
            remote: default_remote(),
            version_file: VersionFileConfig::default(),
            format: FormatConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `relcut.toml` in current directory
/// 3. `~/.config/.relcut.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./relcut.toml").exists() {
        fs::read_to_string("./relcut.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".relcut.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| ReleaseError::config(e.to_string()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.protected_branches, vec!["dev".to_string()]);
        assert_eq!(config.remote, "origin");
        assert_eq!(config.version_file.path, "./miso/version.go");
        assert_eq!(config.version_file.package, "miso");
        assert_eq!(config.version_file.constant, "MisoVersion");
        assert_eq!(config.format.command, vec!["go", "fmt", "./..."]);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("protected_branches = []").unwrap();
        assert!(config.protected_branches.is_empty());
        assert_eq!(config.remote, "origin");
        assert_eq!(config.version_file.constant, "MisoVersion");
    }

    #[test]
    fn test_format_command_can_be_disabled() {
        let config: Config = toml::from_str("[format]\ncommand = []").unwrap();
        assert!(config.format.command.is_empty());
    }
}
