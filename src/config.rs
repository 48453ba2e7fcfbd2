//! Configuration handling for sprout.
//! Loads the component tree, the organisation prefix and template overrides
//! from a JSON or YAML file.

use crate::constants::{CONFIG_FILES, DEFAULT_APP_PREFIX};
use crate::error::{Error, Result};
use crate::model::{example_tree, Component};
use crate::registry::{GeneratedFileKind, TemplateEntry};
use indexmap::IndexMap;
use log::{debug, info};
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_app_prefix() -> String {
    DEFAULT_APP_PREFIX.to_string()
}

/// Contents of a `sprout.json` / `sprout.yml` / `sprout.yaml` file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Root components, generated in order
    #[serde(alias = "componentTree")]
    pub components: Vec<Component>,

    #[serde(default = "default_app_prefix", alias = "app_prefix")]
    pub app_prefix: String,

    /// Per-kind replacements for the bundled template table
    #[serde(default)]
    pub templates: IndexMap<GeneratedFileKind, TemplateEntry>,
}

impl Default for Config {
    /// The built-in connection list tree with the default prefix.
    fn default() -> Self {
        Self {
            components: example_tree(),
            app_prefix: default_app_prefix(),
            templates: IndexMap::new(),
        }
    }
}

/// Returns the first of `config_files` present in `dir`.
pub fn find_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Option<PathBuf> {
    config_files.iter().map(|file| dir.as_ref().join(file)).find(|path| path.exists())
}

/// Reads a configuration file.
///
/// # Errors
/// * `Error::ConfigError` if the file does not exist or cannot be read
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<String> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from {}", config_path.display());
    std::fs::read_to_string(config_path).map_err(|e| {
        Error::ConfigError(format!("cannot read '{}': {}", config_path.display(), e))
    })
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
///   for the [`Config`] schema
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(json_err) => {
            debug!("Not a JSON configuration ({json_err}), trying YAML");
            serde_yaml::from_str(content)
                .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}")))
        }
    }
}

/// Resolves the configuration for a run.
///
/// An explicit path must exist. Without one, `search_dir` is searched for
/// [`CONFIG_FILES`]; if none is present the built-in tree is used.
pub fn get_config<P: AsRef<Path>>(explicit: Option<&Path>, search_dir: P) -> Result<Config> {
    let config_path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config(search_dir, &CONFIG_FILES),
    };

    match config_path {
        Some(path) => parse_config(&load_config(path)?),
        None => {
            info!(
                "No configuration file found (tried: {}), using the built-in tree",
                CONFIG_FILES.join(", ")
            );
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_example_tree() {
        let config = Config::default();
        assert_eq!(config.app_prefix, "ei");
        assert_eq!(config.components.len(), 1);
        assert_eq!(config.components[0].name, "connection-list-container");
        assert!(config.templates.is_empty());
    }

    #[test]
    fn test_prefix_defaults_when_missing() {
        let config = parse_config(r#"{"components": []}"#).unwrap();
        assert_eq!(config.app_prefix, "ei");
    }
}
