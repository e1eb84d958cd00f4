//! Config file loading

use super::error::{ConfigError, Result};
use super::format::ConfigFormat;
use super::registry::ConfigRegistry;
use crate::domain::ConfigEnvironment;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment name used when the caller does not pick one.
pub const DEFAULT_ENVIRONMENT_NAME: &str = "module";

/// Candidates for the implicit `config` location, in lookup order.
const DEFAULT_CANDIDATES: [&str; 4] = ["config.toml", "config.yaml", "config.yml", "config.json"];

/// Resolves config sources into environments and keeps every loaded
/// environment in its registry.
#[derive(Debug)]
pub struct ConfigLoader {
    root: PathBuf,
    registry: ConfigRegistry,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ConfigLoader {
    /// Create a loader that discovers the default config under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), registry: ConfigRegistry::new() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ConfigRegistry {
        &mut self.registry
    }

    pub fn into_registry(self) -> ConfigRegistry {
        self.registry
    }

    /// Load `source` under [`DEFAULT_ENVIRONMENT_NAME`].
    pub fn load_default(&mut self, source: Option<&Path>) -> Result<Option<ConfigEnvironment>> {
        self.load(source, DEFAULT_ENVIRONMENT_NAME)
    }

    /// Load a config source into an environment named `environment_name`.
    ///
    /// An explicit `source` must exist. Without one, the default `config`
    /// location under the loader root is tried, and `Ok(None)` is returned when
    /// nothing is there.
    pub fn load(
        &mut self,
        source: Option<&Path>,
        environment_name: &str,
    ) -> Result<Option<ConfigEnvironment>> {
        let config_file = match source {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound { path: path.to_path_buf() });
                }
                path.to_path_buf()
            }
            None => match self.discover_default() {
                Some(path) => path,
                None => {
                    tracing::debug!("No default config found under {}", self.root.display());
                    return Ok(None);
                }
            },
        };

        let env = read_environment(&config_file, environment_name)?;
        tracing::info!(
            "Loaded config environment '{}' from {} ({} entries)",
            environment_name,
            config_file.display(),
            env.len()
        );

        self.registry.register(env.clone());
        Ok(Some(env))
    }

    /// First existing default candidate under the loader root.
    pub fn discover_default(&self) -> Option<PathBuf> {
        for candidate in DEFAULT_CANDIDATES {
            let path = self.root.join(candidate);
            if path.exists() {
                tracing::debug!("Discovered default config {}", path.display());
                return Some(path);
            }
        }

        None
    }
}

fn read_environment(config_file: &Path, environment_name: &str) -> Result<ConfigEnvironment> {
    if !config_file.is_file() {
        return Err(ConfigError::NotAFile { path: config_file.to_path_buf() });
    }

    let format = ConfigFormat::from_path(config_file)?;
    let content = fs::read_to_string(config_file)
        .map_err(|source| ConfigError::Read { path: config_file.to_path_buf(), source })?;
    let entries = format.parse(&content, config_file)?;

    let absolute = fs::canonicalize(config_file).unwrap_or_else(|_| config_file.to_path_buf());
    let mut env = ConfigEnvironment::new(environment_name).with_source(absolute.clone());
    env.insert("__name__", Value::String(environment_name.to_string()));
    env.insert("__file__", Value::String(absolute.display().to_string()));
    for (key, value) in entries {
        env.insert(key, value);
    }

    Ok(env)
}
