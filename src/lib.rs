//! mage-config: load user configuration and merge it over framework defaults
//!
//! A config source is a declarative TOML, YAML or JSON document of top-level
//! named values. The user config is merged into the base config entry by entry:
//! scalars overwrite, sequences concatenate and mappings update.

pub mod cli;
pub mod config;
pub mod domain;

pub use config::{load_effective, merge, ConfigError, ConfigLoader, MergeOptions};
pub use domain::{ConfigEnvironment, ConfigValue, ValueKind};
