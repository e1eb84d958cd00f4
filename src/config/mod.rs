//! Configuration loading and merging
//!
//! Loads declarative config files into named environments and merges a user
//! config over the framework defaults (user > base).

pub mod error;
pub mod format;
pub mod loader;
pub mod merge;
pub mod registry;

pub use error::{ConfigError, Result};
pub use format::ConfigFormat;
pub use loader::{ConfigLoader, DEFAULT_ENVIRONMENT_NAME};
pub use merge::{merge, merge_into, Conflict, EmptyBase, MergeOptions};
pub use registry::ConfigRegistry;

use crate::domain::ConfigEnvironment;
use std::path::Path;

/// Registry name of the base config loaded by [`load_effective`].
pub const BASE_ENVIRONMENT_NAME: &str = "base";
/// Registry name of the merged config produced by [`load_effective`].
pub const EFFECTIVE_ENVIRONMENT_NAME: &str = "effective";

/// Load the base config, load the user config and merge it over the base.
///
/// `base_path` must exist. Without `user_path` the default location is tried;
/// when nothing is found there the base is returned unmodified.
pub fn load_effective(
    loader: &mut ConfigLoader,
    base_path: &Path,
    user_path: Option<&Path>,
    options: &MergeOptions,
) -> Result<ConfigEnvironment> {
    let mut base = loader
        .load(Some(base_path), BASE_ENVIRONMENT_NAME)?
        .ok_or_else(|| ConfigError::NotFound { path: base_path.to_path_buf() })?;

    let Some(user) = loader.load(user_path, DEFAULT_ENVIRONMENT_NAME)? else {
        tracing::debug!("No user config found; using base config unmodified");
        return Ok(base);
    };

    merge_into(&user, &mut base, options)?;
    base.set_name(EFFECTIVE_ENVIRONMENT_NAME);
    loader.registry_mut().register(base.clone());
    Ok(base)
}
