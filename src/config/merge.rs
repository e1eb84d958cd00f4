//! Merging a user config over a base config
//!
//! Only top-level entries are merged:
//! - scalars overwrite the base value
//! - sequences are concatenated, override items first
//! - mappings update the base mapping key by key
//!
//! A base value that is missing or falsy is overwritten regardless of kind,
//! unless [`EmptyBase::Combine`] is selected.

use super::error::{ConfigError, Result};
use crate::domain::{is_truthy, ConfigEnvironment, ConfigValue, ValueKind};
use clap::ValueEnum;
use serde_json::Value;

/// How a present-but-falsy base value is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyBase {
    /// Falsy base values (`[]`, `{}`, `0`, `""`, `false`, null) count as absent.
    #[default]
    Overwrite,
    /// Any non-null base value counts as present and is combined with.
    Combine,
}

/// What to do when a sequence or mapping override meets a base value of another kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Conflict {
    /// Abort with a type conflict error.
    #[default]
    Fail,
    /// Follow the override's type.
    Overwrite,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    pub empty_base: EmptyBase,
    pub on_conflict: Conflict,
}

/// Merge `user` into `base` with default options and return the merged base.
pub fn merge(user: &ConfigEnvironment, mut base: ConfigEnvironment) -> Result<ConfigEnvironment> {
    merge_into(user, &mut base, &MergeOptions::default())?;
    Ok(base)
}

/// Merge every non-reserved entry of `user` into `base` in place.
///
/// Entries are applied in order; on a type conflict the entries before it
/// have already been written.
pub fn merge_into(
    user: &ConfigEnvironment,
    base: &mut ConfigEnvironment,
    options: &MergeOptions,
) -> Result<()> {
    for (name, value) in user.iter() {
        let merged = merged_value(name, value, base.get(name), options)?;
        base.insert(name, merged);
    }
    Ok(())
}

fn merged_value(
    name: &str,
    value: &ConfigValue,
    existing: Option<&ConfigValue>,
    options: &MergeOptions,
) -> Result<ConfigValue> {
    let kind = ValueKind::of(value);
    let existing = existing.filter(|old| match options.empty_base {
        EmptyBase::Overwrite => is_truthy(old),
        EmptyBase::Combine => !old.is_null(),
    });

    let Some(existing) = existing.filter(|_| kind != ValueKind::Scalar) else {
        tracing::debug!("Overwriting '{}'", name);
        return Ok(value.clone());
    };

    match (value, existing) {
        (Value::Array(items), Value::Array(old_items)) => {
            tracing::debug!(
                "Concatenating '{}' ({} override + {} base items)",
                name,
                items.len(),
                old_items.len()
            );
            let mut combined = items.clone();
            combined.extend(old_items.iter().cloned());
            Ok(Value::Array(combined))
        }
        (Value::Object(updates), Value::Object(old_map)) => {
            tracing::debug!("Updating '{}' with {} keys", name, updates.len());
            let mut combined = old_map.clone();
            for (key, item) in updates {
                combined.insert(key.clone(), item.clone());
            }
            Ok(Value::Object(combined))
        }
        _ => match options.on_conflict {
            Conflict::Fail => Err(ConfigError::MergeTypeConflict {
                name: name.to_string(),
                base: ValueKind::of(existing),
                override_kind: kind,
            }),
            Conflict::Overwrite => {
                tracing::debug!(
                    "Replacing {} '{}' with {}",
                    ValueKind::of(existing),
                    name,
                    kind
                );
                Ok(value.clone())
            }
        },
    }
}
