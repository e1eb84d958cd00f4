//! Declarative config document formats (TOML, YAML, JSON)

use super::error::{ConfigError, Result};
use crate::domain::{ConfigEnvironment, ConfigValue};
use clap::ValueEnum;
use serde_json::{Map, Number, Value};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: ext.to_string(),
        })
    }

    /// Parse a document into its top-level named values.
    pub fn parse(self, content: &str, path: &Path) -> Result<Map<String, ConfigValue>> {
        let parse_err = |message: String| ConfigError::Parse { path: path.to_path_buf(), message };

        let value = match self {
            ConfigFormat::Toml => {
                // Empty documents are valid TOML; they simply define nothing.
                let raw: toml::Table =
                    toml::from_str(content).map_err(|e| parse_err(e.to_string()))?;
                from_toml(toml::Value::Table(raw)).map_err(parse_err)?
            }
            ConfigFormat::Yaml => {
                let raw: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))?;
                if raw.is_null() {
                    Value::Object(Map::new())
                } else {
                    from_yaml(raw).map_err(parse_err)?
                }
            }
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_err(e.to_string()))?
            }
        };

        match value {
            Value::Object(map) => Ok(map),
            _ => Err(ConfigError::NotAMapping { path: path.to_path_buf() }),
        }
    }

    /// Render the non-reserved view of an environment.
    pub fn render(self, env: &ConfigEnvironment) -> Result<String> {
        let value = env.to_value();
        let render_err =
            |message: String| ConfigError::Render { format: self.to_string(), message };

        match self {
            ConfigFormat::Toml => {
                toml::to_string_pretty(&value).map_err(|e| render_err(e.to_string()))
            }
            ConfigFormat::Yaml => {
                serde_yaml::to_string(&value).map_err(|e| render_err(e.to_string()))
            }
            ConfigFormat::Json => serde_json::to_string_pretty(&value)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| render_err(e.to_string())),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
        };
        f.write_str(label)
    }
}

fn float_value(f: f64) -> std::result::Result<Value, String> {
    Number::from_f64(f)
        .map(Value::Number)
        .ok_or_else(|| format!("non-finite float {f} is not supported"))
}

fn from_toml(value: toml::Value) -> std::result::Result<Value, String> {
    Ok(match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => float_value(f)?,
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => {
            Value::Array(items.into_iter().map(from_toml).collect::<std::result::Result<_, _>>()?)
        }
        toml::Value::Table(table) => {
            let mut map = Map::new();
            for (key, item) in table {
                map.insert(key, from_toml(item)?);
            }
            Value::Object(map)
        }
    })
}

fn from_yaml(value: serde_yaml::Value) -> std::result::Result<Value, String> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else {
                float_value(n.as_f64().unwrap_or(f64::NAN))?
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => {
            Value::Array(items.into_iter().map(from_yaml).collect::<std::result::Result<_, _>>()?)
        }
        Yaml::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, item) in mapping {
                map.insert(yaml_key(key)?, from_yaml(item)?);
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => from_yaml(tagged.value)?,
    })
}

fn yaml_key(key: serde_yaml::Value) -> std::result::Result<String, String> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Tagged(tagged) => yaml_key(tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => {
            Err("mapping keys must be scalars".to_string())
        }
    }
}
