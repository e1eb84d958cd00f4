//! Named registry of loaded config environments

use crate::domain::ConfigEnvironment;
use std::collections::HashMap;

/// Environments keyed by the name they were loaded under. Last registration wins.
#[derive(Debug, Default, Clone)]
pub struct ConfigRegistry {
    environments: HashMap<String, ConfigEnvironment>,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `env` under its own name, returning the environment it replaced.
    pub fn register(&mut self, env: ConfigEnvironment) -> Option<ConfigEnvironment> {
        let name = env.name().to_string();
        let previous = self.environments.insert(name.clone(), env);
        if previous.is_some() {
            tracing::warn!("Replacing registered config environment '{}'", name);
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&ConfigEnvironment> {
        self.environments.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ConfigEnvironment> {
        self.environments.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ConfigEnvironment> {
        self.environments.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.environments.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.environments.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}
