//! Prefix index configuration
//!
//! A prefix that walks off the trie returns no keys unless
//! [`PrefixMissPolicy::AncestorFallback`] is selected.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// What a prefix lookup does when a character has no transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixMissPolicy {
    /// Report no keys at all
    #[default]
    Empty,
    /// Stop at the deepest vertex reached and report the keys below it
    ///
    /// Keys are spelled from the part of the prefix that did match, so
    /// `"apx"` over `["apple"]` yields `"apple"`. The unmatched tail is
    /// dropped rather than prepended, and every reported key is one that
    /// was actually stored.
    AncestorFallback,
}

/// Prefix index configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Character stored on the root vertex
    pub root_char: char,
    /// Lowercase keys and prefixes before they touch the graph
    pub lowercase_keys: bool,
    /// Behaviour when a prefix walks off the trie
    pub prefix_miss: PrefixMissPolicy,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            root_char: '#',
            lowercase_keys: true,
            prefix_miss: PrefixMissPolicy::Empty,
        }
    }
}

impl IndexConfig {
    /// Builder-style override of the miss policy
    pub fn with_prefix_miss(mut self, policy: PrefixMissPolicy) -> Self {
        self.prefix_miss = policy;
        self
    }

    /// Validate configuration
    ///
    /// The root payload must never be produced by a key character, so the
    /// root character may not be alphanumeric or a control character.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.root_char.is_alphanumeric() {
            return Err(ConfigError::Invalid(format!(
                "root character {:?} may collide with key characters",
                self.root_char
            )));
        }
        if self.root_char.is_control() {
            return Err(ConfigError::Invalid(
                "root character must be printable".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        let config: IndexConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading index configuration from {:?}", path);
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}
