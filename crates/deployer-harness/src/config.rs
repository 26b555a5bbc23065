//! Read-only configuration providers.
//!
//! The resolver never reads the process environment directly. It is handed a
//! [`ConfigSource`] at construction, so tests can resolve endpoints from an
//! in-memory map without mutating real environment variables.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::HarnessResult;

/// A key/value view over configuration.
///
/// `None` means the key is absent. A present value is returned untouched,
/// including surrounding whitespace; trimming is the caller's job.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Reads from the process environment at lookup time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigSource;

impl ConfigSource for EnvConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as unset
        std::env::var(key).ok()
    }
}

/// Fixed in-memory configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticConfigSource {
    values: BTreeMap<String, String>,
}

impl StaticConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }
}

impl<K, V> FromIterator<(K, V)> for StaticConfigSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for StaticConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Layered configuration built with the `config` crate.
///
/// Keys are tried as given, then lowercase, matching how TOML files usually
/// spell `DEPLOYER_PORT` (`deployer_port`).
///
/// Lookups through a layered config are effectively case-insensitive:
/// `config::Environment` lowercases variable names, so `DEPLOYER_ADDRESS` and
/// `deployer_address` land on the same key and the env layer overrides any
/// file spelling. When the environment holds both spellings, whichever the
/// `config` crate collects last wins; keep a single spelling per key.
impl ConfigSource for config::Config {
    fn get(&self, key: &str) -> Option<String> {
        let lowercase = key.to_ascii_lowercase();
        let candidates = if lowercase == key {
            vec![key]
        } else {
            vec![key, lowercase.as_str()]
        };

        for candidate in candidates {
            match self.get_string(candidate) {
                Ok(value) => return Some(value),
                Err(config::ConfigError::NotFound(_)) => continue,
                Err(e) => {
                    warn!(key = %candidate, error = %e, "Unreadable configuration value, using default");
                    return None;
                }
            }
        }
        None
    }
}

/// Build a layered configuration: an optional TOML file, overridden by the
/// process environment.
pub fn layered_config(path: Option<&Path>) -> HarnessResult<config::Config> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        debug!("Loading deployer configuration from: {}", path.display());
        builder = builder.add_source(
            config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(true),
        );
    }
    let config = builder
        .add_source(config::Environment::default())
        .build()?;
    Ok(config)
}
