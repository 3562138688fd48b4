//! Serialization options.
//!
//! Options can be deserialized from any serde source (missing fields take their defaults)
//! or read from the environment with [`SerializationOptions::from_env`].

use crate::framework::{ConfigError, KeyTransform};
use serde::{Deserialize, Serialize};

pub const KEY_TRANSFORM_ENV: &str = "SERIALIZER_KEY_TRANSFORM";
pub const CONCURRENCY_ENV: &str = "SERIALIZER_CONCURRENCY";

const DEFAULT_CONCURRENCY: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializationOptions {
    /// Case transform for attribute keys and resource type names.
    pub key_transform: KeyTransform,
    /// Worker count for concurrent serialization.
    pub concurrency: usize,
}

impl Default for SerializationOptions {
    fn default() -> Self {
        Self {
            key_transform: KeyTransform::None,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl SerializationOptions {
    /// Reads `SERIALIZER_KEY_TRANSFORM` and `SERIALIZER_CONCURRENCY`; unset variables keep
    /// their defaults.
    ///
    /// # Errors
    /// [`ConfigError::InvalidOption`] if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        if let Some(value) = lookup(KEY_TRANSFORM_ENV) {
            options.key_transform = value.parse()?;
        }
        if let Some(value) = lookup(CONCURRENCY_ENV) {
            options.concurrency = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidOption {
                        key: CONCURRENCY_ENV.into(),
                        value,
                    })
                }
            };
        }
        Ok(options)
    }
}
