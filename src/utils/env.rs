use std::{env, str::FromStr};

use anyhow::{anyhow, Result};

/// An enum representing the current environment that the chatbot is running in.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChatbotEnvironment {
    Dev,
    Prod,
}

impl ChatbotEnvironment {
    /// Returns the current environment based on the `CHATBOT_ENV` environment variable.
    pub fn current() -> Self {
        if env::var("CHATBOT_ENV").map(|e| e == "dev").unwrap_or(false) {
            Self::Dev
        } else {
            Self::Prod
        }
    }
}

/// Returns the value of the environment variable `key`, or `default` when it is unset or empty.
pub fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Returns the value of the environment variable `key` if it is set to a non-empty string.
pub fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parses the environment variable `key` into `T`, using `default` when it is unset.
pub fn parsed_env_or<T: FromStr>(key: &str, default: T) -> Result<T> {
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| anyhow!("{} has an invalid value: {}", key, raw)),
        None => Ok(default),
    }
}
