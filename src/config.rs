use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::log::{LogLevel, ParseLevelError};

/// Errors raised while loading or interpreting a config file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[{section}] {key}: {source}")]
    InvalidLevel {
        section: String,
        key: String,
        #[source]
        source: ParseLevelError,
    },

    #[error("[{section}] {key}: expected a boolean, got `{value}`")]
    InvalidBool {
        section: String,
        key: String,
        value: String,
    },

    #[error("[{section}] {key}: expected a number, got `{value}`")]
    InvalidNumber {
        section: String,
        key: String,
        value: String,
    },
}

/// INI-style configuration: `key = value` pairs, optionally grouped under
/// `[section]` headers. `#` starts a comment line; surrounding quotes on
/// values are dropped.
#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Parses config text. Lines that are neither headers nor `key = value`
    /// pairs are ignored.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current_section = Some(name.trim().to_string());
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                let value = value.trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        globals.insert(key, value);
                    }
                    Some(sec) => {
                        sections.entry(sec.clone()).or_default().insert(key, value);
                    }
                }
            }
        }
        Config { globals, sections }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_or_default<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get(section, key)
            .or_else(|| self.get_global(key))
            .unwrap_or(default)
    }

    /// Reads a boolean (`true/false`, `yes/no`, `on/off`, `1/0`); missing or
    /// empty keys yield `default`.
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> Result<bool, ConfigError> {
        let Some(value) = self.get_non_empty(section, key) else {
            return Ok(default);
        };
        match value.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(ConfigError::InvalidBool {
                section: section.to_owned(),
                key: key.to_owned(),
                value: value.to_owned(),
            }),
        }
    }

    pub fn get_usize(&self, section: &str, key: &str, default: usize) -> Result<usize, ConfigError> {
        let Some(value) = self.get_non_empty(section, key) else {
            return Ok(default);
        };
        value.parse().map_err(|_| ConfigError::InvalidNumber {
            section: section.to_owned(),
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }

    pub fn get_level(&self, section: &str, key: &str) -> Result<Option<LogLevel>, ConfigError> {
        let Some(value) = self.get_non_empty(section, key) else {
            return Ok(None);
        };
        value
            .parse()
            .map(Some)
            .map_err(|source| ConfigError::InvalidLevel {
                section: section.to_owned(),
                key: key.to_owned(),
                source,
            })
    }
}
