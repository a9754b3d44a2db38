//! TOML configuration for the generator.
//!
//! Every key is optional; an empty document yields the defaults the core
//! uses on its own.


use mvvmgen_core::{
    names::is_identifier,
    pass::{DEFAULT_OBSERVABLE_BASE, DEFAULT_TOOL_NAME, Options},
    prelude::TypeId,
};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "mvvmgen.toml";

const GLOBAL_ALIAS: &str = "global::";

///
/// ConfigError
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("notify.observable_base '{name}' is not a valid type name")]
    InvalidTypeName { name: String },

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// GeneratorConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub generator: GeneratorSection,
    pub notify: NotifySection,
}

impl GeneratorConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), "loaded generator configuration");

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generator.name.trim().is_empty() {
            return Err(ConfigError::EmptyField {
                field: "generator.name",
            });
        }
        if self.generator.version.trim().is_empty() {
            return Err(ConfigError::EmptyField {
                field: "generator.version",
            });
        }

        let base = &self.notify.observable_base;
        if !is_type_name(base) {
            return Err(ConfigError::InvalidTypeName { name: base.clone() });
        }

        Ok(())
    }

    #[must_use]
    pub fn to_options(&self) -> Options {
        Options {
            tool_name: self.generator.name.clone(),
            tool_version: self.generator.version.clone(),
            observable_base: TypeId::new(&self.notify.observable_base),
            event_args_cache: self.notify.event_args_cache,
        }
    }
}

impl From<GeneratorConfig> for Options {
    fn from(config: GeneratorConfig) -> Self {
        config.to_options()
    }
}

///
/// GeneratorSection
///
/// Identity stamped into each unit header.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSection {
    pub name: String,
    pub version: String,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        let options = Options::default();

        Self {
            name: DEFAULT_TOOL_NAME.to_string(),
            version: options.tool_version,
        }
    }
}

///
/// NotifySection
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NotifySection {
    pub observable_base: String,
    pub event_args_cache: bool,
}

impl Default for NotifySection {
    fn default() -> Self {
        Self {
            observable_base: DEFAULT_OBSERVABLE_BASE.to_string(),
            event_args_cache: true,
        }
    }
}

// is_type_name
// dotted identifiers, optionally behind the global alias
fn is_type_name(name: &str) -> bool {
    let name = name.strip_prefix(GLOBAL_ALIAS).unwrap_or(name);

    !name.is_empty() && name.split('.').all(is_identifier)
}
