//! Filter configuration in TOML or YAML

use crate::email::EmailValidatorConfig;
use crate::orders::OrderAggregatorConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tallykit_core::{Error, Result};

/// Supported configuration text formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl FromStr for ConfigFormat {
    type Err = Error;

    /// Accepts a format name or file extension
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(Error::InvalidConfig(format!(
                "Unsupported config format: {}. Use yaml, yml, or toml",
                other
            ))),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => write!(f, "toml"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Configuration for all filters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiltersConfig {
    pub orders: OrderAggregatorConfig,
    pub email: EmailValidatorConfig,
}

impl FiltersConfig {
    /// Parse and validate configuration text
    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self> {
        let config: Self = match format {
            ConfigFormat::Toml => toml::from_str(text)
                .map_err(|e| Error::ConfigParse(format!("Failed to parse TOML config: {}", e)))?,
            ConfigFormat::Yaml => serde_yaml::from_str(text)
                .map_err(|e| Error::ConfigParse(format!("Failed to parse YAML config: {}", e)))?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::parse(text, ConfigFormat::Toml)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Self::parse(text, ConfigFormat::Yaml)
    }

    /// Serialize configuration text
    pub fn to_string(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::ConfigParse(format!("Failed to write TOML config: {}", e))),
            ConfigFormat::Yaml => serde_yaml::to_string(self)
                .map_err(|e| Error::ConfigParse(format!("Failed to write YAML config: {}", e))),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.orders.validate()
    }
}
