//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use std::path::Path;

use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{GenError, Result};

impl GeneratorConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        debug!("Loaded generator configuration from {:?}", path);
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// The configured dialect.
    pub fn dialect(&self) -> Result<Dialect> {
        Dialect::from_name(&self.dialect)
            .ok_or_else(|| GenError::UnsupportedDialect(self.dialect.clone()))
    }
}
