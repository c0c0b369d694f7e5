//! Configuration validation.

use super::GeneratorConfig;
use crate::core::identifier::validate_package;
use crate::dialect::Dialect;
use crate::error::{GenError, Result};

/// Validate the configuration.
pub fn validate(config: &GeneratorConfig) -> Result<()> {
    if Dialect::from_name(&config.dialect).is_none() {
        return Err(GenError::Config(format!(
            "dialect must be one of mysql, postgresql, got '{}'",
            config.dialect
        )));
    }

    for (key, package) in config.packages.entries() {
        validate_package(package).map_err(|e| match e {
            GenError::Config(msg) => GenError::Config(format!("{}: {}", key, msg)),
            other => other,
        })?;
    }

    if let Some(prefix) = &config.strip_table_prefix {
        if prefix.trim().is_empty() {
            return Err(GenError::Config(
                "strip_table_prefix cannot be blank".into(),
            ));
        }
    }

    for (dialect, entries) in &config.type_overrides {
        if Dialect::from_name(dialect).is_none() {
            return Err(GenError::Config(format!(
                "type_overrides: unknown dialect '{}'",
                dialect
            )));
        }
        if let Some(sql_type) = entries.keys().find(|k| k.trim().is_empty()) {
            return Err(GenError::Config(format!(
                "type_overrides.{}: empty SQL type name {:?}",
                dialect, sql_type
            )));
        }
    }

    Ok(())
}
