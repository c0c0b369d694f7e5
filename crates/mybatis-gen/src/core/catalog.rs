//! Parser catalog for explicit dependency injection.
//!
//! The [`ParserCatalog`] owns the process-wide [`TypeMapper`] and the parse
//! policy. It is built once at startup and hands out parsers that share the
//! same immutable mapper, instead of each parser reaching for global state.

use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::dialect::{Dialect, TypeMapper};
use crate::drivers::ParserImpl;
use crate::error::Result;

use super::traits::ParseOptions;

/// Factory for dialect parsers sharing one type mapper.
///
/// # Example
///
/// ```rust
/// use mybatis_gen::{DdlParser, ParserCatalog};
///
/// let catalog = ParserCatalog::with_builtins();
/// let parser = catalog.new_parser("postgres")?;
/// let table = parser.parse("CREATE TABLE t (id int)")?;
/// assert_eq!(table.table_name, "t");
/// # Ok::<(), mybatis_gen::GenError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParserCatalog {
    mapper: Arc<TypeMapper>,
    options: ParseOptions,
}

impl Default for ParserCatalog {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl ParserCatalog {
    /// Create a catalog from an existing mapper and options.
    pub fn new(mapper: Arc<TypeMapper>, options: ParseOptions) -> Self {
        Self { mapper, options }
    }

    /// Create a catalog with the built-in type tables and default options.
    pub fn with_builtins() -> Self {
        Self::new(Arc::new(TypeMapper::with_defaults()), ParseOptions::default())
    }

    /// Create a catalog from generator configuration.
    ///
    /// Applies `id_fallback` and merges `type_overrides` into the built-in
    /// tables. The configuration must already be validated.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let mut mapper = TypeMapper::with_defaults();
        for (dialect_name, entries) in &config.type_overrides {
            let dialect: Dialect = dialect_name.parse()?;
            mapper = mapper.with_overrides(
                dialect,
                entries.iter().map(|(sql_type, java_type)| (sql_type, *java_type)),
            );
        }

        Ok(Self::new(
            Arc::new(mapper),
            ParseOptions {
                id_fallback: config.id_fallback,
            },
        ))
    }

    /// The shared type mapper.
    pub fn type_mapper(&self) -> &Arc<TypeMapper> {
        &self.mapper
    }

    /// The parse policy handed to every parser.
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Create the parser for a known dialect.
    pub fn parser_for(&self, dialect: Dialect) -> ParserImpl {
        ParserImpl::for_dialect(dialect, Arc::clone(&self.mapper), self.options)
    }

    /// Create a parser from a dialect name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `GenError::UnsupportedDialect` for unknown names.
    pub fn new_parser(&self, dialect_name: &str) -> Result<ParserImpl> {
        ParserImpl::from_dialect_name(dialect_name, Arc::clone(&self.mapper), self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::DdlParser;
    use crate::dialect::JavaType;
    use crate::error::GenError;

    #[test]
    fn test_parsers_share_mapper() {
        let catalog = ParserCatalog::with_builtins();
        let _a = catalog.new_parser("mysql").unwrap();
        let _b = catalog.parser_for(Dialect::Postgres);
        assert_eq!(Arc::strong_count(catalog.type_mapper()), 3);
    }

    #[test]
    fn test_unknown_dialect() {
        let catalog = ParserCatalog::with_builtins();
        assert!(matches!(
            catalog.new_parser("db2"),
            Err(GenError::UnsupportedDialect(_))
        ));
    }

    #[test]
    fn test_from_config_applies_policy_and_overrides() {
        let config = GeneratorConfig::from_yaml(
            "id_fallback: false\ntype_overrides:\n  postgres:\n    CITEXT: String\n    MONEY: BigDecimal\n",
        )
        .unwrap();
        let catalog = ParserCatalog::from_config(&config).unwrap();
        assert!(!catalog.options().id_fallback);
        assert_eq!(
            catalog.type_mapper().map("money", "postgresql"),
            JavaType::BigDecimal
        );

        let table = catalog
            .parser_for(Dialect::Postgres)
            .parse("CREATE TABLE t (id int, amount money)")
            .unwrap();
        assert!(!table.fields[0].is_primary_key);
        assert_eq!(table.fields[1].target_type, JavaType::BigDecimal);
    }
}
