//! Dialect-specific DDL parser implementations.
//!
//! - [`mysql`]: MySQL/MariaDB parser (inline comments)
//! - [`postgres`]: PostgreSQL parser (two-pass comment and key resolution)
//!
//! # Static dispatch
//!
//! The set of dialects is closed, so the parsers are wrapped in
//! [`ParserImpl`] and selected once by [`ParserImpl::from_dialect_name`].
//! Callers hold a `ParserImpl` and never branch on the dialect again.

pub(crate) mod common;
pub mod mysql;
pub mod postgres;

pub use mysql::MysqlParser;
pub use postgres::PostgresParser;

use std::sync::Arc;

use crate::core::schema::TableDescription;
use crate::core::traits::{DdlParser, ParseOptions};
use crate::dialect::{Dialect, TypeMapper};
use crate::error::{GenError, Result};

/// Enum-based static dispatch over the dialect parsers.
#[derive(Debug, Clone)]
pub enum ParserImpl {
    Mysql(MysqlParser),
    Postgres(PostgresParser),
}

impl DdlParser for ParserImpl {
    fn parse(&self, ddl: &str) -> Result<TableDescription> {
        match self {
            ParserImpl::Mysql(p) => p.parse(ddl),
            ParserImpl::Postgres(p) => p.parse(ddl),
        }
    }

    fn dialect(&self) -> Dialect {
        match self {
            ParserImpl::Mysql(p) => p.dialect(),
            ParserImpl::Postgres(p) => p.dialect(),
        }
    }
}

impl ParserImpl {
    /// Create the parser for a dialect.
    pub fn for_dialect(dialect: Dialect, mapper: Arc<TypeMapper>, options: ParseOptions) -> Self {
        match dialect {
            Dialect::MySql => ParserImpl::Mysql(MysqlParser::new(mapper).with_options(options)),
            Dialect::Postgres => {
                ParserImpl::Postgres(PostgresParser::new(mapper).with_options(options))
            }
        }
    }

    /// Create a parser from a dialect name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `GenError::UnsupportedDialect` if the name is not recognized.
    pub fn from_dialect_name(
        name: &str,
        mapper: Arc<TypeMapper>,
        options: ParseOptions,
    ) -> Result<Self> {
        let dialect =
            Dialect::from_name(name).ok_or_else(|| GenError::UnsupportedDialect(name.to_string()))?;
        Ok(Self::for_dialect(dialect, mapper, options))
    }
}

/// Create a parser with the built-in type tables and default options.
///
/// Prefer [`ParserCatalog`](crate::core::ParserCatalog) when parsing
/// repeatedly; it shares one type mapper across parsers.
pub fn new_parser(dialect_name: &str) -> Result<ParserImpl> {
    ParserImpl::from_dialect_name(
        dialect_name,
        Arc::new(TypeMapper::with_defaults()),
        ParseOptions::default(),
    )
}
