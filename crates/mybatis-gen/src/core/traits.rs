//! Core parsing contract shared by the dialect drivers.
//!
//! - [`DdlParser`]: turns DDL text into a [`TableDescription`]
//! - [`ParseOptions`]: policy switches applied by every parser

use crate::dialect::Dialect;
use crate::error::Result;

use super::schema::TableDescription;

/// Policy switches shared by all dialect parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treat a column literally named `id` (any case) as a primary key even
    /// when no constraint declares it.
    ///
    /// Enabled by default for compatibility with legacy schemas that lack
    /// explicit constraints. It can mismark a non-key column named `id`.
    pub id_fallback: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { id_fallback: true }
    }
}

impl ParseOptions {
    /// Resolve the primary-key flag for a column.
    ///
    /// `declared` is the result of looking the column up in the script's
    /// primary-key constraints.
    pub fn is_primary_key(&self, column: &str, declared: bool) -> bool {
        declared || (self.id_fallback && column.eq_ignore_ascii_case("id"))
    }
}

/// Parse DDL text for one SQL dialect.
///
/// Implementations are stateless per call and safe to share across threads.
pub trait DdlParser: Send + Sync {
    /// Parse a script and describe its first CREATE TABLE statement.
    ///
    /// # Errors
    ///
    /// - [`GenError::GrammarRejected`](crate::GenError::GrammarRejected) if the
    ///   dialect grammar rejects the text
    /// - [`GenError::NoTableFound`](crate::GenError::NoTableFound) if the script
    ///   holds no CREATE TABLE statement
    fn parse(&self, ddl: &str) -> Result<TableDescription>;

    /// The dialect this parser understands.
    fn dialect(&self) -> Dialect;
}
