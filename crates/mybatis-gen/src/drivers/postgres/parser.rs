//! Second pass and the PostgreSQL parser entry point.

use std::sync::Arc;

use sqlparser::ast::{DataType, Statement};
use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::Parser;

use crate::core::identifier::{last_segment, pg_ident};
use crate::core::schema::{Field, TableDescription};
use crate::core::traits::{DdlParser, ParseOptions};
use crate::dialect::{Dialect, TypeMapper};
use crate::drivers::common::create_tables;
use crate::error::{GenError, Result};

use super::facts::ScriptFacts;

/// PostgreSQL DDL parser.
#[derive(Debug, Clone)]
pub struct PostgresParser {
    mapper: Arc<TypeMapper>,
    options: ParseOptions,
}

impl PostgresParser {
    /// Create a parser using the shared type mapper and default options.
    pub fn new(mapper: Arc<TypeMapper>) -> Self {
        Self {
            mapper,
            options: ParseOptions::default(),
        }
    }

    /// Replace the parse options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }
}

impl DdlParser for PostgresParser {
    fn parse(&self, ddl: &str) -> Result<TableDescription> {
        let statements = Parser::parse_sql(&PostgreSqlDialect {}, ddl)
            .map_err(|e| GenError::grammar(Dialect::Postgres, e))?;

        let facts = ScriptFacts::collect(&statements);
        assemble(&statements, &facts, &self.mapper, &self.options)
    }

    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }
}

/// Build the description of the first CREATE TABLE from collected facts.
///
/// # Errors
///
/// Returns `GenError::NoTableFound` if the script has no CREATE TABLE.
pub fn assemble(
    statements: &[Statement],
    facts: &ScriptFacts,
    mapper: &TypeMapper,
    options: &ParseOptions,
) -> Result<TableDescription> {
    let mut tables = create_tables(statements);
    let create = tables.next().ok_or(GenError::NoTableFound)?;

    let table_name = last_segment(&create.name)
        .map(pg_ident)
        .ok_or(GenError::NoTableFound)?;

    let fields = create
        .columns
        .iter()
        .map(|col| {
            let name = pg_ident(&col.name);
            let sql_type = type_name(&col.data_type);
            let declared = facts.is_declared_key(&table_name, &name);
            Field {
                is_primary_key: options.is_primary_key(&name, declared),
                target_type: mapper.map_for(&sql_type, Dialect::Postgres),
                comment: facts
                    .column_comment(&table_name, &name)
                    .unwrap_or_default()
                    .to_string(),
                sql_type,
                name,
            }
        })
        .collect();

    let ignored_tables = tables
        .filter_map(|create| last_segment(&create.name).map(pg_ident))
        .collect();

    Ok(TableDescription {
        comment: facts.table_comment(&table_name).map(str::to_string),
        table_name,
        fields,
        ignored_tables,
    })
}

/// Type name as the grammar reports it, without schema qualification.
///
/// Built-in types use the grammar's own rendering (`VARCHAR(100)`,
/// `TIMESTAMP WITH TIME ZONE`, `INT[]`); user-defined types keep only their
/// last name segment.
fn type_name(data_type: &DataType) -> String {
    match data_type {
        DataType::Custom(name, modifiers) => {
            let base = last_segment(name)
                .map(|ident| ident.value.clone())
                .unwrap_or_default();
            if modifiers.is_empty() {
                base
            } else {
                format!("{}({})", base, modifiers.join(", "))
            }
        }
        other => other.to_string(),
    }
}
