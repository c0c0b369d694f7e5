//! MySQL CREATE TABLE parser.

use std::collections::HashSet;
use std::sync::Arc;

use sqlparser::ast::CreateTable;
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;

use crate::core::identifier::last_segment;
use crate::core::schema::{Field, TableDescription};
use crate::core::traits::{DdlParser, ParseOptions};
use crate::dialect::{Dialect, TypeMapper};
use crate::drivers::common::{
    constraint_key_columns, create_tables, has_inline_primary_key, inline_comment, table_comment,
};
use crate::error::{GenError, Result};

/// MySQL DDL parser.
///
/// Column types the `sqlparser` MySQL grammar does not accept are reported as
/// [`GenError::GrammarRejected`]: the two-argument `FLOAT(M,D)` form and the
/// `ZEROFILL` attribute. `DOUBLE(M,D)` and `DOUBLE PRECISION` are accepted.
#[derive(Debug, Clone)]
pub struct MysqlParser {
    mapper: Arc<TypeMapper>,
    options: ParseOptions,
}

impl MysqlParser {
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

    fn describe(&self, create: &CreateTable) -> Result<TableDescription> {
        let table_name = table_name(create);
        if table_name.is_empty() {
            return Err(GenError::NoTableFound);
        }

        let primary_keys = primary_keys(create);

        let fields = create
            .columns
            .iter()
            .map(|col| {
                let name = col.name.value.clone();
                let sql_type = col.data_type.to_string();
                let declared = primary_keys.contains(&name.to_lowercase());
                Field {
                    is_primary_key: self.options.is_primary_key(&name, declared),
                    target_type: self.mapper.map_for(&sql_type, Dialect::MySql),
                    comment: inline_comment(col).unwrap_or_default().to_string(),
                    sql_type,
                    name,
                }
            })
            .collect();

        Ok(TableDescription {
            table_name,
            fields,
            comment: table_comment(create),
            ignored_tables: Vec::new(),
        })
    }
}

impl DdlParser for MysqlParser {
    fn parse(&self, ddl: &str) -> Result<TableDescription> {
        let statements = Parser::parse_sql(&MySqlDialect {}, ddl)
            .map_err(|e| GenError::grammar(Dialect::MySql, e))?;

        let mut tables = create_tables(&statements);
        let first = tables.next().ok_or(GenError::NoTableFound)?;

        let mut description = self.describe(first)?;
        description.ignored_tables = tables.map(table_name).collect();
        Ok(description)
    }

    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }
}

fn table_name(create: &CreateTable) -> String {
    last_segment(&create.name)
        .map(|ident| ident.value.clone())
        .unwrap_or_default()
}

/// Lower-cased names of every declared primary-key column.
fn primary_keys(create: &CreateTable) -> HashSet<String> {
    let table_level = constraint_key_columns(create).map(|ident| ident.value.to_lowercase());
    let inline = create
        .columns
        .iter()
        .filter(|col| has_inline_primary_key(col))
        .map(|col| col.name.value.to_lowercase());
    table_level.chain(inline).collect()
}
