//! First pass: collect comments and primary keys from a whole script.

use std::collections::{HashMap, HashSet};

use sqlparser::ast::{CommentObject, Statement};

use crate::core::identifier::{last_segment, pg_ident, segment_from_end};
use crate::drivers::common::{constraint_key_columns, has_inline_primary_key};

/// Per-table comments and primary keys declared anywhere in a script.
///
/// All names are stored PostgreSQL-folded and without schema qualification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptFacts {
    column_comments: HashMap<String, HashMap<String, String>>,
    table_comments: HashMap<String, String>,
    primary_keys: HashMap<String, HashSet<String>>,
}

impl ScriptFacts {
    /// Scan every statement of a parsed script.
    pub fn collect(statements: &[Statement]) -> Self {
        let mut facts = Self::default();

        for stmt in statements {
            match stmt {
                Statement::Comment {
                    object_type,
                    object_name,
                    comment: Some(text),
                    ..
                } => match object_type {
                    CommentObject::Column => {
                        let column = segment_from_end(object_name, 0);
                        let table = segment_from_end(object_name, 1);
                        if let (Some(table), Some(column)) = (table, column) {
                            facts
                                .column_comments
                                .entry(pg_ident(table))
                                .or_default()
                                .insert(pg_ident(column), text.clone());
                        }
                    }
                    CommentObject::Table => {
                        if let Some(table) = last_segment(object_name) {
                            facts.table_comments.insert(pg_ident(table), text.clone());
                        }
                    }
                    _ => {}
                },
                Statement::CreateTable(create) => {
                    let Some(table) = last_segment(&create.name).map(pg_ident) else {
                        continue;
                    };
                    let keys = facts.primary_keys.entry(table).or_default();
                    keys.extend(constraint_key_columns(create).map(pg_ident));
                    keys.extend(
                        create
                            .columns
                            .iter()
                            .filter(|col| has_inline_primary_key(col))
                            .map(|col| pg_ident(&col.name)),
                    );
                }
                _ => {}
            }
        }

        facts
    }

    /// Comment recorded for `table.column`.
    pub fn column_comment(&self, table: &str, column: &str) -> Option<&str> {
        self.column_comments
            .get(table)
            .and_then(|columns| columns.get(column))
            .map(String::as_str)
    }

    /// Comment recorded for a table.
    pub fn table_comment(&self, table: &str) -> Option<&str> {
        self.table_comments.get(table).map(String::as_str)
    }

    /// Check if a column is declared as (part of) the table's primary key.
    pub fn is_declared_key(&self, table: &str, column: &str) -> bool {
        self.primary_keys
            .get(table)
            .is_some_and(|keys| keys.contains(column))
    }
}
