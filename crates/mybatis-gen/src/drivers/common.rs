//! Statement helpers shared by the dialect parsers.

use sqlparser::ast::{
    ColumnDef, ColumnOption, CreateTable, CreateTableOptions, Expr, Ident, IndexColumn, SqlOption,
    Statement, TableConstraint,
};

/// CREATE TABLE statements of a script, in script order.
pub fn create_tables(statements: &[Statement]) -> impl Iterator<Item = &CreateTable> {
    statements.iter().filter_map(|stmt| match stmt {
        Statement::CreateTable(create) => Some(create),
        _ => None,
    })
}

/// Columns named by table-level `PRIMARY KEY (...)` constraints.
pub fn constraint_key_columns(create: &CreateTable) -> impl Iterator<Item = &Ident> {
    create
        .constraints
        .iter()
        .filter_map(|constraint| match constraint {
            TableConstraint::PrimaryKey { columns, .. } => Some(columns.iter()),
            _ => None,
        })
        .flatten()
        .filter_map(key_column)
}

fn key_column(column: &IndexColumn) -> Option<&Ident> {
    match &column.column.expr {
        Expr::Identifier(ident) => Some(ident),
        Expr::CompoundIdentifier(parts) => parts.last(),
        _ => None,
    }
}

/// Check if a column carries an inline `PRIMARY KEY` option.
pub fn has_inline_primary_key(column: &ColumnDef) -> bool {
    column
        .options
        .iter()
        .any(|def| matches!(def.option, ColumnOption::Unique { is_primary: true, .. }))
}

/// Inline `COMMENT '...'` column option, if any.
pub fn inline_comment(column: &ColumnDef) -> Option<&str> {
    column.options.iter().find_map(|def| match &def.option {
        ColumnOption::Comment(text) => Some(text.as_str()),
        _ => None,
    })
}

/// Table-level `COMMENT [=] '...'`, wherever the grammar stored it.
pub fn table_comment(create: &CreateTable) -> Option<String> {
    let options: &[SqlOption] = match &create.table_options {
        CreateTableOptions::Plain(options)
        | CreateTableOptions::With(options)
        | CreateTableOptions::Options(options)
        | CreateTableOptions::TableProperties(options) => options,
        CreateTableOptions::None => &[],
    };

    create
        .comment
        .iter()
        .chain(options.iter().filter_map(|option| match option {
            SqlOption::Comment(comment) => Some(comment),
            _ => None,
        }))
        .next()
        .map(|comment| comment.to_string())
}
