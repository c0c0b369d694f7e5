//! MySQL/MariaDB DDL driver.
//!
//! Column comments and table comments are inline options of the CREATE TABLE
//! statement, so a single statement holds everything [`MysqlParser`] needs.
//!
//! # Supported Syntax
//!
//! Anything the `sqlparser` MySQL grammar accepts: backtick-quoted
//! identifiers, `COMMENT '...'` column options, `ENGINE=` / `DEFAULT CHARSET=`
//! table options, `UNSIGNED` integer types, `DOUBLE(M,D)`. Not accepted by
//! the grammar: `FLOAT(M,D)` and `ZEROFILL`.

mod parser;

pub use parser::MysqlParser;
