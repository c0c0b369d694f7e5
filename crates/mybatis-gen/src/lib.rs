//! # mybatis-gen
//!
//! Turn a SQL `CREATE TABLE` statement into the model a template engine needs
//! to generate MyBatis / MyBatis-Plus data-access code.
//!
//! This library provides:
//!
//! - **DDL parsing** for MySQL and PostgreSQL via the `sqlparser` grammars
//! - **Primary-key detection** from inline and table-level constraints
//! - **Comment recovery**, including PostgreSQL `COMMENT ON` statements
//!   declared anywhere in the script
//! - **Type mapping** from SQL column types to Java types
//! - **Template data** with class names, camelCase properties and imports
//!
//! ## Example
//!
//! ```rust
//! use mybatis_gen::{prepare_template_data, DdlParser, GeneratorConfig, ParserCatalog};
//!
//! let catalog = ParserCatalog::with_builtins();
//! let parser = catalog.new_parser("mysql")?;
//! let table = parser.parse(
//!     "CREATE TABLE users (id INT PRIMARY KEY, name VARCHAR(50) COMMENT 'user name')",
//! )?;
//!
//! let data = prepare_template_data(&table, &GeneratorConfig::default());
//! assert_eq!(data.do_class_name, "UsersDO");
//! assert_eq!(data.fields[1].comment, "user name");
//! # Ok::<(), mybatis_gen::GenError>(())
//! ```

pub mod codegen;
pub mod config;
pub mod core;
pub mod dialect;
pub mod drivers;
pub mod error;

// Re-exports for convenient access
pub use codegen::{prepare_template_data, TemplateData, TemplateField};
pub use config::{GeneratorConfig, OrmFlavor, PackageConfig};
pub use crate::core::{DdlParser, Field, ParseOptions, ParserCatalog, TableDescription};
pub use dialect::{Dialect, JavaType, TypeMapper};
pub use drivers::{new_parser, MysqlParser, ParserImpl, PostgresParser};
pub use error::{GenError, Result};
