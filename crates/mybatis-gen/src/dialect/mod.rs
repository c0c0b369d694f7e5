//! SQL dialects and type mapping.
//!
//! This module provides:
//!
//! - [`Dialect`]: the closed set of DDL dialects the parsers understand
//! - [`JavaType`]: the Java types a column can map to
//! - [`TypeMapper`]: the immutable (dialect, SQL type) → Java type table
//!
//! # Usage
//!
//! The mapper is built once at startup and shared by handle:
//!
//! ```rust
//! use std::sync::Arc;
//! use mybatis_gen::dialect::{JavaType, TypeMapper};
//!
//! let mapper = Arc::new(TypeMapper::with_defaults());
//! assert_eq!(mapper.map("TINYINT(1)", "mysql"), JavaType::Boolean);
//! assert_eq!(mapper.map("jsonb", "postgresql"), JavaType::String);
//! ```

mod java;
mod typemap;

pub use java::JavaType;
pub use typemap::TypeMapper;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenError;

/// DDL dialect understood by the parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dialect {
    /// MySQL / MariaDB style DDL.
    #[serde(rename = "mysql", alias = "mariadb")]
    MySql,
    /// PostgreSQL style DDL.
    #[serde(rename = "postgresql", alias = "postgres", alias = "pg")]
    Postgres,
}

impl Dialect {
    /// All supported dialects.
    pub const ALL: [Dialect; 2] = [Dialect::MySql, Dialect::Postgres];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgresql",
        }
    }

    /// Accepted spellings, canonical name first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Dialect::MySql => &["mysql", "mariadb"],
            Dialect::Postgres => &["postgresql", "postgres", "pg"],
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.aliases().contains(&name.as_str()))
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::from_name(s).ok_or_else(|| GenError::UnsupportedDialect(s.to_string()))
    }
}
