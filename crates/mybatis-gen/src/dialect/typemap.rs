//! Dialect-keyed SQL type → Java type tables.
//!
//! A [`TypeMapper`] is constructed once (optionally with configured overrides)
//! and then only read, so a single `Arc<TypeMapper>` can be shared by every
//! parser and request without locking.

use std::collections::HashMap;

use super::{Dialect, JavaType};

/// MySQL base type mappings.
///
/// `TINYINT` maps to `Integer` here; `TINYINT(1)` is special-cased in
/// [`TypeMapper::map_for`], as is `FLOAT(p)` in both dialects.
const MYSQL_MAPPINGS: &[(&str, JavaType)] = &[
    ("INT", JavaType::Integer),
    ("INTEGER", JavaType::Integer),
    ("SMALLINT", JavaType::Integer),
    ("MEDIUMINT", JavaType::Integer),
    ("TINYINT", JavaType::Integer),
    ("BIGINT", JavaType::Long),
    ("DECIMAL", JavaType::BigDecimal),
    ("NUMERIC", JavaType::BigDecimal),
    ("FLOAT", JavaType::Float),
    ("DOUBLE", JavaType::Double),
    ("DOUBLE PRECISION", JavaType::Double),
    ("REAL", JavaType::Double),
    ("BOOLEAN", JavaType::Boolean),
    ("BOOL", JavaType::Boolean),
    ("DATE", JavaType::LocalDate),
    ("TIME", JavaType::LocalTime),
    ("TIMESTAMP", JavaType::LocalDateTime),
    ("DATETIME", JavaType::LocalDateTime),
    ("CHAR", JavaType::String),
    ("VARCHAR", JavaType::String),
    ("TEXT", JavaType::String),
    ("TINYTEXT", JavaType::String),
    ("MEDIUMTEXT", JavaType::String),
    ("LONGTEXT", JavaType::String),
    ("BLOB", JavaType::ByteArray),
    ("MEDIUMBLOB", JavaType::ByteArray),
    ("LONGBLOB", JavaType::ByteArray),
    ("BINARY", JavaType::ByteArray),
    ("VARBINARY", JavaType::ByteArray),
];

/// PostgreSQL base type mappings.
const POSTGRES_MAPPINGS: &[(&str, JavaType)] = &[
    ("INT", JavaType::Integer),
    ("INTEGER", JavaType::Integer),
    ("SMALLINT", JavaType::Integer),
    ("INT2", JavaType::Integer),
    ("INT4", JavaType::Integer),
    ("SERIAL", JavaType::Integer),
    ("SMALLSERIAL", JavaType::Integer),
    ("BIGINT", JavaType::Long),
    ("BIGSERIAL", JavaType::Long),
    ("INT8", JavaType::Long),
    ("DECIMAL", JavaType::BigDecimal),
    ("NUMERIC", JavaType::BigDecimal),
    ("REAL", JavaType::Float),
    ("FLOAT4", JavaType::Float),
    ("FLOAT", JavaType::Double),
    ("DOUBLE PRECISION", JavaType::Double),
    ("FLOAT8", JavaType::Double),
    ("BOOLEAN", JavaType::Boolean),
    ("BOOL", JavaType::Boolean),
    ("DATE", JavaType::LocalDate),
    ("TIME", JavaType::LocalTime),
    ("TIME WITHOUT TIME ZONE", JavaType::LocalTime),
    ("TIME WITH TIME ZONE", JavaType::LocalTime),
    ("TIMETZ", JavaType::LocalTime),
    ("TIMESTAMP", JavaType::LocalDateTime),
    ("TIMESTAMP WITHOUT TIME ZONE", JavaType::LocalDateTime),
    ("TIMESTAMP WITH TIME ZONE", JavaType::LocalDateTime),
    ("TIMESTAMPTZ", JavaType::LocalDateTime),
    ("CHAR", JavaType::String),
    ("CHARACTER", JavaType::String),
    ("VARCHAR", JavaType::String),
    ("CHARACTER VARYING", JavaType::String),
    ("TEXT", JavaType::String),
    ("BYTEA", JavaType::ByteArray),
    ("UUID", JavaType::Uuid),
    ("JSON", JavaType::String),
    ("JSONB", JavaType::String),
    ("ARRAY", JavaType::List),
    ("INTERVAL", JavaType::Duration),
];

/// Largest `FLOAT(p)` precision stored in single precision.
const SINGLE_PRECISION_BITS: u32 = 24;

/// Trailing numeric modifiers the MySQL grammar renders after the base type.
const NUMERIC_MODIFIERS: &[&str] = &["UNSIGNED", "SIGNED", "ZEROFILL"];

/// Immutable (dialect, SQL base type) → Java type table.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    mappings: HashMap<Dialect, HashMap<String, JavaType>>,
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TypeMapper {
    /// Create a mapper with the built-in MySQL and PostgreSQL tables.
    pub fn with_defaults() -> Self {
        let mut mappings = HashMap::new();
        mappings.insert(Dialect::MySql, to_table(MYSQL_MAPPINGS));
        mappings.insert(Dialect::Postgres, to_table(POSTGRES_MAPPINGS));
        Self { mappings }
    }

    /// Add or replace mappings for one dialect.
    ///
    /// Keys are normalized the same way lookups are, so `"citext"` and
    /// `"CITEXT(10)"` register the same base type.
    pub fn with_overrides<I, K>(mut self, dialect: Dialect, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, JavaType)>,
        K: AsRef<str>,
    {
        let table = self.mappings.entry(dialect).or_default();
        for (sql_type, java_type) in entries {
            let normalized = sql_type.as_ref().trim().to_uppercase();
            table.insert(base_type(&normalized), java_type);
        }
        self
    }

    /// Map a SQL type for a dialect given by name.
    ///
    /// Unknown dialects and unmapped types fall back to [`JavaType::String`].
    pub fn map(&self, sql_type: &str, dialect: &str) -> JavaType {
        match Dialect::from_name(dialect) {
            Some(dialect) => self.map_for(sql_type, dialect),
            None => JavaType::default(),
        }
    }

    /// Map a SQL type for a known dialect.
    pub fn map_for(&self, sql_type: &str, dialect: Dialect) -> JavaType {
        let normalized = sql_type.trim().to_uppercase();

        // TINYINT(1) is MySQL's boolean; the suffix must be checked before it is stripped.
        if dialect == Dialect::MySql && normalized.starts_with("TINYINT(1)") {
            return JavaType::Boolean;
        }
        if let Some(java_type) = float_by_precision(&normalized) {
            return java_type;
        }

        self.mappings
            .get(&dialect)
            .and_then(|table| table.get(&base_type(&normalized)))
            .copied()
            .unwrap_or_default()
    }

    /// Registered base type names for a dialect, sorted.
    pub fn base_types(&self, dialect: Dialect) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .mappings
            .get(&dialect)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }
}

fn to_table(entries: &[(&str, JavaType)]) -> HashMap<String, JavaType> {
    entries
        .iter()
        .map(|(name, java_type)| (name.to_string(), *java_type))
        .collect()
}

/// Reduce an uppercased type rendering to its lookup key.
///
/// Parenthesized length/precision groups are dropped wherever they appear
/// (`TIMESTAMP(3) WITH TIME ZONE` → `TIMESTAMP WITH TIME ZONE`), array
/// renderings collapse to `ARRAY`, and trailing numeric modifiers are removed.
/// `FLOAT(p)`: single precision up to 24 bits, double above.
fn float_by_precision(normalized: &str) -> Option<JavaType> {
    let precision: u32 = normalized
        .strip_prefix("FLOAT(")?
        .split(')')
        .next()?
        .trim()
        .parse()
        .ok()?;
    Some(if precision <= SINGLE_PRECISION_BITS {
        JavaType::Float
    } else {
        JavaType::Double
    })
}

fn base_type(normalized: &str) -> String {
    if normalized.ends_with(']') || normalized.starts_with("ARRAY") {
        return "ARRAY".to_string();
    }

    let mut stripped = String::with_capacity(normalized.len());
    let mut depth = 0usize;
    for c in normalized.chars() {
        match c {
            '(' | '<' => depth += 1,
            ')' | '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 => stripped.push(c),
            _ => {}
        }
    }

    let mut words: Vec<&str> = stripped.split_whitespace().collect();
    while words.len() > 1
        && words
            .last()
            .is_some_and(|w| NUMERIC_MODIFIERS.contains(w))
    {
        words.pop();
    }
    words.join(" ")
}
