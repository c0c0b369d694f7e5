//! Java target types for generated data objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenError;

/// Java type a SQL column maps to.
///
/// Serializes as the Java spelling (`Integer`, `byte[]`, `UUID`, ...) so
/// templates can print it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JavaType {
    Integer,
    Long,
    BigDecimal,
    Float,
    Double,
    Boolean,
    LocalDate,
    LocalTime,
    LocalDateTime,
    #[default]
    String,
    #[serde(rename = "byte[]")]
    ByteArray,
    #[serde(rename = "UUID")]
    Uuid,
    List,
    Duration,
}

impl JavaType {
    const ALL: [JavaType; 14] = [
        JavaType::Integer,
        JavaType::Long,
        JavaType::BigDecimal,
        JavaType::Float,
        JavaType::Double,
        JavaType::Boolean,
        JavaType::LocalDate,
        JavaType::LocalTime,
        JavaType::LocalDateTime,
        JavaType::String,
        JavaType::ByteArray,
        JavaType::Uuid,
        JavaType::List,
        JavaType::Duration,
    ];

    /// Java source spelling of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            JavaType::Integer => "Integer",
            JavaType::Long => "Long",
            JavaType::BigDecimal => "BigDecimal",
            JavaType::Float => "Float",
            JavaType::Double => "Double",
            JavaType::Boolean => "Boolean",
            JavaType::LocalDate => "LocalDate",
            JavaType::LocalTime => "LocalTime",
            JavaType::LocalDateTime => "LocalDateTime",
            JavaType::String => "String",
            JavaType::ByteArray => "byte[]",
            JavaType::Uuid => "UUID",
            JavaType::List => "List",
            JavaType::Duration => "Duration",
        }
    }

    /// Fully qualified import, or `None` for `java.lang` types and primitives.
    pub fn import_path(&self) -> Option<&'static str> {
        match self {
            JavaType::BigDecimal => Some("java.math.BigDecimal"),
            JavaType::LocalDate => Some("java.time.LocalDate"),
            JavaType::LocalTime => Some("java.time.LocalTime"),
            JavaType::LocalDateTime => Some("java.time.LocalDateTime"),
            JavaType::Duration => Some("java.time.Duration"),
            JavaType::Uuid => Some("java.util.UUID"),
            JavaType::List => Some("java.util.List"),
            _ => None,
        }
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JavaType {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| GenError::Config(format!("unknown Java type '{}'", s)))
    }
}
