//! Normalized, dialect-independent table metadata produced by the parsers.

use serde::{Deserialize, Serialize};

use crate::dialect::JavaType;

/// One column of a parsed table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Column name as written in the DDL (PostgreSQL names are case-folded).
    pub name: String,

    /// Raw SQL type, including any length/precision suffix (`VARCHAR(255)`).
    pub sql_type: String,

    /// Mapped Java type; `String` when the SQL type is unmapped.
    pub target_type: JavaType,

    /// Column comment, empty when none was declared.
    pub comment: String,

    /// Whether the column is (or is treated as) part of the primary key.
    pub is_primary_key: bool,
}

/// One parsed table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescription {
    /// Table name without schema qualification.
    pub table_name: String,

    /// Columns in declaration order.
    pub fields: Vec<Field>,

    /// Table comment, if the script declared one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Further CREATE TABLE statements in the script that were not parsed.
    ///
    /// Only the first table of a script is described; callers should surface
    /// a non-empty list to the user.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignored_tables: Vec<String>,
}

impl TableDescription {
    /// Primary key fields, in declaration order.
    pub fn primary_keys(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_primary_key)
    }

    /// Check if any column is a primary key.
    pub fn has_pk(&self) -> bool {
        self.fields.iter().any(|f| f.is_primary_key)
    }

    /// Find a field by name, ignoring ASCII case.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Check if the script contained more than one table.
    pub fn is_partial_script(&self) -> bool {
        !self.ignored_tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, pk: bool) -> Field {
        Field {
            name: name.to_string(),
            sql_type: "INT".to_string(),
            target_type: JavaType::Integer,
            comment: String::new(),
            is_primary_key: pk,
        }
    }

    #[test]
    fn test_primary_key_helpers() {
        let table = TableDescription {
            table_name: "order_item".to_string(),
            fields: vec![field("order_id", true), field("item_id", true), field("qty", false)],
            ..Default::default()
        };
        assert!(table.has_pk());
        let pks: Vec<&str> = table.primary_keys().map(|f| f.name.as_str()).collect();
        assert_eq!(pks, ["order_id", "item_id"]);
        assert_eq!(table.field("QTY").map(|f| f.name.as_str()), Some("qty"));
        assert!(!table.is_partial_script());
    }

    #[test]
    fn test_serialization_skips_empty_extras() {
        let table = TableDescription {
            table_name: "t".to_string(),
            fields: vec![field("id", true)],
            ..Default::default()
        };
        let json = serde_json::to_value(&table).unwrap();
        assert!(json.get("comment").is_none());
        assert!(json.get("ignored_tables").is_none());
        assert_eq!(json["fields"][0]["target_type"], "Integer");
    }
}
