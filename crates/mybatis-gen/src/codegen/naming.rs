//! Java naming derived from SQL identifiers.

use convert_case::{Case, Casing};

/// Remove a table prefix (ASCII case-insensitive) if the name is longer than it.
pub fn strip_prefix<'a>(table: &'a str, prefix: Option<&str>) -> &'a str {
    match prefix {
        Some(prefix)
            if table.len() > prefix.len()
                && table.is_char_boundary(prefix.len())
                && table[..prefix.len()].eq_ignore_ascii_case(prefix) =>
        {
            &table[prefix.len()..]
        }
        _ => table,
    }
}

/// UpperCamelCase class stem for a table (`order_item` → `OrderItem`).
pub fn class_stem(table: &str) -> String {
    table.to_case(Case::Pascal)
}

/// lowerCamelCase Java identifier (`created_at` → `createdAt`).
pub fn lower_camel(name: &str) -> String {
    name.to_case(Case::Camel)
}
