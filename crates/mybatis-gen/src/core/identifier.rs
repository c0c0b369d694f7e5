//! Identifier normalization for parsed DDL and Java package names.
//!
//! The grammar returns identifiers exactly as written. PostgreSQL folds
//! unquoted identifiers to lower case, so comment and constraint lookups must
//! fold them the same way before comparing names across statements.

use sqlparser::ast::{Ident, ObjectName, ObjectNamePart};

use crate::error::{GenError, Result};

/// Reserved words that cannot appear as a Java package segment.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null",
];

/// PostgreSQL identifier: unquoted names fold to lower case, quoted names are kept.
pub fn pg_ident(ident: &Ident) -> String {
    if ident.quote_style.is_some() {
        ident.value.clone()
    } else {
        ident.value.to_lowercase()
    }
}

/// Last segment of a possibly schema-qualified name, unmodified.
pub fn last_segment(name: &ObjectName) -> Option<&Ident> {
    name.0.last().and_then(ObjectNamePart::as_ident)
}

/// Segment of a qualified name counted from the end (0 = last).
pub fn segment_from_end(name: &ObjectName, offset: usize) -> Option<&Ident> {
    let len = name.0.len();
    if offset < len {
        name.0.get(len - 1 - offset).and_then(ObjectNamePart::as_ident)
    } else {
        None
    }
}

/// Validate a dot-separated Java package name.
///
/// # Errors
///
/// Returns `GenError::Config` naming the offending segment.
pub fn validate_package(package: &str) -> Result<()> {
    if package.is_empty() {
        return Err(GenError::Config("package name cannot be empty".to_string()));
    }

    for segment in package.split('.') {
        let mut chars = segment.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$');
        let valid_rest = chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');
        if !valid_start || !valid_rest {
            return Err(GenError::Config(format!(
                "invalid package segment '{}' in '{}'",
                segment, package
            )));
        }
        if JAVA_KEYWORDS.contains(&segment) {
            return Err(GenError::Config(format!(
                "package segment '{}' in '{}' is a Java keyword",
                segment, package
            )));
        }
    }

    Ok(())
}
