//! Error types for the generator library.

use sqlparser::parser::ParserError;
use thiserror::Error;

use crate::dialect::Dialect;

/// Main error type for DDL parsing and code-generation preparation.
#[derive(Error, Debug)]
pub enum GenError {
    /// The dialect grammar rejected the input text (malformed SQL).
    #[error("failed to parse {dialect} SQL: {source}")]
    GrammarRejected {
        dialect: Dialect,
        #[source]
        source: ParserError,
    },

    /// The input parsed but holds no CREATE TABLE statement (or no statements at all).
    #[error("no CREATE TABLE statement found")]
    NoTableFound,

    /// The requested dialect name matches no known parser.
    #[error("unsupported database type: {0} (supported: mysql, postgresql)")]
    UnsupportedDialect(String),

    /// Configuration error (invalid YAML, bad package name, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (reading DDL or configuration files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenError {
    /// Wrap a grammar failure for the given dialect.
    pub fn grammar(dialect: Dialect, source: ParserError) -> Self {
        GenError::GrammarRejected { dialect, source }
    }

    /// Exit code used by the CLI for this error.
    ///
    /// - 2: configuration or unsupported dialect
    /// - 3: DDL rejected or no table found
    /// - 4: IO
    /// - 1: anything else
    pub fn exit_code(&self) -> u8 {
        match self {
            GenError::Config(_) | GenError::UnsupportedDialect(_) | GenError::Yaml(_) => 2,
            GenError::GrammarRejected { .. } | GenError::NoTableFound => 3,
            GenError::Io(_) => 4,
            GenError::Json(_) => 1,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GenError>;
