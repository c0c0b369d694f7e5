//! Core abstractions shared by the dialect drivers.
//!
//! - [`schema`]: the normalized [`Field`] / [`TableDescription`] model
//! - [`traits`]: the [`DdlParser`] contract and [`ParseOptions`] policy
//! - [`catalog`]: [`ParserCatalog`], the injected parser factory
//! - [`identifier`]: identifier folding and package-name validation
//!
//! # Design Patterns
//!
//! - **Strategy**: each dialect parser implements [`DdlParser`]
//! - **Factory**: [`ParserCatalog`] builds parsers around one shared type mapper

pub mod catalog;
pub mod identifier;
pub mod schema;
pub mod traits;

pub use catalog::ParserCatalog;
pub use schema::{Field, TableDescription};
pub use traits::{DdlParser, ParseOptions};
