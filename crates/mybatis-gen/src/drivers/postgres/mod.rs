//! PostgreSQL DDL driver.
//!
//! Comments live in separate `COMMENT ON` statements that may appear before
//! or after the CREATE TABLE they describe, and primary keys may be declared
//! inline or as table constraints. Parsing therefore runs in two passes:
//!
//! 1. [`ScriptFacts::collect`] gathers comments and primary keys from every
//!    statement, keyed by table.
//! 2. [`assemble`] builds the description of the first CREATE TABLE from
//!    those facts.

mod facts;
mod parser;

pub use facts::ScriptFacts;
pub use parser::{assemble, PostgresParser};
