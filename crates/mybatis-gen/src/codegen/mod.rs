//! Normalization of parsed tables into template-ready records.
//!
//! The parsers stop at [`TableDescription`](crate::TableDescription); this
//! module derives everything a template engine needs to emit the data object,
//! mapper, DAO, DAO implementation and XML mapper:
//!
//! - [`naming`]: class, property and variable names
//! - [`imports`]: Java type imports and ORM annotation imports
//! - [`template`]: the [`TemplateData`] record itself

pub mod imports;
pub mod naming;
mod template;

pub use template::{prepare_template_data, TemplateData, TemplateField};
