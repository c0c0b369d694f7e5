//! Template-ready record handed to the external template engine.

use serde::Serialize;
use tracing::debug;

use crate::config::{GeneratorConfig, OrmFlavor};
use crate::core::schema::{Field, TableDescription};
use crate::dialect::JavaType;
use crate::error::Result;

use super::imports::{java_imports, orm_imports};
use super::naming::{class_stem, lower_camel, strip_prefix};

/// A field renamed for Java templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateField {
    /// lowerCamelCase property name.
    pub name: String,
    /// Original column name, for `@TableField` / XML column mappings.
    pub column: String,
    pub sql_type: String,
    pub java_type: JavaType,
    pub comment: String,
    pub is_id: bool,
}

impl From<&Field> for TemplateField {
    fn from(field: &Field) -> Self {
        Self {
            name: lower_camel(&field.name),
            column: field.name.clone(),
            sql_type: field.sql_type.clone(),
            java_type: field.target_type,
            comment: field.comment.clone(),
            is_id: field.is_primary_key,
        }
    }
}

/// Everything the five artifact templates need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateData {
    pub orm: OrmFlavor,
    pub table_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_comment: Option<String>,

    pub do_class_name: String,
    pub mapper_class_name: String,
    pub dao_class_name: String,
    pub dao_impl_class_name: String,
    pub mapper_var_name: String,

    pub do_package: String,
    pub mapper_package: String,
    pub dao_package: String,
    pub dao_impl_package: String,
    /// XML mapper namespace: `{mapper_package}.{mapper_class_name}`.
    pub mapper_namespace: String,

    pub fields: Vec<TemplateField>,
    /// Property name of the first primary-key field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_field: Option<String>,

    pub imports: Vec<String>,
    pub orm_imports: Vec<String>,
}

impl TemplateData {
    /// Pretty JSON for template engines that consume a data file.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Prepare template data for a parsed table.
pub fn prepare_template_data(table: &TableDescription, config: &GeneratorConfig) -> TemplateData {
    let stem_source = strip_prefix(&table.table_name, config.strip_table_prefix.as_deref());
    let stem = class_stem(stem_source);
    let mapper_class_name = format!("{}Mapper", stem);

    let fields: Vec<TemplateField> = table.fields.iter().map(TemplateField::from).collect();
    let id_field = fields.iter().find(|f| f.is_id).map(|f| f.name.clone());
    let packages = &config.packages;

    debug!(
        "Prepared template data for table {} ({} fields, class stem {})",
        table.table_name,
        fields.len(),
        stem
    );

    TemplateData {
        orm: config.orm,
        table_name: table.table_name.clone(),
        table_comment: table.comment.clone(),
        do_class_name: format!("{}DO", stem),
        dao_class_name: format!("{}DAO", stem),
        dao_impl_class_name: format!("{}DAOImpl", stem),
        mapper_var_name: format!("{}Mapper", lower_camel(stem_source)),
        do_package: packages.entity.clone(),
        mapper_package: packages.mapper.clone(),
        dao_package: packages.dao.clone(),
        dao_impl_package: packages.dao_impl.clone(),
        mapper_namespace: format!("{}.{}", packages.mapper, mapper_class_name),
        mapper_class_name,
        imports: java_imports(&table.fields),
        orm_imports: orm_imports(config.orm, table.has_pk()),
        fields,
        id_field,
    }
}
