//! Configuration type definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dialect::JavaType;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// DDL dialect name (default: "mysql").
    #[serde(default = "default_dialect")]
    pub dialect: String,

    /// MyBatis flavor the generated code targets.
    #[serde(default)]
    pub orm: OrmFlavor,

    /// Treat a column named `id` as primary key when no constraint declares one.
    #[serde(default = "default_true")]
    pub id_fallback: bool,

    /// Prefix removed from table names before deriving class names (e.g. "t_").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_table_prefix: Option<String>,

    /// Java packages of the generated artifacts.
    #[serde(default)]
    pub packages: PackageConfig,

    /// Extra or replacement type mappings, keyed by dialect name then SQL type.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub type_overrides: BTreeMap<String, BTreeMap<String, JavaType>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dialect: default_dialect(),
            orm: OrmFlavor::default(),
            id_fallback: true,
            strip_table_prefix: None,
            packages: PackageConfig::default(),
            type_overrides: BTreeMap::new(),
        }
    }
}

/// MyBatis flavor the templates are written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrmFlavor {
    /// MyBatis-Plus (`com.baomidou.mybatisplus`).
    #[default]
    MybatisPlus,

    /// MyBatis-Flex (`com.mybatisflex`).
    MybatisFlex,
}

impl OrmFlavor {
    /// Template directory name for this flavor.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrmFlavor::MybatisPlus => "mybatis-plus",
            OrmFlavor::MybatisFlex => "mybatis-flex",
        }
    }
}

/// Java packages for each generated artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    /// Data object package.
    #[serde(default = "default_entity_package")]
    pub entity: String,

    /// Mapper interface package (also the XML namespace root).
    #[serde(default = "default_mapper_package")]
    pub mapper: String,

    /// DAO interface package.
    #[serde(default = "default_dao_package")]
    pub dao: String,

    /// DAO implementation package.
    #[serde(default = "default_dao_impl_package")]
    pub dao_impl: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            entity: default_entity_package(),
            mapper: default_mapper_package(),
            dao: default_dao_package(),
            dao_impl: default_dao_impl_package(),
        }
    }
}

impl PackageConfig {
    /// All packages with their config keys, for validation and reporting.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("packages.entity", &self.entity),
            ("packages.mapper", &self.mapper),
            ("packages.dao", &self.dao),
            ("packages.dao_impl", &self.dao_impl),
        ]
    }
}

// Default value functions for serde
fn default_dialect() -> String {
    "mysql".to_string()
}

fn default_entity_package() -> String {
    "com.example.entity".to_string()
}

fn default_mapper_package() -> String {
    "com.example.mapper".to_string()
}

fn default_dao_package() -> String {
    "com.example.dao".to_string()
}

fn default_dao_impl_package() -> String {
    "com.example.dao.impl".to_string()
}

fn default_true() -> bool {
    true
}
