//! Import collection for generated Java sources.

use std::collections::BTreeSet;

use crate::config::OrmFlavor;
use crate::core::schema::Field;

/// Sorted, de-duplicated imports needed by the fields' Java types.
pub fn java_imports(fields: &[Field]) -> Vec<String> {
    fields
        .iter()
        .filter_map(|f| f.target_type.import_path())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Sorted ORM annotation imports for the data object.
///
/// Key annotations are only imported when the table has a primary key.
pub fn orm_imports(orm: OrmFlavor, has_pk: bool) -> Vec<String> {
    let (table, keys): (&str, &[&str]) = match orm {
        OrmFlavor::MybatisPlus => (
            "com.baomidou.mybatisplus.annotation.TableName",
            &[
                "com.baomidou.mybatisplus.annotation.IdType",
                "com.baomidou.mybatisplus.annotation.TableId",
            ],
        ),
        OrmFlavor::MybatisFlex => (
            "com.mybatisflex.annotation.Table",
            &[
                "com.mybatisflex.annotation.Id",
                "com.mybatisflex.annotation.KeyType",
            ],
        ),
    };

    let mut imports = vec![table.to_string()];
    if has_pk {
        imports.extend(keys.iter().map(|k| k.to_string()));
    }
    imports.sort();
    imports
}
