//! End-to-end parsing tests through the public API.
//!
//! Each test goes from raw DDL text and a dialect name to the parsed table or
//! the template record, the way the CLI and other callers use the library.

use std::sync::Arc;
use std::thread;

use mybatis_gen::{
    new_parser, prepare_template_data, DdlParser, Dialect, GenError, GeneratorConfig, JavaType,
    ParserCatalog, TypeMapper,
};

const MYSQL_SCHEMA: &str = r#"
-- Users of the shop
CREATE TABLE IF NOT EXISTS `sys_user` (
  `id` BIGINT(20) UNSIGNED NOT NULL AUTO_INCREMENT COMMENT 'primary key',
  `user_name` VARCHAR(64) NOT NULL COMMENT 'login name',
  `balance` DECIMAL(12,2) DEFAULT NULL,
  `enabled` TINYINT(1) NOT NULL DEFAULT 1 COMMENT 'account enabled',
  `login_count` TINYINT(4) NOT NULL DEFAULT 0,
  `avatar` BLOB,
  `birthday` DATE,
  `created_at` DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
  PRIMARY KEY (`id`),
  UNIQUE KEY `uk_user_name` (`user_name`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;
"#;

const POSTGRES_SCHEMA: &str = r#"
COMMENT ON COLUMN app_user.email IS 'contact address';

CREATE TABLE app_user (
    user_id uuid NOT NULL,
    email character varying(255) NOT NULL,
    score double precision,
    last_seen timestamp without time zone,
    session_ttl interval,
    CONSTRAINT app_user_pkey PRIMARY KEY (user_id)
);

COMMENT ON TABLE app_user IS 'application users';
COMMENT ON COLUMN app_user.score IS 'ranking score';
"#;

#[test]
fn test_mysql_schema() {
    let table = new_parser("mysql").unwrap().parse(MYSQL_SCHEMA).unwrap();

    assert_eq!(table.table_name, "sys_user");
    assert_eq!(table.fields.len(), 8);

    let expect = [
        ("id", JavaType::Long, "primary key", true),
        ("user_name", JavaType::String, "login name", false),
        ("balance", JavaType::BigDecimal, "", false),
        ("enabled", JavaType::Boolean, "account enabled", false),
        ("login_count", JavaType::Integer, "", false),
        ("avatar", JavaType::ByteArray, "", false),
        ("birthday", JavaType::LocalDate, "", false),
        ("created_at", JavaType::LocalDateTime, "", false),
    ];
    for (field, (name, java_type, comment, pk)) in table.fields.iter().zip(expect) {
        assert_eq!(field.name, name);
        assert_eq!(field.target_type, java_type, "{}", name);
        assert_eq!(field.comment, comment, "{}", name);
        assert_eq!(field.is_primary_key, pk, "{}", name);
    }
}

#[test]
fn test_postgres_schema_resolves_comments_in_any_order() {
    let table = new_parser("postgresql").unwrap().parse(POSTGRES_SCHEMA).unwrap();

    assert_eq!(table.table_name, "app_user");
    assert_eq!(table.comment.as_deref(), Some("application users"));

    let user_id = table.field("user_id").unwrap();
    assert!(user_id.is_primary_key);
    assert_eq!(user_id.target_type, JavaType::Uuid);

    // Declared before the CREATE TABLE.
    assert_eq!(table.field("email").unwrap().comment, "contact address");
    // Declared after it.
    assert_eq!(table.field("score").unwrap().comment, "ranking score");
    assert_eq!(table.field("score").unwrap().target_type, JavaType::Double);
    assert_eq!(
        table.field("last_seen").unwrap().target_type,
        JavaType::LocalDateTime
    );
    assert_eq!(
        table.field("session_ttl").unwrap().target_type,
        JavaType::Duration
    );
}

#[test]
fn test_id_column_without_constraint_is_primary_key_in_both_dialects() {
    for dialect in ["mysql", "postgres"] {
        let table = new_parser(dialect)
            .unwrap()
            .parse("CREATE TABLE t (id INT, label VARCHAR(10))")
            .unwrap();
        assert!(table.fields[0].is_primary_key, "{}", dialect);
        assert!(!table.fields[1].is_primary_key, "{}", dialect);
    }
}

#[test]
fn test_no_create_table_in_both_dialects() {
    for dialect in ["mysql", "postgresql"] {
        let parser = new_parser(dialect).unwrap();
        assert!(matches!(
            parser.parse("DROP TABLE IF EXISTS t;"),
            Err(GenError::NoTableFound)
        ));
        assert!(matches!(parser.parse(""), Err(GenError::NoTableFound)));
    }
}

#[test]
fn test_unsupported_dialect() {
    for name in ["oracle", "sqlite", "", "my sql"] {
        assert!(matches!(
            new_parser(name),
            Err(GenError::UnsupportedDialect(_))
        ));
    }
}

#[test]
fn test_grammar_rejection_is_wrapped() {
    let err = new_parser("mysql")
        .unwrap()
        .parse("CREATE TABLE broken (id INT")
        .unwrap_err();
    assert!(matches!(err, GenError::GrammarRejected { .. }));
    assert!(err.to_string().starts_with("failed to parse mysql SQL"));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_type_mapper_contract() {
    let mapper = TypeMapper::with_defaults();
    assert_eq!(mapper.map("VARCHAR(255)", "mysql"), JavaType::String);
    assert_eq!(mapper.map("TINYINT(1)", "mysql"), JavaType::Boolean);
    assert_eq!(mapper.map("TINYINT(4)", "mysql"), JavaType::Integer);
    assert_eq!(mapper.map("unknown_type", "mysql"), JavaType::String);
    assert_eq!(mapper.map("INT", "unknown_dialect"), JavaType::String);

    for dialect in Dialect::ALL {
        for base in mapper.base_types(dialect) {
            let upper = mapper.map_for(base, dialect);
            let lower = mapper.map_for(&format!(" {} ", base.to_lowercase()), dialect);
            assert_eq!(upper, lower, "{} {}", dialect, base);
        }
    }
}

#[test]
fn test_floating_point_columns_through_parse() {
    let cases: [(&str, &[(&str, JavaType)]); 2] = [
        (
            "postgresql",
            &[
                ("float", JavaType::Double),
                ("float(1)", JavaType::Float),
                ("float(24)", JavaType::Float),
                ("float(25)", JavaType::Double),
                ("float(53)", JavaType::Double),
                ("real", JavaType::Float),
                ("double precision", JavaType::Double),
                ("float4", JavaType::Float),
                ("float8", JavaType::Double),
            ],
        ),
        (
            "mysql",
            &[
                ("FLOAT", JavaType::Float),
                ("FLOAT(24)", JavaType::Float),
                ("FLOAT(53)", JavaType::Double),
                ("DOUBLE", JavaType::Double),
                ("DOUBLE(10,2)", JavaType::Double),
                ("DOUBLE PRECISION", JavaType::Double),
                ("REAL", JavaType::Double),
            ],
        ),
    ];

    for (dialect, columns) in cases {
        let parser = new_parser(dialect).unwrap();
        for (sql_type, expected) in columns {
            let ddl = format!("CREATE TABLE measure (val {})", sql_type);
            let table = parser
                .parse(&ddl)
                .unwrap_or_else(|e| panic!("{} {}: {}", dialect, sql_type, e));
            assert_eq!(
                table.fields[0].target_type, *expected,
                "{} {}",
                dialect, sql_type
            );
        }
    }
}

#[test]
fn test_catalog_parsers_run_concurrently() {
    let catalog = Arc::new(ParserCatalog::with_builtins());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let dialect = if i % 2 == 0 { "mysql" } else { "postgres" };
                let sql = format!("CREATE TABLE t{} (id INT, name VARCHAR(20))", i);
                catalog.new_parser(dialect).unwrap().parse(&sql).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let table = handle.join().unwrap();
        assert_eq!(table.table_name, format!("t{}", i));
        assert_eq!(table.fields.len(), 2);
    }
}

#[test]
fn test_parse_then_prepare_template_data() {
    let config = GeneratorConfig::from_yaml(
        "dialect: mysql\nstrip_table_prefix: sys_\npackages:\n  mapper: com.shop.mapper\n",
    )
    .unwrap();
    let catalog = ParserCatalog::from_config(&config).unwrap();
    let table = catalog
        .parser_for(config.dialect().unwrap())
        .parse(MYSQL_SCHEMA)
        .unwrap();

    let data = prepare_template_data(&table, &config);
    assert_eq!(data.do_class_name, "UserDO");
    assert_eq!(data.mapper_namespace, "com.shop.mapper.UserMapper");
    assert_eq!(data.id_field.as_deref(), Some("id"));
    assert_eq!(
        data.imports,
        [
            "java.math.BigDecimal",
            "java.time.LocalDate",
            "java.time.LocalDateTime"
        ]
    );
    assert_eq!(data.fields[1].name, "userName");
    assert_eq!(data.fields[1].column, "user_name");
}
