//! mybatis-gen CLI - SQL DDL to MyBatis field models.

use clap::{Parser, Subcommand};
use mybatis_gen::{
    prepare_template_data, DdlParser, Dialect, GenError, GeneratorConfig, ParserCatalog,
    TableDescription,
};
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn, Level};

#[derive(Parser)]
#[command(name = "mybatis-gen")]
#[command(about = "Parse SQL CREATE TABLE statements into MyBatis field models")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a CREATE TABLE statement and print its fields
    Parse {
        /// Override the configured dialect
        #[arg(short, long)]
        dialect: Option<String>,

        /// DDL file to read, or "-" for stdin [default: stdin]
        file: Option<PathBuf>,
    },

    /// Parse a CREATE TABLE statement and print the template data record
    Prepare {
        /// Override the configured dialect
        #[arg(short, long)]
        dialect: Option<String>,

        /// DDL file to read, or "-" for stdin [default: stdin]
        file: Option<PathBuf>,
    },

    /// Show the Java type for one or more SQL column types
    MapType {
        /// Override the configured dialect
        #[arg(short, long)]
        dialect: Option<String>,

        /// SQL column types, e.g. "VARCHAR(255)"
        #[arg(required = true)]
        types: Vec<String>,
    },

    /// List the supported dialects and their aliases
    Dialects,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), GenError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    let mut config = match &cli.config {
        Some(path) => {
            let config = GeneratorConfig::load(path)?;
            info!("Loaded configuration from {:?}", path);
            config
        }
        None => GeneratorConfig::default(),
    };

    match cli.command {
        Commands::Dialects => {
            if cli.output_json {
                let list: Vec<_> = Dialect::ALL
                    .iter()
                    .map(|d| json!({ "name": d.name(), "aliases": d.aliases() }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                for dialect in Dialect::ALL {
                    println!("{:<12} {}", dialect.name(), dialect.aliases().join(", "));
                }
            }
        }

        Commands::MapType { dialect, types } => {
            let dialect: Dialect = dialect.as_deref().unwrap_or(&config.dialect).parse()?;
            let catalog = ParserCatalog::from_config(&config)?;
            let mapper = catalog.type_mapper();

            if cli.output_json {
                let list: Vec<_> = types
                    .iter()
                    .map(|t| json!({ "sql_type": t, "java_type": mapper.map_for(t, dialect) }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                for sql_type in &types {
                    println!("{} -> {}", sql_type, mapper.map_for(sql_type, dialect));
                }
            }
        }

        Commands::Parse { dialect, file } => {
            if let Some(name) = dialect {
                config.dialect = name;
            }
            let table = parse_file(&config, file.as_deref())?;

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                print_table(&table);
            }
        }

        Commands::Prepare { dialect, file } => {
            if let Some(name) = dialect {
                config.dialect = name;
            }
            let table = parse_file(&config, file.as_deref())?;
            let data = prepare_template_data(&table, &config);

            // The record is always JSON; --output-json only affects the other commands.
            println!("{}", data.to_json()?);
        }
    }

    Ok(())
}

/// Read DDL from a file or stdin and parse it with the configured dialect.
fn parse_file(config: &GeneratorConfig, file: Option<&Path>) -> Result<TableDescription, GenError> {
    let dialect: Dialect = config.dialect.parse()?;
    let catalog = ParserCatalog::from_config(config)?;
    let ddl = read_input(file)?;

    debug!("Parsing {} bytes of {} DDL", ddl.len(), dialect);
    let table = catalog.parser_for(dialect).parse(&ddl)?;

    if table.is_partial_script() {
        warn!(
            "Only table {} was parsed; ignored tables: {}",
            table.table_name,
            table.ignored_tables.join(", ")
        );
    }
    info!(
        "Parsed table {} ({} fields)",
        table.table_name,
        table.fields.len()
    );

    Ok(table)
}

fn read_input(file: Option<&Path>) -> Result<String, GenError> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_table(table: &TableDescription) {
    match &table.comment {
        Some(comment) => println!("Table: {} ({})", table.table_name, comment),
        None => println!("Table: {}", table.table_name),
    }
    for field in &table.fields {
        let marker = if field.is_primary_key { " [PK]" } else { "" };
        if field.comment.is_empty() {
            println!(
                "  {} {} -> {}{}",
                field.name, field.sql_type, field.target_type, marker
            );
        } else {
            println!(
                "  {} {} -> {}{} -- {}",
                field.name, field.sql_type, field.target_type, marker, field.comment
            );
        }
    }
}

fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so stdout stays machine-readable.
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
