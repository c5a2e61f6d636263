//! sql92 CLI
//!
//! Reads SQL from a file or stdin, parses it, and prints each statement's
//! dump (or a JSON rendering) to stdout. On failure the diagnostic goes
//! to stderr and the process exits non-zero.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_sql92::{Dialect, ParseOptions};

/// ANSI SQL-92 parser.
#[derive(Parser)]
#[command(name = "sql92")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file (stdin if not given).
    file: Option<PathBuf>,

    /// SQL dialect to parse.
    #[arg(short, long, value_enum, default_value_t = DialectArg::Ansi1992)]
    dialect: DialectArg,

    /// Check syntax only; do not build or print statements.
    #[arg(long)]
    syntax_only: bool,

    /// Print statements as JSON instead of SQL dumps.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DialectArg {
    Ansi1992,
    Ansi1999,
    Ansi2003,
    Mysql,
    Postgresql,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Ansi1992 => Self::Ansi1992,
            DialectArg::Ansi1999 => Self::Ansi1999,
            DialectArg::Ansi2003 => Self::Ansi2003,
            DialectArg::Mysql => Self::Mysql,
            DialectArg::Postgresql => Self::Postgresql,
        }
    }
}

fn read_input(file: Option<&PathBuf>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let input = match read_input(cli.file.as_ref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let options = ParseOptions {
        dialect: cli.dialect.into(),
        disable_statement_construction: cli.syntax_only,
    };
    debug!(bytes = input.len(), "parsing input");

    let result = oxide_sql92::parse(&input, options);
    let Some(error) = result.error else {
        if cli.syntax_only {
            println!("OK");
        } else if cli.json {
            match serde_json::to_string_pretty(&result.statements) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: {err}");
                    return ExitCode::FAILURE;
                }
            }
        } else {
            for (i, stmt) in result.statements.iter().enumerate() {
                println!("statements[{i}]: {stmt}");
            }
        }
        return ExitCode::SUCCESS;
    };
    eprintln!("{error}");
    ExitCode::FAILURE
}
