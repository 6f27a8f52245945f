mod commands;
mod error;
mod reader;

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};

use commands::diag_table::ConvertArgs;
use fms_yaml_core::KeyMode;

#[derive(Debug, Parser)]
#[command(
    name = "fms-yaml",
    version,
    about = "FMS table tools — convert legacy diag_table files to YAML and validate data_table YAML"
)]
struct Cli {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a legacy diag_table into YAML (or JSON)
    DiagTable {
        /// Input diag_table file
        #[arg(default_value = "diag_table")]
        path: PathBuf,

        /// Write output to this file instead of <PATH>.yaml
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the converted document instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Output format: yaml (default) or json
        #[arg(long, default_value = "yaml")]
        format: String,

        /// Continuation key handling: legacy or paired
        #[arg(long)]
        key_mode: Option<KeyMode>,

        /// Columns per indentation level when lines are space-indented
        #[arg(long)]
        tab_width: Option<usize>,

        /// Config file (defaults to fms-yaml.config.yaml next to the input)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate data_table YAML against the schema rules
    DataTable {
        /// Input file or directory
        #[arg(required_unless_present = "list_rules")]
        path: Option<PathBuf>,

        /// List the schema rules in the order they run, then exit
        #[arg(long)]
        list_rules: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            cli.log_level
        );
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(cli:?; "parsed arguments");

    let result = match &cli.command {
        Commands::DiagTable {
            path,
            output,
            stdout,
            format,
            key_mode,
            tab_width,
            config,
        } => commands::diag_table::run_convert(&ConvertArgs {
            path,
            output: output.as_deref(),
            stdout: *stdout,
            format,
            key_mode: *key_mode,
            tab_width: *tab_width,
            config: config.as_deref(),
        }),
        Commands::DataTable {
            path: Some(path),
            list_rules: false,
        } => commands::data_table::run_validate(path),
        Commands::DataTable { .. } => Ok(commands::data_table::run_list_rules()),
    };

    match result {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{output}");
            } else {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
