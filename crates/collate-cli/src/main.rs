//! collate CLI entry point.
//!
//! Provides command-line tools for collators and collator expressions:
//! - `collate eval` - Evaluate an expression against feature properties
//! - `collate compare` - Compare two strings with a collator
//! - `collate sort` - Sort lines with a collator
//! - `collate matrix` - Compare two strings under every sensitivity

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_compare, run_eval, run_matrix, run_sort, CompareArgs, EvalArgs, MatrixArgs, SortArgs,
};
use log::LevelFilter;

/// Locale-aware collation tools.
#[derive(Debug, Parser)]
#[command(name = "collate")]
#[command(about = "Locale-aware collation tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse and evaluate an expression
    Eval(EvalArgs),
    /// Compare two strings with a collator
    Compare(CompareArgs),
    /// Sort lines of a file or stdin with a collator
    Sort(SortArgs),
    /// Compare two strings under every sensitivity combination
    Matrix(MatrixArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the logger. `RUST_LOG` applies unless `--verbose` forces debug.
fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.format_timestamp(None);
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Eval(args) => run_eval(args),
        Commands::Compare(args) => run_compare(args),
        Commands::Sort(args) => run_sort(args),
        Commands::Matrix(args) => run_matrix(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
