//! Matrix command implementation.

use clap::Args;
use collate::{Collator, CollatorOptions};
use miette::Result;

use crate::output::table::{format_matrix_table, MatrixRow};

/// Arguments for the matrix command.
#[derive(Debug, Args)]
pub struct MatrixArgs {
    /// Left-hand string
    pub lhs: String,

    /// Right-hand string
    pub rhs: String,

    /// Locale tag (e.g., de, sv, en-US). Defaults to the environment locale
    #[arg(long, env = "COLLATE_LOCALE")]
    pub locale: Option<String>,
}

/// Compare `lhs` and `rhs` under each sensitivity combination.
fn matrix_rows(lhs: &str, rhs: &str, locale: Option<&str>) -> Vec<MatrixRow> {
    let mut rows = Vec::with_capacity(4);
    for case_sensitive in [false, true] {
        for diacritic_sensitive in [false, true] {
            let options = CollatorOptions::builder()
                .case_sensitive(case_sensitive)
                .diacritic_sensitive(diacritic_sensitive)
                .maybe_locale(locale.map(str::to_string))
                .build();
            let strength = options.strength();
            let collator = Collator::new(options);
            rows.push(MatrixRow {
                case_sensitive,
                diacritic_sensitive,
                strength,
                result: collator.compare(lhs, rhs),
            });
        }
    }
    rows
}

/// Run the matrix command.
pub fn run_matrix(args: MatrixArgs) -> Result<i32> {
    let rows = matrix_rows(&args.lhs, &args.rhs, args.locale.as_deref());
    println!("{}", format_matrix_table(&rows));
    Ok(exitcode::OK)
}
