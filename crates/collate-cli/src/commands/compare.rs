//! Implementation of the `collate compare` command.

use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;
use serde_json::Value as Json;

use super::CollatorArgs;
use crate::output::ordering_sign;

/// Arguments for the compare command.
#[derive(Debug, clap::Args)]
pub struct CompareArgs {
    /// Left-hand string
    pub lhs: String,

    /// Right-hand string
    pub rhs: String,

    #[command(flatten)]
    pub collator: CollatorArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for compare results.
#[derive(Serialize)]
pub struct CompareResult {
    pub result: i8,
    pub resolved_locale: String,
    pub options: Json,
}

/// Run the compare command.
pub fn run_compare(args: CompareArgs) -> miette::Result<i32> {
    let collator = args.collator.collator();
    let result = ordering_sign(collator.compare(&args.lhs, &args.rhs));

    if args.json {
        let output = CompareResult {
            result,
            resolved_locale: collator.resolved_locale().to_string(),
            options: collator.serialize(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
    } else {
        let locale = format!("({})", collator.resolved_locale());
        println!(
            "{} {}",
            result,
            locale.if_supports_color(Stdout, |text| text.dimmed())
        );
    }
    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_succeeds() {
        let args = CompareArgs {
            lhs: "a".to_string(),
            rhs: "b".to_string(),
            collator: CollatorArgs::default(),
            json: true,
        };
        assert_eq!(run_compare(args).unwrap(), exitcode::OK);
    }
}
