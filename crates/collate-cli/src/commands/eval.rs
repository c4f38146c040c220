//! Implementation of the `collate eval` command.

use std::collections::HashMap;

use collate::{parse_expression, EvaluationContext, Value};
use miette::IntoDiagnostic;
use serde::Serialize;
use serde_json::Value as Json;

use crate::output::ExprDiagnostic;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Expression in JSON syntax (e.g., '["==", "a", "A", ["collator", {}]]')
    #[arg(long, required = true)]
    pub expr: String,

    /// Feature properties in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: Json,
    #[serde(rename = "type")]
    pub result_type: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Read a property value as JSON, falling back to a plain string.
fn property_value(raw: String) -> Value {
    match serde_json::from_str::<Json>(&raw) {
        Ok(json) => Value::from_json(&json),
        Err(_) => Value::from(raw),
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let syntax: Json = match serde_json::from_str(&args.expr) {
        Ok(syntax) => syntax,
        Err(e) => return Err(ExprDiagnostic::from_json_error(&args.expr, &e).into()),
    };

    let expr = match parse_expression(&syntax, None) {
        Ok(expr) => expr,
        Err(e) => return report_error(args.json, "Parse error", &e.to_string()),
    };
    log::debug!("parsed {} expression", expr.result_type());

    let properties: HashMap<String, Value> = args
        .params
        .into_iter()
        .map(|(k, v)| (k, property_value(v)))
        .collect();

    match expr.evaluate(&EvaluationContext::new(&properties)) {
        Ok(result) => {
            if args.json {
                let output = EvalResult {
                    result: result.serialize(),
                    result_type: result.type_of().to_string(),
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output).into_diagnostic()?
                );
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => report_error(args.json, "Evaluation error", &e.to_string()),
    }
}

fn report_error(json: bool, label: &str, message: &str) -> miette::Result<i32> {
    if json {
        let output = serde_json::json!({ "error": message });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
    } else {
        eprintln!("{}: {}", label, message);
    }
    Ok(exitcode::DATAERR)
}
