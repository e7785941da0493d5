use std::io::Read;
use std::path::Path;
use std::process;

use evensum_core::{parse_text, parse_tokens, sum_even_summary, EvenSumError, OverflowPolicy};

use crate::{report_error, OutputFormat};

pub(crate) fn cmd_sum(
    values: &[String],
    file: Option<&Path>,
    policy: OverflowPolicy,
    output: OutputFormat,
    quiet: bool,
) {
    let parsed = if !values.is_empty() {
        tracing::debug!(tokens = values.len(), "reading integers from arguments");
        parse_tokens(values)
    } else if let Some(path) = file {
        tracing::debug!(file = %path.display(), "reading integers from file");
        match std::fs::read_to_string(path) {
            Ok(text) => parse_text(&text),
            Err(e) => {
                let msg = format!("error: cannot read file '{}': {}", path.display(), e);
                report_error(&msg, output, quiet);
                process::exit(1);
            }
        }
    } else {
        tracing::debug!("reading integers from stdin");
        let mut text = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut text) {
            let msg = format!("error: cannot read stdin: {}", e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
        parse_text(&text)
    };

    let result = parsed
        .map_err(EvenSumError::from)
        .and_then(|numbers| {
            tracing::debug!(count = numbers.len(), ?policy, "reducing");
            sum_even_summary(&numbers, policy).map_err(EvenSumError::from)
        });

    match result {
        Ok(summary) => match output {
            OutputFormat::Text => println!("{}", summary.sum),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&summary)
                    .unwrap_or_else(|e| format!("serialization error: {}", e))
            ),
        },
        Err(e) => {
            report_failure(&e, output, quiet);
            process::exit(1);
        }
    }
}

fn report_failure(err: &EvenSumError, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("error: {}", err),
        OutputFormat::Json => {
            let json = err.to_json_value();
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_else(|_| format!("{}", json))
            );
        }
    }
}
