mod commands;
mod runner;
mod tap;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use evensum_core::OverflowPolicy;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Overflow behavior selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OverflowArg {
    Checked,
    Wrapping,
    Saturating,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Checked => OverflowPolicy::Checked,
            OverflowArg::Wrapping => OverflowPolicy::Wrapping,
            OverflowArg::Saturating => OverflowPolicy::Saturating,
        }
    }
}

/// Sum the even numbers in a list of integers.
#[derive(Parser)]
#[command(
    name = "evensum",
    version,
    about = "Sum the even numbers in a list of integers"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum the even integers given as arguments, in a file, or on stdin
    Sum {
        /// Integers to sum; when omitted, input is read from --file or stdin
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        values: Vec<String>,
        /// Read whitespace-separated integers from this file
        #[arg(long, conflicts_with = "values")]
        file: Option<PathBuf>,
        /// Behavior when the sum leaves the 64-bit range
        #[arg(long, default_value = "checked", value_enum)]
        overflow: OverflowArg,
    },

    /// Run the conformance test suite
    Test {
        /// Path to the conformance suite directory
        #[arg(default_value = "conformance")]
        suite_dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Sum {
            values,
            file,
            overflow,
        } => {
            commands::sum::cmd_sum(
                &values,
                file.as_deref(),
                overflow.into(),
                cli.output,
                cli.quiet,
            );
        }
        Commands::Test { suite_dir } => {
            commands::test::cmd_test(&suite_dir, cli.quiet);
        }
    }
}

/// Logs go to stderr so stdout stays parseable. `RUST_LOG` takes precedence
/// over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
