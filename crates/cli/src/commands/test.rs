use std::path::Path;
use std::process;

pub(crate) fn cmd_test(suite_dir: &Path, quiet: bool) {
    if !suite_dir.exists() {
        if !quiet {
            eprintln!(
                "error: conformance suite directory not found: {}",
                suite_dir.display()
            );
        }
        process::exit(1);
    }

    // TAP output is the primary output; quiet only silences the error above
    let result = crate::runner::run_suite(suite_dir);
    if result.failed > 0 {
        tracing::warn!(
            failed = result.failed,
            passed = result.passed,
            "conformance suite has failures"
        );
        process::exit(1);
    }
}
