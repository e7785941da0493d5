use crate::tap::Tap;
use std::path::{Path, PathBuf};
/// Conformance suite runner.
///
/// Convention:
///   positive/  -- NAME.input + NAME.expected        (sum must match)
///   negative/  -- NAME.input + NAME.expected-error  (error message must contain the text)
use evensum_core::sum_even_text;

pub struct RunResult {
    pub passed: usize,
    pub failed: usize,
}

pub fn run_suite(suite_dir: &Path) -> RunResult {
    let mut tap = Tap::new();

    run_positive_tests(suite_dir, &mut tap);
    run_negative_tests(suite_dir, &mut tap);

    let failed = tap.failure_count();
    let passed = tap.count() - failed;
    tracing::info!(passed, failed, suite = %suite_dir.display(), "conformance suite finished");
    tap.finish();

    RunResult { passed, failed }
}

fn run_positive_tests(suite_dir: &Path, tap: &mut Tap) {
    let dir = suite_dir.join("positive");
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "no positive cases");
        return;
    }
    for input_path in sorted_inputs(&dir) {
        let name = stem(&input_path);
        let test_name = format!("positive/{}", name);
        let expected_path = dir.join(format!("{}.expected", name));
        if !expected_path.exists() {
            tracing::warn!(case = %test_name, "missing expected file");
            tap.not_ok(
                &test_name,
                format!("missing expected file: {}", expected_path.display()),
            );
            continue;
        }
        run_positive_test(&input_path, &expected_path, &test_name, tap);
    }
}

fn run_negative_tests(suite_dir: &Path, tap: &mut Tap) {
    let dir = suite_dir.join("negative");
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "no negative cases");
        return;
    }
    for input_path in sorted_inputs(&dir) {
        let name = stem(&input_path);
        let test_name = format!("negative/{}", name);
        let expected_path = dir.join(format!("{}.expected-error", name));
        if !expected_path.exists() {
            tracing::warn!(case = %test_name, "missing expected-error file");
            tap.not_ok(
                &test_name,
                format!("missing expected-error file: {}", expected_path.display()),
            );
            continue;
        }
        run_negative_test(&input_path, &expected_path, &test_name, tap);
    }
}

fn run_positive_test(input_path: &Path, expected_path: &Path, test_name: &str, tap: &mut Tap) {
    let (input, expected) = match (read_trimmed(input_path), read_trimmed(expected_path)) {
        (Ok(i), Ok(e)) => (i, e),
        (Err(e), _) | (_, Err(e)) => {
            tap.not_ok(test_name, e);
            return;
        }
    };

    match sum_even_text(&input) {
        Ok(got) if got.to_string() == expected => tap.ok(test_name),
        Ok(got) => tap.not_ok(
            test_name,
            format!("output mismatch:\n--- expected\n{}\n+++ got\n{}", expected, got),
        ),
        Err(e) => tap.not_ok(test_name, format!("unexpected error: {}", e)),
    }
}

fn run_negative_test(input_path: &Path, expected_path: &Path, test_name: &str, tap: &mut Tap) {
    let (input, expected) = match (read_trimmed(input_path), read_trimmed(expected_path)) {
        (Ok(i), Ok(e)) => (i, e),
        (Err(e), _) | (_, Err(e)) => {
            tap.not_ok(test_name, e);
            return;
        }
    };

    match sum_even_text(&input) {
        Err(e) if e.to_string().contains(&expected) => tap.ok(test_name),
        Err(e) => tap.not_ok(
            test_name,
            format!("error mismatch:\n--- expected to contain\n{}\n+++ got\n{}", expected, e),
        ),
        Ok(got) => tap.not_ok(test_name, format!("expected an error, got sum {}", got)),
    }
}

// -- Helpers --

fn sorted_inputs(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    match std::fs::read_dir(dir) {
        Ok(entries) => {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) == Some("input") {
                    results.push(path);
                }
            }
        }
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot list conformance cases");
        }
    }
    results.sort();
    results
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

fn read_trimmed(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_case(dir: &Path, sub: &str, name: &str, input: &str, ext: &str, expected: &str) {
        let d = dir.join(sub);
        fs::create_dir_all(&d).unwrap();
        fs::write(d.join(format!("{}.input", name)), input).unwrap();
        fs::write(d.join(format!("{}.{}", name, ext)), expected).unwrap();
    }

    #[test]
    fn passing_suite_has_no_failures() {
        let tmp = tempfile::tempdir().unwrap();
        write_case(tmp.path(), "positive", "mixed", "1 2 3 4\n", "expected", "6\n");
        write_case(tmp.path(), "negative", "word", "1 two\n", "expected-error", "'two'");
        let result = run_suite(tmp.path());
        assert_eq!(result.failed, 0);
        assert_eq!(result.passed, 2);
    }

    #[test]
    fn wrong_expectation_fails() {
        let tmp = tempfile::tempdir().unwrap();
        write_case(tmp.path(), "positive", "off_by_two", "2 4\n", "expected", "8");
        write_case(tmp.path(), "negative", "not_an_error", "2 4\n", "expected-error", "x");
        let result = run_suite(tmp.path());
        assert_eq!(result.failed, 2);
    }

    #[test]
    fn unlistable_case_dir_yields_no_cases() {
        let tmp = tempfile::tempdir().unwrap();
        // A file where the directory should be: exists, but read_dir fails.
        fs::write(tmp.path().join("positive"), "not a directory").unwrap();
        assert!(sorted_inputs(&tmp.path().join("positive")).is_empty());
        let result = run_suite(tmp.path());
        assert_eq!(result.passed + result.failed, 0);
    }

    #[test]
    fn missing_expectation_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let d = tmp.path().join("positive");
        fs::create_dir_all(&d).unwrap();
        fs::write(d.join("lonely.input"), "2").unwrap();
        let result = run_suite(tmp.path());
        assert_eq!(result.failed, 1);
        assert_eq!(result.passed, 0);
    }
}
