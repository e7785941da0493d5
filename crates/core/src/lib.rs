//! evensum-core: sum the even elements of an integer sequence.
//!
//! # Public API
//!
//! Key items are re-exported at the crate root:
//!
//! - [`sum_even()`] -- checked reduction, the canonical entry point
//! - [`sum_even_with()`] -- reduction under an explicit [`OverflowPolicy`]
//! - [`sum_even_summary()`] -- sum plus element counts
//! - [`parse_tokens()`], [`parse_text()`] -- textual input to integers
//! - [`EvenSumError`], [`ParseError`], [`ReduceError`] -- error types

pub mod error;
pub mod parse;
pub mod reduce;

// ── Convenience re-exports ───────────────────────────────────────────

pub use error::{EvenSumError, ParseError, ReduceError};
pub use parse::{parse_text, parse_tokens};
pub use reduce::{is_even, sum_even, sum_even_summary, sum_even_with, EvenSum, OverflowPolicy};

/// Parse `text` and reduce it with the checked overflow policy.
///
/// This is the path the CLI and the conformance runner share.
pub fn sum_even_text(text: &str) -> Result<i64, EvenSumError> {
    let values = parse_text(text)?;
    Ok(sum_even(&values)?)
}
