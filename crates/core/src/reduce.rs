//! The even-sum reduction.
//!
//! Inputs and results are `i64`; the running total is kept in `i128`, which
//! no `i64` slice can overflow, so the policy applies to the exact final sum
//! and the result does not depend on element order. The default policy is
//! checked: a sum outside the `i64` range is reported as
//! [`ReduceError::Overflow`], never wrapped silently. Wrapping and
//! saturating behavior must be requested through [`OverflowPolicy`].

use serde::Serialize;

use crate::error::ReduceError;

/// How the accumulator behaves when a sum leaves the `i64` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Fail with [`ReduceError::Overflow`].
    #[default]
    Checked,
    /// Two's-complement wraparound.
    Wrapping,
    /// Clamp to `i64::MIN` / `i64::MAX`.
    Saturating,
}

/// Result of a reduction together with the counts the CLI reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvenSum {
    pub sum: i64,
    /// Number of elements visited.
    pub count: usize,
    /// Number of elements that were even.
    pub even_count: usize,
}

/// `true` when `value` is divisible by two. Holds for zero and negative evens.
pub fn is_even(value: i64) -> bool {
    value % 2 == 0
}

/// Sum the even elements of `values` with checked addition.
pub fn sum_even(values: &[i64]) -> Result<i64, ReduceError> {
    sum_even_with(values, OverflowPolicy::Checked)
}

/// Sum the even elements of `values` under the given overflow policy.
///
/// Only [`OverflowPolicy::Checked`] can return an error.
pub fn sum_even_with(values: &[i64], policy: OverflowPolicy) -> Result<i64, ReduceError> {
    sum_even_summary(values, policy).map(|s| s.sum)
}

/// Like [`sum_even_with`], also counting visited and qualifying elements.
pub fn sum_even_summary(values: &[i64], policy: OverflowPolicy) -> Result<EvenSum, ReduceError> {
    let mut total: i128 = 0;
    let mut even_count = 0;
    for &value in values.iter().filter(|v| is_even(**v)) {
        total += i128::from(value);
        even_count += 1;
    }

    let sum = match policy {
        OverflowPolicy::Checked => i64::try_from(total).map_err(|_| {
            tracing::trace!(%total, even_count, "even sum overflow");
            ReduceError::Overflow { total, even_count }
        })?,
        // Truncation keeps the low 64 bits, same as wrapping at every step.
        OverflowPolicy::Wrapping => total as i64,
        OverflowPolicy::Saturating => {
            total.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
        }
    };

    Ok(EvenSum {
        sum,
        count: values.len(),
        even_count,
    })
}
