// src/data_analysis/cycle_average.rs

use log::{debug, info};
use ndarray::{s, Array1, Array2};

use crate::error::GaitError;
use crate::types::Cycle;

/// How the per-row sum across cycles is turned into a mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AveragingPolicy {
    /// Divide every row by the total number of cycles, whether or not a cycle
    /// reaches that row. Rows past the end of short cycles are pulled toward
    /// zero. This is the behavior of the reference gait tooling.
    #[default]
    TotalCycles,
    /// Divide every row by the number of cycles that actually have that row.
    ContributingCycles,
}

/// Averages cycles of unequal length, aligned at their first row.
///
/// Uses `AveragingPolicy::TotalCycles`.
pub fn average_cycles(cycles: &[Cycle<'_>]) -> Result<Array2<f64>, GaitError> {
    average_cycles_with_policy(cycles, AveragingPolicy::default())
}

/// Averages cycles of unequal length, aligned at their first row.
///
/// The result has as many rows as the longest cycle. Row `j` accumulates every
/// cycle that has at least `j + 1` rows; shorter cycles are skipped rather than
/// zero-padded. The divisor depends on `policy`.
///
/// Fails with `NoCycles` when there is no cycle with at least one row, and with
/// `ColumnCountMismatch` when cycles disagree on their column count.
pub fn average_cycles_with_policy(
    cycles: &[Cycle<'_>],
    policy: AveragingPolicy,
) -> Result<Array2<f64>, GaitError> {
    let max_len = cycles.iter().map(|c| c.nrows()).max().unwrap_or(0);
    if max_len == 0 {
        return Err(GaitError::NoCycles);
    }
    let n_cols = cycles[0].ncols();
    if let Some(bad) = cycles.iter().find(|c| c.ncols() != n_cols) {
        return Err(GaitError::ColumnCountMismatch {
            expected: n_cols,
            actual: bad.ncols(),
        });
    }

    let mut sums = Array2::<f64>::zeros((max_len, n_cols));
    let mut coverage = Array1::<f64>::zeros(max_len);
    for cycle in cycles {
        let len = cycle.nrows();
        let mut covered_rows = sums.slice_mut(s![..len, ..]);
        covered_rows += cycle;
        coverage
            .slice_mut(s![..len])
            .mapv_inplace(|count| count + 1.0);
    }

    match policy {
        AveragingPolicy::TotalCycles => {
            sums /= cycles.len() as f64;
        }
        AveragingPolicy::ContributingCycles => {
            for (mut row, &count) in sums.rows_mut().into_iter().zip(coverage.iter()) {
                // max_len comes from a real cycle, so every row has count >= 1.
                row /= count;
            }
        }
    }

    info!(
        "Averaged {} cycles into a {}-row cycle ({:?}).",
        cycles.len(),
        max_len,
        policy
    );
    debug!("Per-row cycle coverage: {:?}", coverage);
    Ok(sums)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Axis};

    fn assert_close(actual: &Array2<f64>, expected: &Array2<f64>) {
        assert_eq!(actual.dim(), expected.dim());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn equal_lengths_match_naive_mean() {
        let a = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
        let b = array![[3.0, 14.0], [4.0, 26.0], [9.0, 33.0]];
        let c = array![[5.0, 0.0], [0.0, 2.0], [0.0, 0.0]];
        let averaged = average_cycles(&[a.view(), b.view(), c.view()]).unwrap();

        let stacked = ndarray::stack(Axis(0), &[a.view(), b.view(), c.view()]).unwrap();
        let naive = stacked.mean_axis(Axis(0)).unwrap();
        assert_close(&averaged, &naive);
    }

    #[test]
    fn unequal_lengths_divide_by_total_cycle_count() {
        let short = array![[2.0], [4.0]];
        let long = array![[4.0], [8.0], [6.0], [10.0]];
        let averaged = average_cycles(&[short.view(), long.view()]).unwrap();
        // Rows 2 and 3 only have the long cycle but are still divided by 2.
        let expected = array![[3.0], [6.0], [3.0], [5.0]];
        assert_close(&averaged, &expected);
    }

    #[test]
    fn contributing_policy_is_naive_mean_over_coverage() {
        let short = array![[2.0], [4.0]];
        let long = array![[4.0], [8.0], [6.0], [10.0]];
        let averaged = average_cycles_with_policy(
            &[short.view(), long.view()],
            AveragingPolicy::ContributingCycles,
        )
        .unwrap();
        let expected = array![[3.0], [6.0], [6.0], [10.0]];
        assert_close(&averaged, &expected);
    }

    #[test]
    fn result_shape_follows_longest_cycle() {
        let a = Array2::<f64>::ones((5, 3));
        let b = Array2::<f64>::ones((2, 3));
        let c = Array2::<f64>::ones((7, 3));
        let averaged = average_cycles(&[a.view(), b.view(), c.view()]).unwrap();
        assert_eq!(averaged.dim(), (7, 3));
        assert_eq!(averaged[[0, 0]], 1.0);
        assert!((averaged[[4, 2]] - 2.0 / 3.0).abs() < 1e-12);
        assert!((averaged[[6, 1]] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn single_cycle_is_returned_unchanged() {
        let only = array![[1.5, -2.0], [0.25, 8.0]];
        let averaged = average_cycles(&[only.view()]).unwrap();
        assert_close(&averaged, &only);
    }

    #[test]
    fn no_cycles_is_an_error() {
        assert!(matches!(average_cycles(&[]), Err(GaitError::NoCycles)));
        let empty = Array2::<f64>::zeros((0, 4));
        assert!(matches!(
            average_cycles(&[empty.view()]),
            Err(GaitError::NoCycles)
        ));
    }

    #[test]
    fn mixed_column_counts_are_rejected() {
        let a = Array2::<f64>::zeros((2, 3));
        let b = Array2::<f64>::zeros((2, 4));
        assert!(matches!(
            average_cycles(&[a.view(), b.view()]),
            Err(GaitError::ColumnCountMismatch { expected: 3, actual: 4 })
        ));
    }
}

// src/data_analysis/cycle_average.rs
