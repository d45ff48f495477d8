// src/data_analysis/event_detection.rs

use ndarray::{ArrayView1, ArrayView2, Axis};

use crate::column_registry::{column_index, GAIT_STATE};
use crate::constants::HEELSTRIKE_OFFSET;
use crate::error::GaitError;

/// Finds rising crossings of `offset` in a signal.
///
/// A crossing is reported at sample `i` when `signal[i - 1] <= offset < signal[i]`.
/// The lower side is inclusive so a sample sitting exactly on the offset triggers
/// once, on the way up. Index 0 is never reported. NaN samples fail both
/// comparisons and never produce an event.
pub fn detect_rising_crossings(offset: f64, signal: ArrayView1<'_, f64>) -> Vec<usize> {
    let mut events = Vec::new();
    for i in 1..signal.len() {
        if signal[i - 1] <= offset && offset < signal[i] {
            events.push(i);
        }
    }
    events
}

/// Rising crossings of `offset` in the named column of a sample table.
pub fn detect_events_in_column(
    table: ArrayView2<'_, f64>,
    column_name: &str,
    offset: f64,
) -> Result<Vec<usize>, GaitError> {
    let column = column_index(column_name)?;
    if column >= table.ncols() {
        return Err(GaitError::ColumnCountMismatch {
            expected: column + 1,
            actual: table.ncols(),
        });
    }
    Ok(detect_rising_crossings(
        offset,
        table.index_axis(Axis(1), column),
    ))
}

/// Rows at which a heelstrike occurs: upward crossings of zero in `gait_state`.
pub fn heelstrike_indices(table: ArrayView2<'_, f64>) -> Result<Vec<usize>, GaitError> {
    detect_events_in_column(table, GAIT_STATE, HEELSTRIKE_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column_registry::{index_of, COLUMN_COUNT};
    use ndarray::{array, Array1, Array2};

    #[test]
    fn alternating_signal_crosses_at_odd_indices() {
        let signal = array![-1.0, 1.0, -1.0, 1.0];
        assert_eq!(detect_rising_crossings(0.0, signal.view()), vec![1, 3]);
    }

    #[test]
    fn sample_on_offset_triggers_once() {
        // 0 -> 0 -> 1: only the step off the offset counts.
        let signal = array![0.0, 0.0, 1.0, 1.0, 0.0, 2.0];
        assert_eq!(detect_rising_crossings(0.0, signal.view()), vec![2, 5]);
    }

    #[test]
    fn reaching_offset_from_below_is_not_a_crossing() {
        let signal = array![-1.0, 0.0, -1.0];
        assert!(detect_rising_crossings(0.0, signal.view()).is_empty());
    }

    #[test]
    fn falling_edges_are_ignored() {
        let signal = array![3.0, 2.0, 1.0, 0.0, -1.0];
        assert!(detect_rising_crossings(0.0, signal.view()).is_empty());
    }

    #[test]
    fn nonzero_offset() {
        let signal = array![1.0, 2.0, 3.0, 1.0, 2.5];
        assert_eq!(detect_rising_crossings(2.0, signal.view()), vec![2, 4]);
    }

    #[test]
    fn nan_never_triggers() {
        let signal = array![-1.0, f64::NAN, 1.0, -1.0, 1.0];
        assert_eq!(detect_rising_crossings(0.0, signal.view()), vec![4]);
    }

    #[test]
    fn short_signals_have_no_events() {
        let empty: Array1<f64> = Array1::zeros(0);
        assert!(detect_rising_crossings(0.0, empty.view()).is_empty());
        assert!(detect_rising_crossings(0.0, array![5.0].view()).is_empty());
    }

    #[test]
    fn events_are_strictly_increasing_and_never_zero() {
        let signal: Array1<f64> = (0..200).map(|i| ((i as f64) * 0.37).sin()).collect();
        let events = detect_rising_crossings(0.0, signal.view());
        assert!(!events.is_empty());
        assert!(events.iter().all(|&i| i > 0));
        assert!(events.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn heelstrikes_use_gait_state_column() {
        let gait_col = index_of("gait_state").unwrap();
        let mut table = Array2::<f64>::zeros((6, COLUMN_COUNT));
        for (row, value) in [-1.0, 1.0, 1.0, -1.0, 0.0, 1.0].iter().enumerate() {
            table[[row, gait_col]] = *value;
        }
        // A decoy crossing in another column must not leak in.
        table[[2, 0]] = 5.0;
        assert_eq!(heelstrike_indices(table.view()).unwrap(), vec![1, 5]);
    }

    #[test]
    fn unknown_column_fails_fast() {
        let table = Array2::<f64>::zeros((4, COLUMN_COUNT));
        assert!(matches!(
            detect_events_in_column(table.view(), "not_a_column", 0.0),
            Err(GaitError::UnknownVariable(_))
        ));
    }

    #[test]
    fn narrow_table_is_rejected() {
        let table = Array2::<f64>::zeros((4, 3));
        assert!(matches!(
            heelstrike_indices(table.view()),
            Err(GaitError::ColumnCountMismatch { .. })
        ));
    }
}

// src/data_analysis/event_detection.rs
