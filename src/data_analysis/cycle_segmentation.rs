// src/data_analysis/cycle_segmentation.rs

use log::info;
use ndarray::{concatenate, s, Array2, ArrayView2, Axis};

use crate::data_analysis::event_detection::heelstrike_indices;
use crate::error::GaitError;
use crate::types::Cycle;

/// Splits a sample table into cycles bounded by consecutive event rows.
///
/// With K+1 events the result holds K cycles; cycle `k` covers rows
/// `events[k]..events[k + 1]`. Fewer than two events give no cycles, which is a
/// valid outcome. Cycle lengths are left as recorded.
///
/// Events must be strictly increasing and no greater than the table's row count.
pub fn segment_cycles<'a>(
    table: ArrayView2<'a, f64>,
    events: &[usize],
) -> Result<Vec<Cycle<'a>>, GaitError> {
    if events.len() < 2 {
        return Ok(Vec::new());
    }
    if let Some(pair) = events.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(GaitError::InvalidEvents(format!(
            "indices must be strictly increasing, found {} followed by {}",
            pair[0], pair[1]
        )));
    }
    let last = events[events.len() - 1];
    if last > table.nrows() {
        return Err(GaitError::InvalidEvents(format!(
            "index {} is past the end of a {}-row table",
            last,
            table.nrows()
        )));
    }

    Ok(events
        .windows(2)
        .map(|pair| table.slice_move(s![pair[0]..pair[1], ..]))
        .collect())
}

/// Detects heelstrikes in `gait_state` and segments the table into steps.
pub fn segment_by_heelstrike(table: ArrayView2<'_, f64>) -> Result<Vec<Cycle<'_>>, GaitError> {
    let events = heelstrike_indices(table)?;
    info!("Detected {} heelstrike events.", events.len());
    let cycles = segment_cycles(table, &events)?;
    info!("Segmented {} steps.", cycles.len());
    Ok(cycles)
}

/// Stacks cycles back into one table, in order.
pub fn concatenate_cycles(cycles: &[Cycle<'_>]) -> Result<Array2<f64>, GaitError> {
    if cycles.is_empty() {
        return Err(GaitError::NoCycles);
    }
    let n_cols = cycles[0].ncols();
    if let Some(bad) = cycles.iter().find(|c| c.ncols() != n_cols) {
        return Err(GaitError::ColumnCountMismatch {
            expected: n_cols,
            actual: bad.ncols(),
        });
    }
    Ok(concatenate(Axis(0), cycles)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column_registry::{index_of, COLUMN_COUNT};

    fn numbered_table(rows: usize, cols: usize) -> Array2<f64> {
        Array2::from_shape_fn((rows, cols), |(r, c)| (r * 100 + c) as f64)
    }

    #[test]
    fn three_events_make_two_cycles() {
        let table = numbered_table(12, 4);
        let cycles = segment_cycles(table.view(), &[2, 5, 9]).unwrap();
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0].nrows(), 3);
        assert_eq!(cycles[1].nrows(), 4);
        assert_eq!(cycles[0][[0, 0]], 200.0);
        assert_eq!(cycles[1][[3, 3]], 803.0);
    }

    #[test]
    fn cycles_cover_event_span_without_gaps() {
        let table = numbered_table(12, 4);
        let events = [2, 5, 9];
        let cycles = segment_cycles(table.view(), &events).unwrap();
        let rebuilt = concatenate_cycles(&cycles).unwrap();
        assert_eq!(rebuilt, table.slice(s![2..9, ..]));
    }

    #[test]
    fn fewer_than_two_events_is_not_an_error() {
        let table = numbered_table(5, 2);
        assert!(segment_cycles(table.view(), &[]).unwrap().is_empty());
        assert!(segment_cycles(table.view(), &[3]).unwrap().is_empty());
    }

    #[test]
    fn event_at_table_end_is_allowed() {
        let table = numbered_table(5, 2);
        let cycles = segment_cycles(table.view(), &[1, 5]).unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].nrows(), 4);
    }

    #[test]
    fn unordered_or_out_of_range_events_are_rejected() {
        let table = numbered_table(5, 2);
        assert!(matches!(
            segment_cycles(table.view(), &[3, 3]),
            Err(GaitError::InvalidEvents(_))
        ));
        assert!(matches!(
            segment_cycles(table.view(), &[4, 1]),
            Err(GaitError::InvalidEvents(_))
        ));
        assert!(matches!(
            segment_cycles(table.view(), &[1, 6]),
            Err(GaitError::InvalidEvents(_))
        ));
    }

    #[test]
    fn heelstrike_segmentation_round_trips() {
        let gait_col = index_of("gait_state").unwrap();
        let gait_state = [-1.0, 1.0, 1.0, -1.0, 2.0, -1.0, -1.0, 3.0, 0.0];
        let mut table = numbered_table(gait_state.len(), COLUMN_COUNT);
        for (row, value) in gait_state.iter().enumerate() {
            table[[row, gait_col]] = *value;
        }
        let cycles = segment_by_heelstrike(table.view()).unwrap();
        let lengths: Vec<usize> = cycles.iter().map(|c| c.nrows()).collect();
        assert_eq!(lengths, vec![3, 3]);
        let rebuilt = concatenate_cycles(&cycles).unwrap();
        assert_eq!(rebuilt, table.slice(s![1..7, ..]));
    }

    #[test]
    fn concatenating_mixed_widths_is_a_column_mismatch() {
        let narrow = numbered_table(3, 2);
        let wide = numbered_table(3, 4);
        assert!(matches!(
            concatenate_cycles(&[narrow.view(), wide.view()]),
            Err(GaitError::ColumnCountMismatch { expected: 2, actual: 4 })
        ));
    }

    #[test]
    fn shape_errors_are_not_reported_as_event_errors() {
        let err: GaitError =
            ndarray::ShapeError::from_kind(ndarray::ErrorKind::IncompatibleShape).into();
        assert!(matches!(err, GaitError::Shape(_)));
    }

    #[test]
    fn concatenating_nothing_fails() {
        assert!(matches!(concatenate_cycles(&[]), Err(GaitError::NoCycles)));
    }
}

// src/data_analysis/cycle_segmentation.rs
