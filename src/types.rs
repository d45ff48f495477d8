// src/types.rs
// Type aliases shared by analysis and plotting

use ndarray::{Array2, ArrayView2};
use std::ops::Range;

use crate::plot_framework::PlotSeries;

/// Loaded log: one row per sample, one column per registered variable.
pub type SampleTable = Array2<f64>;

/// One step: a contiguous row range borrowed from a `SampleTable`.
pub type Cycle<'a> = ArrayView2<'a, f64>;

/// Synthetic step produced by the averager.
pub type AveragedCycle = Array2<f64>;

// Panel plot data
pub type PanelPlotData = (
    String,          // title
    Range<f64>,      // x_range
    Range<f64>,      // y_range
    Vec<PlotSeries>, // series
    String,          // x_label
    String,          // y_label
);

// src/types.rs
