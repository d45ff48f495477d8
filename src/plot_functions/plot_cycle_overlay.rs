// src/plot_functions/plot_cycle_overlay.rs

use ndarray::Axis;
use plotters::style::RGBColor;
use std::path::Path;

use crate::column_registry::column_index;
use crate::constants::{
    COLOR_AVERAGE_CYCLE, CYCLE_PALETTE_END, CYCLE_PALETTE_START, LINE_WIDTH_AVERAGE,
    LINE_WIDTH_PLOT, MAX_LEGEND_CYCLES,
};
use crate::error::GaitError;
use crate::plot_framework::{calculate_range, draw_stacked_plot, finite_bounds, PlotSeries};
use crate::types::{AveragedCycle, Cycle};

/// Color of step `index` out of `count`, spread along the viridis gradient.
pub fn cycle_color(index: usize, count: usize) -> RGBColor {
    let t = if count > 1 {
        index as f64 / (count - 1) as f64
    } else {
        0.0
    };
    let t = CYCLE_PALETTE_START + t.clamp(0.0, 1.0) * (CYCLE_PALETTE_END - CYCLE_PALETTE_START);
    let color = colorous::VIRIDIS.eval_continuous(t);
    RGBColor(color.r, color.g, color.b)
}

/// Generates the stacked step overlay plot: every step drawn from its own first
/// sample, optionally with the averaged step on top.
pub fn plot_cycle_overlay(
    cycles: &[Cycle<'_>],
    average: Option<&AveragedCycle>,
    variables: &[String],
    root_name: &str,
    output_dir: &Path,
) -> Result<(), GaitError> {
    let columns = variables
        .iter()
        .map(|name| column_index(name))
        .collect::<Result<Vec<usize>, GaitError>>()?;

    let output_file = output_dir.join(format!("{root_name}_Cycles_stacked.png"));
    let plot_type_name = "Steps";

    draw_stacked_plot(
        &output_file,
        root_name,
        plot_type_name,
        variables,
        |panel_index| {
            let column = columns[panel_index];
            if cycles.is_empty() {
                return None;
            }

            let mut series = Vec::with_capacity(cycles.len() + 1);
            let mut val_min = f64::INFINITY;
            let mut val_max = f64::NEG_INFINITY;
            let mut longest = 0usize;

            for (k, cycle) in cycles.iter().enumerate() {
                if column >= cycle.ncols() {
                    return None;
                }
                let values = cycle.index_axis(Axis(1), column);
                if let Some((lo, hi)) = finite_bounds(values) {
                    val_min = val_min.min(lo);
                    val_max = val_max.max(hi);
                }
                longest = longest.max(values.len());

                series.push(PlotSeries {
                    data: values
                        .iter()
                        .enumerate()
                        .filter(|(_, v)| v.is_finite())
                        .map(|(j, v)| (j as f64, *v))
                        .collect(),
                    label: if k < MAX_LEGEND_CYCLES {
                        format!("Step {}", k + 1)
                    } else {
                        String::new()
                    },
                    color: cycle_color(k, cycles.len()),
                    stroke_width: LINE_WIDTH_PLOT,
                });
            }

            if let Some(avg) = average.filter(|avg| column < avg.ncols()) {
                let values = avg.index_axis(Axis(1), column);
                // Averaged tails can dip below every step, keep them in view.
                if let Some((lo, hi)) = finite_bounds(values) {
                    val_min = val_min.min(lo);
                    val_max = val_max.max(hi);
                }
                series.push(PlotSeries {
                    data: values
                        .iter()
                        .enumerate()
                        .filter(|(_, v)| v.is_finite())
                        .map(|(j, v)| (j as f64, *v))
                        .collect(),
                    label: "Average".to_string(),
                    color: *COLOR_AVERAGE_CYCLE,
                    stroke_width: LINE_WIDTH_AVERAGE,
                });
            }

            if !val_min.is_finite() || !val_max.is_finite() {
                return None;
            }
            let (final_value_min, final_value_max) = calculate_range(val_min, val_max);
            let x_range = 0.0..(longest.max(2) - 1) as f64;
            let y_range = final_value_min..final_value_max;

            Some((
                (
                    format!("{} by step ({} steps)", variables[panel_index], cycles.len()),
                    x_range,
                    y_range,
                    series,
                    "Sample within step".to_string(),
                    variables[panel_index].clone(),
                ),
                None,
            ))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_spread_along_palette() {
        let first = colorous::VIRIDIS.eval_continuous(CYCLE_PALETTE_START);
        assert_eq!(cycle_color(0, 5), RGBColor(first.r, first.g, first.b));
        assert_ne!(cycle_color(0, 5), cycle_color(4, 5));
        assert_ne!(cycle_color(1, 5), cycle_color(3, 5));
    }

    #[test]
    fn single_step_does_not_divide_by_zero() {
        let first = colorous::VIRIDIS.eval_continuous(CYCLE_PALETTE_START);
        assert_eq!(cycle_color(0, 1), RGBColor(first.r, first.g, first.b));
    }
}

// src/plot_functions/plot_cycle_overlay.rs
