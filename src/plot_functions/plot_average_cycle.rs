// src/plot_functions/plot_average_cycle.rs

use ndarray::Axis;
use std::path::Path;

use crate::column_registry::column_index;
use crate::constants::{COLOR_AVERAGE_CYCLE, LINE_WIDTH_AVERAGE};
use crate::data_analysis::cycle_average::AveragingPolicy;
use crate::error::GaitError;
use crate::plot_framework::{calculate_range, draw_stacked_plot, finite_bounds, PlotSeries};
use crate::types::AveragedCycle;

fn policy_label(policy: AveragingPolicy) -> &'static str {
    match policy {
        AveragingPolicy::TotalCycles => "mean over all steps",
        AveragingPolicy::ContributingCycles => "mean over covering steps",
    }
}

/// Generates the stacked averaged-step plot.
pub fn plot_average_cycle(
    average: &AveragedCycle,
    step_count: usize,
    policy: AveragingPolicy,
    variables: &[String],
    root_name: &str,
    output_dir: &Path,
) -> Result<(), GaitError> {
    let columns = variables
        .iter()
        .map(|name| column_index(name))
        .collect::<Result<Vec<usize>, GaitError>>()?;

    let output_file = output_dir.join(format!("{root_name}_AverageCycle_stacked.png"));
    let plot_type_name = "Average Step";

    draw_stacked_plot(
        &output_file,
        root_name,
        plot_type_name,
        variables,
        |panel_index| {
            let column = columns[panel_index];
            if column >= average.ncols() {
                return None;
            }
            let values = average.index_axis(Axis(1), column);
            let (val_min, val_max) = finite_bounds(values)?;

            let (final_value_min, final_value_max) = calculate_range(val_min, val_max);
            let x_range = 0.0..(values.len().max(2) - 1) as f64;
            let y_range = final_value_min..final_value_max;

            let series = vec![PlotSeries {
                data: values
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| v.is_finite())
                    .map(|(j, v)| (j as f64, *v))
                    .collect(),
                label: format!("Average of {} steps ({})", step_count, policy_label(policy)),
                color: *COLOR_AVERAGE_CYCLE,
                stroke_width: LINE_WIDTH_AVERAGE,
            }];

            Some((
                (
                    format!("Average {} step", variables[panel_index]),
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

// src/plot_functions/plot_average_cycle.rs
