// src/plot_functions/plot_variable_trace.rs

use ndarray::Axis;
use plotters::style::RGBColor;
use std::path::Path;

use crate::column_registry::column_index;
use crate::constants::{COLOR_HEELSTRIKE_MARKER, COLOR_TRACE_MAIN, LINE_WIDTH_PLOT};
use crate::error::GaitError;
use crate::plot_framework::{calculate_range, draw_stacked_plot, finite_bounds, MarkerLines, PlotSeries};
use crate::types::{PanelPlotData, SampleTable};

/// Generates the stacked full-log trace plot: each variable against sample index,
/// with heelstrike rows marked.
pub fn plot_variable_trace(
    table: &SampleTable,
    heelstrikes: &[usize],
    variables: &[String],
    root_name: &str,
    output_dir: &Path,
) -> Result<(), GaitError> {
    let columns = variables
        .iter()
        .map(|name| column_index(name))
        .collect::<Result<Vec<usize>, GaitError>>()?;

    let output_file = output_dir.join(format!("{root_name}_Trace_stacked.png"));
    let plot_type_name = "Trace";

    draw_stacked_plot(
        &output_file,
        root_name,
        plot_type_name,
        variables,
        |panel_index| {
            let panel = trace_panel(table, columns[panel_index], &variables[panel_index])?;
            let markers = MarkerLines {
                positions: heelstrikes.iter().map(|&i| i as f64).collect(),
                color: *COLOR_HEELSTRIKE_MARKER,
                label: format!("Heelstrike ({})", heelstrikes.len()),
            };
            Some((panel, Some(markers)))
        },
    )
}

/// One trace panel for `column`, or `None` when the table lacks that column or
/// holds no finite sample in it.
pub fn trace_panel(table: &SampleTable, column: usize, variable: &str) -> Option<PanelPlotData> {
    if column >= table.ncols() {
        return None;
    }
    let values = table.index_axis(Axis(1), column);
    let (val_min, val_max) = finite_bounds(values)?;

    let series_data: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, v)| (i as f64, *v))
        .collect();

    let (final_value_min, final_value_max) = calculate_range(val_min, val_max);
    let x_range = 0.0..(table.nrows().max(2) - 1) as f64;
    let y_range = final_value_min..final_value_max;

    let color_trace: RGBColor = *COLOR_TRACE_MAIN;
    let series = vec![PlotSeries {
        data: series_data,
        label: variable.to_string(),
        color: color_trace,
        stroke_width: LINE_WIDTH_PLOT,
    }];

    Some((
        format!("{variable} over full log"),
        x_range,
        y_range,
        series,
        "Sample".to_string(),
        variable.to_string(),
    ))
}


// src/plot_functions/plot_variable_trace.rs
