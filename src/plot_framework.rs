// src/plot_framework.rs

use log::info;
use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use ndarray::ArrayView1;
use ndarray_stats::QuantileExt;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_PANEL_MIN_HEIGHT, PLOT_WIDTH,
};
use crate::error::GaitError;
use crate::types::PanelPlotData;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Min and max of a signal, ignoring NaN. `None` when nothing finite remains.
pub fn finite_bounds(values: ArrayView1<'_, f64>) -> Option<(f64, f64)> {
    let min = *values.min_skipnan();
    let max = *values.max_skipnan();
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Y-axis tick text: "k"/"M" notation for large values, one decimal for small
/// fractional values, integers otherwise.
pub fn format_y_tick(y: f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.abs() < 10.0 && y.fract() != 0.0 {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

/// Height of a figure holding `panel_count` stacked panels.
pub fn figure_height(panel_count: usize) -> u32 {
    PLOT_HEIGHT.max(PLOT_PANEL_MIN_HEIGHT.saturating_mul(panel_count as u32))
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    panel_name: &str,
    plot_type: &str,
    reason: &str,
) -> Result<(), GaitError> {
    const CHAR_WIDTH_RATIO: f32 = 0.6;
    const LINE_HEIGHT_SPACING: i32 = 4;

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{panel_name} {plot_type} Data Unavailable:\n{reason}");

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// Vertical marker lines (e.g. heelstrikes) drawn under the series.
#[derive(Clone)]
pub struct MarkerLines {
    pub positions: Vec<f64>,
    pub color: RGBColor,
    pub label: String,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    pub markers: Option<MarkerLines>,
}

impl PlotConfig {
    pub fn from_panel(panel: PanelPlotData, markers: Option<MarkerLines>) -> Self {
        let (title, x_range, y_range, series, x_label, y_label) = panel;
        Self {
            title,
            x_range,
            y_range,
            series,
            x_label,
            y_label,
            markers,
        }
    }
}

/// Draws a single chart from a PlotConfig.
fn draw_single_chart_with_config(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &PlotConfig,
) -> Result<(), GaitError> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .y_label_formatter(&|y| format_y_tick(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;

    // Markers go first so data is drawn on top.
    if let Some(markers) = &plot_config.markers {
        let y0 = plot_config.y_range.start;
        let y1 = plot_config.y_range.end;
        let marker_color = markers.color.mix(0.6);
        let mut labeled = false;
        for &x in markers.positions.iter().filter(|x| x.is_finite()) {
            if x < plot_config.x_range.start || x > plot_config.x_range.end {
                continue;
            }
            let drawn = chart.draw_series(LineSeries::new(
                vec![(x, y0), (x, y1)],
                marker_color.stroke_width(1),
            ))?;
            if !labeled && !markers.label.is_empty() {
                drawn.label(&markers.label).legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        marker_color.stroke_width(LINE_WIDTH_LEGEND),
                    )
                });
                labeled = true;
                legend_series_count += 1;
            }
        }
    }

    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;

        if !s.label.is_empty() {
            let color = s.color;
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Creates a stacked plot image with one subplot per panel name.
///
/// `get_panel_data` is called with each panel index; `None` (or a panel without
/// data) renders a "Data Unavailable" message instead of a chart.
pub fn draw_stacked_plot<F>(
    output_path: &Path,
    root_name: &str,
    plot_type_name: &str,
    panel_names: &[String],
    mut get_panel_data: F,
) -> Result<(), GaitError>
where
    F: FnMut(usize) -> Option<(PanelPlotData, Option<MarkerLines>)>,
{
    if panel_names.is_empty() {
        return Err(GaitError::Plot(format!(
            "no panels requested for '{}'",
            output_path.display()
        )));
    }

    let root_area = BitMapBackend::new(
        output_path,
        (PLOT_WIDTH, figure_height(panel_names.len())),
    )
    .into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((panel_names.len(), 1));
    let mut any_panel_plotted = false;

    for (panel_index, (area, panel_name)) in sub_plot_areas.iter().zip(panel_names).enumerate() {
        match get_panel_data(panel_index) {
            Some((panel, markers)) => {
                let plot_config = PlotConfig::from_panel(panel, markers);
                let has_data = plot_config.series.iter().any(|s| !s.data.is_empty());
                let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
                    && plot_config.y_range.end > plot_config.y_range.start;
                if has_data && valid_ranges {
                    draw_single_chart_with_config(area, &plot_config)?;
                    any_panel_plotted = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(area, panel_name, plot_type_name, reason)?;
                }
            }
            None => {
                draw_unavailable_message(
                    area,
                    panel_name,
                    plot_type_name,
                    "Calculation/Data Extraction Failed",
                )?;
            }
        }
    }

    root_area.present()?;
    if any_panel_plotted {
        info!("Stacked plot saved as '{}'.", output_path.display());
    } else {
        info!(
            "'{}' holds only placeholder messages: no panel had data to plot.",
            output_path.display()
        );
    }
    Ok(())
}


// src/plot_framework.rs
