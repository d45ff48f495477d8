// src/constants.rs

use plotters::style::colors::full_palette::{BLUE_700, ORANGE, RED};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;
// Minimum height per stacked panel; figures with many panels grow past PLOT_HEIGHT.
pub const PLOT_PANEL_MIN_HEIGHT: u32 = 340;

// Heelstrike detection: rising crossings of gait_state through this level.
pub const HEELSTRIKE_OFFSET: f64 = 0.0;

// Variable plotted when none is given on the command line.
pub const DEFAULT_PLOT_VARIABLE: &str = "ank_ang";

// Below this many steps the average is still produced but flagged in the log.
pub const MIN_STEPS_FOR_STABLE_AVERAGE: usize = 3;

// --- Plot Color Assignments ---
pub const COLOR_TRACE_MAIN: &RGBColor = &BLUE_700;
pub const COLOR_HEELSTRIKE_MARKER: &RGBColor = &ORANGE;
pub const COLOR_AVERAGE_CYCLE: &RGBColor = &RED;

// Palette range used for per-step colors (fraction of the continuous gradient).
pub const CYCLE_PALETTE_START: f64 = 0.05;
pub const CYCLE_PALETTE_END: f64 = 0.9;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_AVERAGE: u32 = 3;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// Legends list at most this many individual steps, the rest are drawn unlabeled.
pub const MAX_LEGEND_CYCLES: usize = 8;

// src/constants.rs
