// src/analysis_config.rs

use std::path::{Path, PathBuf};

use crate::column_registry::{column_index, GAIT_STATE};
use crate::constants::{DEFAULT_PLOT_VARIABLE, HEELSTRIKE_OFFSET};
use crate::data_analysis::cycle_average::AveragingPolicy;
use crate::error::GaitError;

/// Run-time options for one analysis of one log file.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub input_file: PathBuf,
    /// Variables to plot, one panel each.
    pub variables: Vec<String>,
    /// Column whose rising crossings start a step.
    pub event_column: String,
    pub offset: f64,
    /// Where PNGs are written. Defaults to the input file's directory.
    pub output_dir: PathBuf,
    pub policy: AveragingPolicy,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    Run(AnalysisConfig),
    Help,
    Version,
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <input_file.csv> [variable ...] [--event-column NAME] [--offset X] \
         [--output-dir DIR] [--coverage-mean]\n\
         \n\
         Splits a gait log into steps at rising crossings of the event column\n\
         (default '{GAIT_STATE}' through {HEELSTRIKE_OFFSET}) and plots each variable\n\
         (default '{DEFAULT_PLOT_VARIABLE}') over the full log, per step and as the average step.\n\
         \n\
         --coverage-mean  divide each averaged sample by the number of steps that reach it\n\
                          instead of by the total number of steps"
    )
}

impl AnalysisConfig {
    /// Parses arguments (without the program name).
    ///
    /// Variable names are validated here so an unknown name fails before the log
    /// is read.
    pub fn from_args(args: &[String]) -> Result<CliAction, GaitError> {
        let mut input_file: Option<PathBuf> = None;
        let mut variables: Vec<String> = Vec::new();
        let mut event_column = GAIT_STATE.to_string();
        let mut offset = HEELSTRIKE_OFFSET;
        let mut output_dir: Option<PathBuf> = None;
        let mut policy = AveragingPolicy::TotalCycles;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(CliAction::Help),
                "-V" | "--version" => return Ok(CliAction::Version),
                "--event-column" => {
                    event_column = next_value(&mut iter, arg)?.to_string();
                }
                "--offset" => {
                    let raw = next_value(&mut iter, arg)?;
                    offset = raw.parse::<f64>().map_err(|_| {
                        GaitError::Usage(format!("--offset expects a number, got '{raw}'"))
                    })?;
                }
                "--output-dir" => {
                    output_dir = Some(PathBuf::from(next_value(&mut iter, arg)?));
                }
                "--coverage-mean" => policy = AveragingPolicy::ContributingCycles,
                flag if flag.starts_with("--") => {
                    return Err(GaitError::Usage(format!("unknown option '{flag}'")));
                }
                positional => {
                    if input_file.is_none() {
                        input_file = Some(PathBuf::from(positional));
                    } else {
                        variables.push(positional.to_string());
                    }
                }
            }
        }

        let input_file =
            input_file.ok_or_else(|| GaitError::Usage("missing input CSV file".to_string()))?;
        if variables.is_empty() {
            variables.push(DEFAULT_PLOT_VARIABLE.to_string());
        }
        for name in variables.iter().chain(std::iter::once(&event_column)) {
            column_index(name)?;
        }
        let output_dir = output_dir.unwrap_or_else(|| default_output_dir(&input_file));

        Ok(CliAction::Run(AnalysisConfig {
            input_file,
            variables,
            event_column,
            offset,
            output_dir,
            policy,
        }))
    }

    /// File stem used for plot titles and output names.
    pub fn root_name(&self) -> String {
        self.input_file
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned()
    }
}

fn next_value<'a>(
    iter: &mut std::slice::Iter<'a, String>,
    flag: &str,
) -> Result<&'a str, GaitError> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| GaitError::Usage(format!("{flag} expects a value")))
}

fn default_output_dir(input_file: &Path) -> PathBuf {
    match input_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}


// src/analysis_config.rs
