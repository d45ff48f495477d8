// src/main.rs

use log::{info, warn};
use std::env;
use std::error::Error;
use std::fs;

use gait_cycle_render::analysis_config::{usage, AnalysisConfig, CliAction};
use gait_cycle_render::constants::MIN_STEPS_FOR_STABLE_AVERAGE;
use gait_cycle_render::crate_version;
use gait_cycle_render::data_analysis::cycle_average::average_cycles_with_policy;
use gait_cycle_render::data_analysis::cycle_segmentation::segment_cycles;
use gait_cycle_render::data_analysis::event_detection::detect_events_in_column;
use gait_cycle_render::data_input::log_parser::{load_gait_log, validate_table};
use gait_cycle_render::plot_functions::plot_average_cycle::plot_average_cycle;
use gait_cycle_render::plot_functions::plot_cycle_overlay::plot_cycle_overlay;
use gait_cycle_render::plot_functions::plot_variable_trace::plot_variable_trace;
use gait_cycle_render::GaitError;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or("gait_cycle_render");
    let config = match AnalysisConfig::from_args(args.get(1..).unwrap_or_default()) {
        Ok(CliAction::Run(config)) => config,
        Ok(CliAction::Help) => {
            println!("{}", usage(program));
            return Ok(());
        }
        Ok(CliAction::Version) => {
            println!("{program} {}", crate_version());
            return Ok(());
        }
        Err(GaitError::Usage(message)) => {
            eprintln!("Error: {message}\n\n{}", usage(program));
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    let root_name = config.root_name();

    // --- Data Reading ---
    let table = load_gait_log(&config.input_file)?;
    validate_table(&table)?;

    // --- Step Segmentation ---
    info!("--- Segmenting steps ---");
    let events = detect_events_in_column(table.view(), &config.event_column, config.offset)?;
    info!(
        "Found {} rising crossings of '{}' through {}.",
        events.len(),
        config.event_column,
        config.offset
    );
    let cycles = segment_cycles(table.view(), &events)?;
    if let (Some(shortest), Some(longest)) = (
        cycles.iter().map(|c| c.nrows()).min(),
        cycles.iter().map(|c| c.nrows()).max(),
    ) {
        info!(
            "{} steps, {} to {} samples long.",
            cycles.len(),
            shortest,
            longest
        );
    }

    // --- Step Averaging ---
    let average = match average_cycles_with_policy(&cycles, config.policy) {
        Ok(average) => {
            if cycles.len() < MIN_STEPS_FOR_STABLE_AVERAGE {
                warn!(
                    "Only {} step(s) found; the average step is not representative.",
                    cycles.len()
                );
            }
            Some(average)
        }
        Err(GaitError::NoCycles) => {
            warn!("No complete step found (need at least two heelstrikes); skipping averaging.");
            None
        }
        Err(e) => return Err(e.into()),
    };

    // --- Plotting ---
    if !config.output_dir.as_os_str().is_empty() {
        fs::create_dir_all(&config.output_dir)?;
    }

    info!("--- Generating Stacked Trace Plot ---");
    plot_variable_trace(
        &table,
        &events,
        &config.variables,
        &root_name,
        &config.output_dir,
    )?;

    info!("--- Generating Stacked Step Overlay Plot ---");
    plot_cycle_overlay(
        &cycles,
        average.as_ref(),
        &config.variables,
        &root_name,
        &config.output_dir,
    )?;

    match &average {
        Some(average) => {
            info!("--- Generating Stacked Average Step Plot ---");
            plot_average_cycle(
                average,
                cycles.len(),
                config.policy,
                &config.variables,
                &root_name,
                &config.output_dir,
            )?;
        }
        None => warn!("Average step plot not generated: no steps to average."),
    }

    Ok(())
}

// src/main.rs
