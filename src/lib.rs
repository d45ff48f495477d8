// src/lib.rs - Library interface for the gait cycle pipeline

pub mod analysis_config;
pub mod column_registry;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod plot_framework;
pub mod plot_functions;
pub mod types;

pub use error::GaitError;

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
