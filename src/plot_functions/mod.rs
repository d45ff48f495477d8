// src/plot_functions/mod.rs

pub mod plot_average_cycle;
pub mod plot_cycle_overlay;
pub mod plot_variable_trace;

// src/plot_functions/mod.rs
