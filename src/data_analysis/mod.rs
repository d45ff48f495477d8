// src/data_analysis/mod.rs

pub mod cycle_average;
pub mod cycle_segmentation;
pub mod event_detection;

// src/data_analysis/mod.rs
