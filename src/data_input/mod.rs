// src/data_input/mod.rs

pub mod log_parser;

// src/data_input/mod.rs
