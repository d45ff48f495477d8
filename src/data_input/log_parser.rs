// src/data_input/log_parser.rs

use csv::{ReaderBuilder, StringRecord};
use log::{info, warn};
use ndarray::Array2;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::column_registry::{COLUMN_COUNT, COLUMN_NAMES};
use crate::error::GaitError;
use crate::types::SampleTable;

/// Loads a gait log CSV into a `SampleTable`.
pub fn load_gait_log(input_file_path: &Path) -> Result<SampleTable, GaitError> {
    info!("Reading {}", input_file_path.display());
    let file = File::open(input_file_path)?;
    parse_gait_log(BufReader::new(file))
}

/// Parses gait log CSV content.
///
/// The first row is a header and is not used for addressing: columns are taken
/// positionally in registry order. The header must have exactly `COLUMN_COUNT`
/// fields. Header names that differ from the registry are reported but
/// tolerated.
///
/// Data rows:
/// - a field that does not parse as a number becomes `NaN`;
/// - a row whose width differs from the header fails the whole load.
///
/// A log without any data row is an error.
pub fn parse_gait_log<R: Read>(reader: R) -> Result<SampleTable, GaitError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let header_record = reader.headers()?.clone();
    check_header(&header_record)?;

    let mut values: Vec<f64> = Vec::new();
    let mut n_rows = 0usize;
    let mut unparsable_fields = 0usize;

    for (row_index, result) in reader.records().enumerate() {
        let record = result?;
        // A dropped row would splice neighbouring samples and shift heelstrikes.
        if record.len() != COLUMN_COUNT {
            return Err(GaitError::RaggedRow {
                row: row_index + 1,
                expected: COLUMN_COUNT,
                actual: record.len(),
            });
        }
        for field in record.iter() {
            let value = field.parse::<f64>().unwrap_or_else(|_| {
                unparsable_fields += 1;
                f64::NAN
            });
            values.push(value);
        }
        n_rows += 1;
    }

    if unparsable_fields > 0 {
        warn!(
            "{} field(s) could not be parsed as numbers and were read as NaN.",
            unparsable_fields
        );
    }
    if n_rows == 0 {
        return Err(GaitError::EmptyLog);
    }
    info!("Finished reading {} data rows.", n_rows);

    Array2::from_shape_vec((n_rows, COLUMN_COUNT), values).map_err(|_| {
        GaitError::ColumnCountMismatch {
            expected: COLUMN_COUNT,
            actual: header_record.len(),
        }
    })
}

/// Checks that a loaded table has one column per registered variable.
pub fn validate_table(table: &SampleTable) -> Result<(), GaitError> {
    if table.ncols() != COLUMN_COUNT {
        return Err(GaitError::ColumnCountMismatch {
            expected: COLUMN_COUNT,
            actual: table.ncols(),
        });
    }
    Ok(())
}

fn check_header(header_record: &StringRecord) -> Result<(), GaitError> {
    if header_record.len() != COLUMN_COUNT {
        return Err(GaitError::ColumnCountMismatch {
            expected: COLUMN_COUNT,
            actual: header_record.len(),
        });
    }
    for (position, (found, expected)) in header_record.iter().zip(COLUMN_NAMES.iter()).enumerate() {
        if found != *expected {
            warn!(
                "Header column {} is '{}', expected '{}'; using position.",
                position, found, expected
            );
        }
    }
    Ok(())
}


// src/data_input/log_parser.rs
