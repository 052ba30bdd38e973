/// Error types for loading landing data
use thiserror::Error;

/// Fatal problems while building a [`crate::Dataset`] from CSV.
///
/// Bad cells are not errors: they are counted in the
/// [`crate::DataQualityReport`] and the row is kept or dropped.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading the source failed
    #[error("Failed to read landings data: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Required column not found: {0}")]
    MissingColumn(&'static str),

    /// Every row was dropped or the file had no rows
    #[error("No usable landing records ({rows_read} rows read)")]
    NoRecords { rows_read: usize },
}
