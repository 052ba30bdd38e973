use thiserror::Error;

/// Errors raised while setting up a view session.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// No records, so no default selection exists
    #[error("Dataset has no landing records to select from")]
    EmptyDataset,
}
