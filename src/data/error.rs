use thiserror::Error;

// ---------------------------------------------------------------------------
// DataError – everything that can go wrong in the data layer
// ---------------------------------------------------------------------------

/// Errors produced while parsing raw rows or resolving chart selections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// A raw row did not split into exactly two `", "`-separated fields.
    #[error("row {row}: expected \"<country>, <rate>\", got {raw:?}")]
    MalformedRow { row: usize, raw: String },

    /// A selection event referenced an index with no matching record.
    #[error("selection index {index} has no matching record ({len} records plotted)")]
    SelectionOutOfRange { index: usize, len: usize },
}

/// Result alias for data-layer operations.
pub type DataResult<T> = Result<T, DataError>;
