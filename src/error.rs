use thiserror::Error;

use crate::types::Category;

/// Convenience result type for dataset, ingestion and currency operations.
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Error type returned across the crate.
///
/// Each kind is a distinct variant so callers can decide how to render it (for example
/// `NoMatchingItems` becomes an inline `N/A` cell rather than aborting a report).
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Underlying I/O error (e.g. file not found, permission denied, closed output).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A query was issued before any data was loaded.
    #[error("no data loaded; please load data first")]
    EmptyDataset,

    /// A query selected zero listings.
    #[error("no listings match the requested selection")]
    NoMatchingItems,

    /// The label is not present in the label set of `category`.
    #[error("unknown {category} label '{label}'")]
    UnknownLabel { category: Category, label: String },

    /// The currency code is not one of the supported codes.
    #[error("unknown currency '{code}'")]
    UnknownCurrency { code: String },

    /// The header text is longer than allowed; the previous header is kept.
    #[error("header is {len} characters long; at most {max} are allowed")]
    InvalidHeader { len: usize, max: usize },

    /// The amount to convert is not a positive finite number.
    #[error("amount must be a positive number (got {amount})")]
    InvalidAmount { amount: f64 },

    /// A currency rate is not a positive finite number.
    #[error("rate for '{code}' must be a positive number (got {rate})")]
    InvalidRate { code: String, rate: f64 },

    /// An ingestion row could not be coerced into a listing; the whole load is rejected.
    #[error("malformed record at row {row}: {message} (raw='{raw}')")]
    MalformedRecord {
        row: usize,
        raw: String,
        message: String,
    },
}
