//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`load_into`] (from [`unified`]) which:
//!
//! - reads listings from the built-in sample or a CSV file ([`ListingSource`])
//! - replaces the contents of a [`crate::dataset::DataSet`] only if every row parsed
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! Source-specific functions are also available under [`csv`] and [`sample`].

pub mod csv;
pub mod observability;
pub mod sample;
pub mod unified;

pub use csv::CsvOptions;
pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    LogObserver,
};
pub use sample::sample_listings;
pub use unified::{ingest_listings, load_into, IngestionOptions, ListingSource};
