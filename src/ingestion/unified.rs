//! Unified ingestion entrypoint.
//!
//! Most callers should use [`load_into`], which reads listings from a [`ListingSource`] and
//! hands them to [`DataSet::load`]. Listings are fully parsed before the dataset is touched, so
//! a failed load leaves the previous data in place.
//!
//! If an [`IngestionObserver`] is configured, success/failure/alerts are reported to it.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::dataset::DataSet;
use crate::error::{ExplorerError, ExplorerResult};
use crate::types::Listing;

use super::csv::{self, CsvOptions};
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::sample;

/// Where listings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    /// The built-in sample listings.
    Sample,
    /// A CSV file.
    Csv(PathBuf),
}

impl fmt::Display for ListingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingSource::Sample => f.write_str("built-in sample"),
            ListingSource::Csv(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Options controlling ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// CSV reader settings.
    pub csv: CsvOptions,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("csv", &self.csv)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            csv: CsvOptions::default(),
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Read all listings from `source`.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use rent_explorer::ingestion::{ingest_listings, IngestionOptions, ListingSource, LogObserver};
///
/// # fn main() -> Result<(), rent_explorer::ExplorerError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(LogObserver)),
///     ..Default::default()
/// };
/// let listings = ingest_listings(&ListingSource::Csv("listings.csv".into()), &opts)?;
/// println!("rows={}", listings.len());
/// # Ok(())
/// # }
/// ```
pub fn ingest_listings(source: &ListingSource, options: &IngestionOptions) -> ExplorerResult<Vec<Listing>> {
    let result = match source {
        ListingSource::Sample => Ok(sample::sample_listings()),
        ListingSource::Csv(path) => csv::ingest_listings_from_path(path, &options.csv),
    };

    if let Some(obs) = options.observer.as_ref() {
        let ctx = IngestionContext {
            source: source.clone(),
        };
        match &result {
            Ok(rows) => obs.on_success(&ctx, IngestionStats { rows: rows.len() }),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Read all listings from `source` and load them into `dataset`.
///
/// Returns the number of loaded listings. On error `dataset` is left unchanged.
pub fn load_into(
    dataset: &mut DataSet,
    source: &ListingSource,
    options: &IngestionOptions,
) -> ExplorerResult<usize> {
    let listings = ingest_listings(source, options)?;
    Ok(dataset.load(listings))
}

fn severity_for_error(e: &ExplorerError) -> IngestionSeverity {
    match e {
        ExplorerError::Io(_) => IngestionSeverity::Critical,
        ExplorerError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        _ => IngestionSeverity::Error,
    }
}
