//! CSV ingestion implementation.

use std::io::Read;
use std::path::Path;

use crate::error::{ExplorerError, ExplorerResult};
use crate::types::Listing;

const LOCATION_COL: usize = 1;
const PROPERTY_TYPE_COL: usize = 2;
const PRICE_COL: usize = 3;

/// Reader settings for listing CSV files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Skip the first row as a header row.
    pub has_headers: bool,
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_headers: true,
            delimiter: b',',
        }
    }
}

/// Ingest listings from a CSV file.
///
/// Rules:
///
/// - Columns are positional: row id (ignored), location, property type, price. Extra trailing
///   columns are ignored.
/// - The price must be a non-negative integer; location and property type must be non-empty.
/// - The first offending row (including one that is not valid UTF-8) fails the whole call with
///   [`ExplorerError::MalformedRecord`].
///
/// The file handle is owned by the reader and closed on every return path.
pub fn ingest_listings_from_path(
    path: impl AsRef<Path>,
    options: &CsvOptions,
) -> ExplorerResult<Vec<Listing>> {
    let mut rdr = reader_builder(options).from_path(path)?;
    ingest_listings_from_reader(&mut rdr)
}

/// Ingest listings from an existing CSV reader.
///
/// Build readers with `flexible(true)` so short rows surface as
/// [`ExplorerError::MalformedRecord`] instead of a generic CSV error.
pub fn ingest_listings_from_reader<R: Read>(rdr: &mut csv::Reader<R>) -> ExplorerResult<Vec<Listing>> {
    let first_data_line = if rdr.has_headers() { 2 } else { 1 };

    let mut listings = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report the 1-based line number for users.
        let fallback_row = row_idx0 + first_data_line;
        let record = result.map_err(|e| read_error(e, fallback_row))?;
        let user_row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(fallback_row);
        listings.push(parse_listing(user_row, &record)?);
    }

    Ok(listings)
}

/// A [`csv::ReaderBuilder`] configured for listing files.
pub fn reader_builder(options: &CsvOptions) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(options.has_headers)
        .delimiter(options.delimiter)
        .flexible(true);
    builder
}

/// Undecodable rows are malformed records; everything else stays a reader error.
fn read_error(err: csv::Error, fallback_row: usize) -> ExplorerError {
    if let csv::ErrorKind::Utf8 { pos, err: utf8 } = err.kind() {
        return ExplorerError::MalformedRecord {
            row: pos.as_ref().map(|p| p.line() as usize).unwrap_or(fallback_row),
            raw: "<invalid utf-8>".to_string(),
            message: format!("column {} is not valid UTF-8", utf8.field() + 1),
        };
    }
    ExplorerError::Csv(err)
}

fn parse_listing(row: usize, record: &csv::StringRecord) -> ExplorerResult<Listing> {
    let malformed = |message: String| ExplorerError::MalformedRecord {
        row,
        raw: record.iter().collect::<Vec<_>>().join(","),
        message,
    };

    if record.len() <= PRICE_COL {
        return Err(malformed(format!(
            "expected at least {} columns (id, location, property type, price), found {}",
            PRICE_COL + 1,
            record.len()
        )));
    }

    let location = record.get(LOCATION_COL).unwrap_or("").trim();
    if location.is_empty() {
        return Err(malformed("location is empty".to_string()));
    }

    let property_type = record.get(PROPERTY_TYPE_COL).unwrap_or("").trim();
    if property_type.is_empty() {
        return Err(malformed("property type is empty".to_string()));
    }

    let raw_price = record.get(PRICE_COL).unwrap_or("").trim();
    let price = raw_price
        .parse::<u32>()
        .map_err(|e| malformed(format!("price '{raw_price}' is not a non-negative integer: {e}")))?;

    Ok(Listing::new(location, property_type, price))
}
