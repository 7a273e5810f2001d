//! The in-memory listing dataset.
//!
//! A [`DataSet`] starts out empty ("never loaded"). Every [`DataSet::load`] replaces all
//! listings at once, rebuilds the [`LabelIndex`] and re-activates every label. Queries issued
//! before the first load fail with [`ExplorerError::EmptyDataset`]; queries that select no
//! listings fail with [`ExplorerError::NoMatchingItems`].
//!
//! Two query paths exist and are deliberately separate:
//!
//! - [`DataSet::stats_for_pair`] / [`DataSet::cross_table`] ignore the active label sets.
//! - [`DataSet::stats_for_label`] / [`DataSet::field_table`] pin one axis and restrict the
//!   other axis to its active labels.

use std::io::Write;

use log::{debug, warn};

use crate::error::{ExplorerError, ExplorerResult};
use crate::labels::LabelIndex;
use crate::processing::{
    filter, summarize, CrossTable, FieldRow, FieldTable, Selection, StatKind, Stats,
};
use crate::types::{Category, Listing};

/// Longest accepted header, in characters.
pub const MAX_HEADER_LEN: usize = 30;

/// Listings plus their label index, header and copyright.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    listings: Option<Vec<Listing>>,
    labels: LabelIndex,
    header: String,
    copyright: String,
}

impl DataSet {
    /// Create an empty dataset carrying `copyright`.
    pub fn new(copyright: impl Into<String>) -> Self {
        Self {
            copyright: copyright.into(),
            ..Self::default()
        }
    }

    /// Create an empty dataset with a header.
    ///
    /// An over-long header is logged and replaced by the empty string.
    pub fn with_header(header: &str, copyright: impl Into<String>) -> Self {
        let mut ds = Self::new(copyright);
        if let Err(e) = ds.set_header(header) {
            warn!("ignoring dataset header: {e}");
        }
        ds
    }

    /// The report header (empty by default).
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Set the report header. Rejects text longer than [`MAX_HEADER_LEN`] characters and
    /// keeps the previous header in that case.
    pub fn set_header(&mut self, text: &str) -> ExplorerResult<()> {
        let len = text.chars().count();
        if len > MAX_HEADER_LEN {
            return Err(ExplorerError::InvalidHeader {
                len,
                max: MAX_HEADER_LEN,
            });
        }
        self.header = text.to_owned();
        Ok(())
    }

    /// Copyright notice shown under every report.
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Returns `true` once [`Self::load`] has been called (even with no listings).
    pub fn is_loaded(&self) -> bool {
        self.listings.is_some()
    }

    /// Number of loaded listings (0 if nothing was loaded).
    pub fn record_count(&self) -> usize {
        self.listings.as_ref().map_or(0, Vec::len)
    }

    /// Replace all listings and rebuild the label index. Returns the new listing count.
    pub fn load(&mut self, records: impl IntoIterator<Item = Listing>) -> usize {
        let listings: Vec<Listing> = records.into_iter().collect();
        self.labels = LabelIndex::from_listings(&listings);
        let count = listings.len();
        self.listings = Some(listings);
        debug!(
            "loaded {count} listings ({} locations, {} property types)",
            self.labels.labels(Category::Location).len(),
            self.labels.labels(Category::PropertyType).len()
        );
        count
    }

    /// The loaded listings.
    pub fn listings(&self) -> ExplorerResult<&[Listing]> {
        self.listings.as_deref().ok_or(ExplorerError::EmptyDataset)
    }

    fn index(&self) -> ExplorerResult<&LabelIndex> {
        self.listings()?;
        Ok(&self.labels)
    }

    /// Sorted snapshot of all labels of `axis`.
    pub fn labels(&self, axis: Category) -> ExplorerResult<Vec<String>> {
        Ok(self.index()?.labels(axis).iter().cloned().collect())
    }

    /// Sorted snapshot of the active labels of `axis`.
    pub fn active_labels(&self, axis: Category) -> ExplorerResult<Vec<String>> {
        Ok(self.index()?.active(axis).iter().cloned().collect())
    }

    /// Returns `true` if `label` is active for `axis` (false before any load).
    pub fn is_active(&self, axis: Category, label: &str) -> bool {
        self.labels.is_active(axis, label)
    }

    /// Flip `label` in or out of the active set of `axis`.
    pub fn toggle_label(&mut self, axis: Category, label: &str) -> ExplorerResult<()> {
        self.listings()?;
        let now_active = self.labels.toggle(axis, label)?;
        debug!("{axis} filter '{label}' is now {}", if now_active { "active" } else { "inactive" });
        Ok(())
    }

    fn stats_for(&self, selection: Selection<'_>) -> ExplorerResult<Stats> {
        let listings = self.listings()?;
        summarize(filter(listings, selection).map(|l| l.price)).ok_or(ExplorerError::NoMatchingItems)
    }

    /// Min/avg/max over listings with exactly this location and property type, ignoring the
    /// active label sets.
    pub fn stats_for_pair(&self, location: &str, property_type: &str) -> ExplorerResult<Stats> {
        self.stats_for(Selection::Pair {
            location,
            property_type,
        })
    }

    /// Min/avg/max over listings whose `axis` value is `label` and whose other-axis value is
    /// active.
    pub fn stats_for_label(&self, axis: Category, label: &str) -> ExplorerResult<Stats> {
        let index = self.index()?;
        self.stats_for(Selection::Pinned {
            axis,
            label,
            active_other: index.active(axis.other()),
        })
    }

    /// Build the `stat` cross table over the full label sets.
    pub fn cross_table(&self, stat: StatKind) -> ExplorerResult<CrossTable> {
        let locations = self.labels(Category::Location)?;
        let property_types = self.labels(Category::PropertyType)?;

        let mut cells = Vec::with_capacity(locations.len());
        for location in &locations {
            let mut row = Vec::with_capacity(property_types.len());
            for property_type in &property_types {
                row.push(optional(self.stats_for_pair(location, property_type))?.map(|s| s.get(stat)));
            }
            cells.push(row);
        }

        Ok(CrossTable {
            stat,
            locations,
            property_types,
            cells,
        })
    }

    /// Build the per-label table for the active labels of `axis`.
    pub fn field_table(&self, axis: Category) -> ExplorerResult<FieldTable> {
        let active = self.active_labels(axis)?;
        let filter = self.active_labels(axis.other())?;

        let mut rows = Vec::with_capacity(active.len());
        for label in active {
            let stats = optional(self.stats_for_label(axis, &label))?;
            rows.push(FieldRow { label, stats });
        }

        Ok(FieldTable { axis, filter, rows })
    }

    /// Render the `stat` cross table to `out`.
    pub fn display_cross_table<W: Write>(&self, stat: StatKind, out: &mut W) -> ExplorerResult<()> {
        let table = self.cross_table(stat)?;
        self.render(out, &table)
    }

    /// Render the per-label table of `axis` to `out`.
    pub fn display_field_table<W: Write>(&self, axis: Category, out: &mut W) -> ExplorerResult<()> {
        let table = self.field_table(axis)?;
        self.render(out, &table)
    }

    fn render<W: Write>(&self, out: &mut W, body: &dyn std::fmt::Display) -> ExplorerResult<()> {
        if !self.header.is_empty() {
            writeln!(out, "{}", self.header)?;
        }
        write!(out, "{body}")?;
        if !self.copyright.is_empty() {
            writeln!(out, "{}", self.copyright)?;
        }
        Ok(())
    }
}

/// Turn `NoMatchingItems` into `None`; keep every other error.
fn optional(result: ExplorerResult<Stats>) -> ExplorerResult<Option<Stats>> {
    match result {
        Ok(s) => Ok(Some(s)),
        Err(ExplorerError::NoMatchingItems) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSet, MAX_HEADER_LEN};
    use crate::error::ExplorerError;
    use crate::processing::StatKind;
    use crate::types::{Category, Listing};

    fn four_listings() -> Vec<Listing> {
        vec![
            Listing::new("Bronx", "Private room", 40),
            Listing::new("Staten Island", "Private room", 70),
            Listing::new("Manhattan", "Private room", 125),
            Listing::new("Manhattan", "Private room", 98),
        ]
    }

    fn loaded() -> DataSet {
        let mut ds = DataSet::new("(c) test");
        ds.load(four_listings());
        ds
    }

    #[test]
    fn queries_before_load_fail_with_empty_dataset() {
        let mut ds = DataSet::default();
        assert!(!ds.is_loaded());
        assert!(matches!(ds.stats_for_pair("Bronx", "Private room"), Err(ExplorerError::EmptyDataset)));
        assert!(matches!(
            ds.stats_for_label(Category::Location, "Bronx"),
            Err(ExplorerError::EmptyDataset)
        ));
        assert!(matches!(ds.labels(Category::Location), Err(ExplorerError::EmptyDataset)));
        assert!(matches!(ds.cross_table(StatKind::Avg), Err(ExplorerError::EmptyDataset)));
        assert!(matches!(ds.field_table(Category::Location), Err(ExplorerError::EmptyDataset)));
        assert!(matches!(
            ds.toggle_label(Category::Location, "Bronx"),
            Err(ExplorerError::EmptyDataset)
        ));
    }

    #[test]
    fn stats_for_pair_matches_both_axes() {
        let ds = loaded();
        let s = ds.stats_for_pair("Manhattan", "Private room").unwrap();
        assert_eq!((s.min, s.avg, s.max), (98, 111.5, 125));
        assert!(matches!(
            ds.stats_for_pair("Staten Island", "Entire home/apt"),
            Err(ExplorerError::NoMatchingItems)
        ));
    }

    #[test]
    fn stats_for_pair_ignores_active_filters() {
        let mut ds = loaded();
        ds.toggle_label(Category::Location, "Manhattan").unwrap();
        ds.toggle_label(Category::PropertyType, "Private room").unwrap();
        let s = ds.stats_for_pair("Manhattan", "Private room").unwrap();
        assert_eq!(s.count, 2);
    }

    #[test]
    fn stats_for_label_respects_the_other_axis_filter() {
        let mut ds = loaded();
        ds.toggle_label(Category::Location, "Manhattan").unwrap();
        let s = ds.stats_for_label(Category::PropertyType, "Private room").unwrap();
        assert_eq!((s.min, s.avg, s.max), (40, 55.0, 70));

        // The pinned axis itself is matched literally, even if inactive.
        let s = ds.stats_for_label(Category::Location, "Manhattan").unwrap();
        assert_eq!(s.count, 2);
    }

    #[test]
    fn stats_for_label_with_everything_filtered_is_no_match() {
        let mut ds = loaded();
        ds.toggle_label(Category::PropertyType, "Private room").unwrap();
        assert!(matches!(
            ds.stats_for_label(Category::Location, "Bronx"),
            Err(ExplorerError::NoMatchingItems)
        ));
    }

    #[test]
    fn empty_load_is_loaded_but_matches_nothing() {
        let mut ds = DataSet::default();
        assert_eq!(ds.load(Vec::new()), 0);
        assert!(ds.is_loaded());
        assert!(matches!(ds.stats_for_pair("Bronx", "Private room"), Err(ExplorerError::NoMatchingItems)));
        assert!(matches!(
            ds.stats_for_label(Category::PropertyType, "Private room"),
            Err(ExplorerError::NoMatchingItems)
        ));
        assert!(ds.labels(Category::Location).unwrap().is_empty());
    }

    #[test]
    fn reload_replaces_listings_and_resets_filters() {
        let mut ds = loaded();
        ds.toggle_label(Category::Location, "Bronx").unwrap();
        let n = ds.load(vec![Listing::new("Queens", "Shared room", 35)]);
        assert_eq!(n, 1);
        assert_eq!(ds.record_count(), 1);
        assert_eq!(ds.labels(Category::Location).unwrap(), vec!["Queens".to_string()]);
        assert_eq!(ds.active_labels(Category::Location).unwrap(), vec!["Queens".to_string()]);
        assert!(matches!(
            ds.toggle_label(Category::Location, "Bronx"),
            Err(ExplorerError::UnknownLabel { .. })
        ));
    }

    #[test]
    fn header_longer_than_limit_is_rejected_and_previous_kept() {
        let mut ds = DataSet::default();
        ds.set_header("NYC rentals").unwrap();
        let long = "x".repeat(MAX_HEADER_LEN + 1);
        assert!(matches!(
            ds.set_header(&long),
            Err(ExplorerError::InvalidHeader { len, max }) if len == MAX_HEADER_LEN + 1 && max == MAX_HEADER_LEN
        ));
        assert_eq!(ds.header(), "NYC rentals");
        ds.set_header(&"y".repeat(MAX_HEADER_LEN)).unwrap();
    }

    #[test]
    fn with_header_falls_back_to_empty() {
        let ds = DataSet::with_header(&"z".repeat(40), "(c)");
        assert_eq!(ds.header(), "");
        assert_eq!(ds.copyright(), "(c)");
    }

    #[test]
    fn cross_table_covers_every_pair() {
        let mut ds = loaded();
        ds.load(vec![
            Listing::new("Bronx", "Private room", 40),
            Listing::new("Manhattan", "Entire home/apt", 200),
        ]);
        let t = ds.cross_table(StatKind::Max).unwrap();
        assert_eq!(t.locations, vec!["Bronx", "Manhattan"]);
        assert_eq!(t.property_types, vec!["Entire home/apt", "Private room"]);
        assert_eq!(t.cells, vec![vec![None, Some(40.0)], vec![Some(200.0), None]]);
    }

    #[test]
    fn field_table_iterates_active_labels_only() {
        let mut ds = loaded();
        ds.toggle_label(Category::Location, "Bronx").unwrap();
        let t = ds.field_table(Category::Location).unwrap();
        let labels: Vec<&str> = t.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Manhattan", "Staten Island"]);
        assert_eq!(t.filter, vec!["Private room"]);
        assert_eq!(t.stats("Manhattan").map(|s| s.count), Some(2));
        assert_eq!(t.stats("Bronx"), None);
    }

    #[test]
    fn display_wraps_reports_in_header_and_copyright() {
        let mut ds = loaded();
        ds.set_header("NYC rentals").unwrap();
        let mut out = Vec::new();
        ds.display_cross_table(StatKind::Avg, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.first().copied(), Some("NYC rentals"));
        assert_eq!(lines.last().copied(), Some("(c) test"));
        assert!(text.contains("111.50"));
    }
}
