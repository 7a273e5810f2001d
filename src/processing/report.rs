//! Report values built by [`crate::dataset::DataSet`] and their text rendering.
//!
//! Cells whose selection matched no listings are stored as `None` and rendered as `N/A`.

use std::fmt;

use crate::types::Category;

use super::reduce::{StatKind, Stats};

const NOT_AVAILABLE: &str = "N/A";
const MIN_CELL_WIDTH: usize = 10;

/// One statistic for every (location, property type) pair.
///
/// Rows are locations, columns are property types, both sorted ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossTable {
    pub stat: StatKind,
    pub locations: Vec<String>,
    pub property_types: Vec<String>,
    /// `cells[row][col]` for `locations[row]` × `property_types[col]`.
    pub cells: Vec<Vec<Option<f64>>>,
}

impl CrossTable {
    /// Look up a single cell by label.
    pub fn cell(&self, location: &str, property_type: &str) -> Option<f64> {
        let row = self.locations.iter().position(|l| l == location)?;
        let col = self.property_types.iter().position(|p| p == property_type)?;
        self.cells.get(row)?.get(col).copied().flatten()
    }
}

impl fmt::Display for CrossTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} rent by location and property type",
            self.stat.name()
        )?;

        let first = label_width(Category::Location.title(), &self.locations);
        let widths: Vec<usize> = self
            .property_types
            .iter()
            .map(|p| p.chars().count().max(MIN_CELL_WIDTH))
            .collect();

        write!(f, "{:<first$}", Category::Location.title())?;
        for (p, &w) in self.property_types.iter().zip(&widths) {
            write!(f, "  {p:>w$}")?;
        }
        writeln!(f)?;

        for (location, row) in self.locations.iter().zip(&self.cells) {
            write!(f, "{location:<first$}")?;
            for (cell, &w) in row.iter().zip(&widths) {
                write!(f, "  {:>w$}", format_cell(*cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One row of a [`FieldTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    pub label: String,
    /// `None` when no listing matched this label under the active filter.
    pub stats: Option<Stats>,
}

/// Min/avg/max for each active label of one axis, restricted to the active labels of the
/// other axis.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTable {
    pub axis: Category,
    /// Active labels of the other axis (the filter applied to every row).
    pub filter: Vec<String>,
    pub rows: Vec<FieldRow>,
}

impl FieldTable {
    /// Look up the stats for one label.
    pub fn stats(&self, label: &str) -> Option<Stats> {
        self.rows.iter().find(|r| r.label == label).and_then(|r| r.stats)
    }
}

impl fmt::Display for FieldTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let other = self.axis.other();
        writeln!(f, "Min/Avg/Max rent by {}", self.axis)?;
        if self.filter.is_empty() {
            writeln!(f, "Active {} filters: (none)", other)?;
        } else {
            writeln!(f, "Active {} filters: {}", other, self.filter.join(", "))?;
        }

        let labels: Vec<String> = self.rows.iter().map(|r| r.label.clone()).collect();
        let first = label_width(self.axis.title(), &labels);
        let w = MIN_CELL_WIDTH;
        writeln!(
            f,
            "{:<first$}  {:>w$}  {:>w$}  {:>w$}",
            self.axis.title(),
            "Min",
            "Avg",
            "Max"
        )?;

        for row in &self.rows {
            match row.stats {
                Some(s) => writeln!(
                    f,
                    "{:<first$}  {:>w$}  {:>w$.2}  {:>w$}",
                    row.label, s.min, s.avg, s.max
                )?,
                None => writeln!(
                    f,
                    "{:<first$}  {:>w$}  {:>w$}  {:>w$}",
                    row.label, NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE
                )?,
            }
        }
        Ok(())
    }
}

fn label_width(title: &str, labels: &[String]) -> usize {
    labels
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0)
}

fn format_cell(cell: Option<f64>) -> String {
    match cell {
        Some(v) => format!("{v:.2}"),
        None => NOT_AVAILABLE.to_string(),
    }
}
