//! Label sets and active label sets per [`Category`].

use std::collections::BTreeSet;

use crate::error::{ExplorerError, ExplorerResult};
use crate::types::{Category, Listing};

/// Distinct labels of one axis plus the subset currently enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct AxisLabels {
    all: BTreeSet<String>,
    active: BTreeSet<String>,
}

impl AxisLabels {
    fn from_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Self {
        let all: BTreeSet<String> = labels.map(str::to_owned).collect();
        Self {
            active: all.clone(),
            all,
        }
    }
}

/// Label sets derived from a listing collection.
///
/// Invariant: for each axis, the active set is a subset of the label set. Both are rebuilt
/// from scratch by [`LabelIndex::from_listings`] and only [`LabelIndex::toggle`] changes the
/// active sets afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelIndex {
    locations: AxisLabels,
    property_types: AxisLabels,
}

impl LabelIndex {
    /// Build the index with every label active.
    pub fn from_listings(listings: &[Listing]) -> Self {
        Self {
            locations: AxisLabels::from_labels(listings.iter().map(|l| l.location.as_str())),
            property_types: AxisLabels::from_labels(
                listings.iter().map(|l| l.property_type.as_str()),
            ),
        }
    }

    fn axis(&self, category: Category) -> &AxisLabels {
        match category {
            Category::Location => &self.locations,
            Category::PropertyType => &self.property_types,
        }
    }

    fn axis_mut(&mut self, category: Category) -> &mut AxisLabels {
        match category {
            Category::Location => &mut self.locations,
            Category::PropertyType => &mut self.property_types,
        }
    }

    /// All distinct labels of `category`, sorted.
    pub fn labels(&self, category: Category) -> &BTreeSet<String> {
        &self.axis(category).all
    }

    /// Active labels of `category`, sorted.
    pub fn active(&self, category: Category) -> &BTreeSet<String> {
        &self.axis(category).active
    }

    /// Returns `true` if `label` is currently active for `category`.
    pub fn is_active(&self, category: Category, label: &str) -> bool {
        self.axis(category).active.contains(label)
    }

    /// Flip `label` in or out of the active set of `category`.
    ///
    /// Returns whether the label is active afterwards.
    pub fn toggle(&mut self, category: Category, label: &str) -> ExplorerResult<bool> {
        let axis = self.axis_mut(category);
        if !axis.all.contains(label) {
            return Err(ExplorerError::UnknownLabel {
                category,
                label: label.to_owned(),
            });
        }
        if axis.active.remove(label) {
            Ok(false)
        } else {
            axis.active.insert(label.to_owned());
            Ok(true)
        }
    }
}
