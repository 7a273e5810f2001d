//! Core data model types.
//!
//! A [`Listing`] is a single observation of a rental: where it is, what kind of property it is
//! and what it costs. Listings are grouped and filtered along the two [`Category`] axes.

use std::fmt;

/// A single rental listing.
///
/// Listings are created in bulk by ingestion and handed to [`crate::dataset::DataSet::load`];
/// they are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Listing {
    /// Neighbourhood group / borough, e.g. `"Brooklyn"`.
    pub location: String,
    /// Room type, e.g. `"Private room"`.
    pub property_type: String,
    /// Nightly price in whole currency units.
    pub price: u32,
}

impl Listing {
    /// Create a new listing.
    pub fn new(location: impl Into<String>, property_type: impl Into<String>, price: u32) -> Self {
        Self {
            location: location.into(),
            property_type: property_type.into(),
            price,
        }
    }

    /// The value of this listing along `category`.
    pub fn label(&self, category: Category) -> &str {
        match category {
            Category::Location => &self.location,
            Category::PropertyType => &self.property_type,
        }
    }
}

/// Axis along which listings are grouped or filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// The listing's location.
    Location,
    /// The listing's property type.
    PropertyType,
}

impl Category {
    /// Both axes, in display order.
    pub const ALL: [Category; 2] = [Category::Location, Category::PropertyType];

    /// The opposite axis.
    pub fn other(self) -> Self {
        match self {
            Category::Location => Category::PropertyType,
            Category::PropertyType => Category::Location,
        }
    }

    /// Title-cased name, used for table headings.
    pub fn title(self) -> &'static str {
        match self {
            Category::Location => "Location",
            Category::PropertyType => "Property Type",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Location => f.write_str("location"),
            Category::PropertyType => f.write_str("property type"),
        }
    }
}
