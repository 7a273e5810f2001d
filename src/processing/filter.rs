//! Listing selection for statistics queries.
//!
//! There are two distinct query shapes and they are kept apart on purpose:
//!
//! - [`Selection::Pair`] matches both axes literally and ignores the active label sets. It backs
//!   the location × property type cross tables.
//! - [`Selection::Pinned`] matches one axis literally and restricts the *other* axis to its
//!   active labels. It backs the per-location and per-property-type tables.

use std::collections::BTreeSet;

use crate::types::{Category, Listing};

/// Which listings a statistics query draws from.
#[derive(Debug, Clone, Copy)]
pub enum Selection<'a> {
    /// Exact location and property type, unfiltered.
    Pair {
        location: &'a str,
        property_type: &'a str,
    },
    /// `axis == label`, and the other axis value is one of `active_other`.
    Pinned {
        axis: Category,
        label: &'a str,
        active_other: &'a BTreeSet<String>,
    },
}

impl Selection<'_> {
    /// Returns `true` if `listing` belongs to this selection.
    pub fn matches(&self, listing: &Listing) -> bool {
        match *self {
            Selection::Pair {
                location,
                property_type,
            } => listing.location == location && listing.property_type == property_type,
            Selection::Pinned {
                axis,
                label,
                active_other,
            } => listing.label(axis) == label && active_other.contains(listing.label(axis.other())),
        }
    }
}

/// Iterate the listings matched by `selection`.
pub fn filter<'a>(
    listings: &'a [Listing],
    selection: Selection<'a>,
) -> impl Iterator<Item = &'a Listing> + 'a {
    listings.iter().filter(move |l| selection.matches(l))
}
