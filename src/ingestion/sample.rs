//! Built-in sample listings.

use crate::types::Listing;

const SAMPLE: &[(&str, &str, u32)] = &[
    ("Brooklyn", "Private room", 149),
    ("Manhattan", "Entire home/apt", 225),
    ("Manhattan", "Private room", 150),
    ("Brooklyn", "Entire home/apt", 89),
    ("Manhattan", "Entire home/apt", 80),
    ("Manhattan", "Entire home/apt", 200),
    ("Brooklyn", "Private room", 60),
    ("Manhattan", "Private room", 79),
    ("Manhattan", "Private room", 79),
    ("Manhattan", "Entire home/apt", 150),
    ("Brooklyn", "Entire home/apt", 135),
    ("Manhattan", "Private room", 85),
    ("Queens", "Private room", 89),
    ("Manhattan", "Shared room", 40),
    ("Bronx", "Private room", 40),
    ("Staten Island", "Private room", 70),
    ("Queens", "Entire home/apt", 130),
    ("Staten Island", "Entire home/apt", 100),
    ("Bronx", "Entire home/apt", 90),
    ("Brooklyn", "Shared room", 40),
];

/// A small fixed set of New York City listings covering every borough.
pub fn sample_listings() -> Vec<Listing> {
    SAMPLE
        .iter()
        .map(|&(location, property_type, price)| Listing::new(location, property_type, price))
        .collect()
}
