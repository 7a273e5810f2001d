//! `rent-explorer` loads rental listings (location, property type, price) into an in-memory
//! [`dataset::DataSet`] and answers min/avg/max questions about them.
//!
//! ## What you can ask
//!
//! - **Cross tables** ([`dataset::DataSet::cross_table`]): one statistic for every
//!   location × property type pair, ignoring filters. Pairs without listings show `N/A`.
//! - **Per-label tables** ([`dataset::DataSet::field_table`]): min/avg/max for each *active*
//!   label of one axis, counting only listings whose other-axis label is active.
//! - **Filters** ([`dataset::DataSet::toggle_label`]): flip labels in and out of the active
//!   sets. Every (re)load re-activates all labels.
//!
//! Listings come from the built-in sample or from a CSV file (`id,location,property type,price`)
//! via [`ingestion::load_into`]. A malformed row rejects the whole file and the dataset keeps its
//! previous contents.
//!
//! ## Quick example
//!
//! ```rust
//! use rent_explorer::dataset::DataSet;
//! use rent_explorer::types::{Category, Listing};
//!
//! let mut ds = DataSet::new("(c) Example Rentals");
//! ds.load(vec![
//!     Listing::new("Bronx", "Private room", 40),
//!     Listing::new("Staten Island", "Private room", 70),
//!     Listing::new("Manhattan", "Private room", 125),
//!     Listing::new("Manhattan", "Private room", 98),
//! ]);
//!
//! let s = ds.stats_for_pair("Manhattan", "Private room").unwrap();
//! assert_eq!((s.min, s.avg, s.max), (98, 111.5, 125));
//!
//! ds.toggle_label(Category::Location, "Manhattan").unwrap();
//! let s = ds.stats_for_label(Category::PropertyType, "Private room").unwrap();
//! assert_eq!((s.min, s.avg, s.max), (40, 55.0, 70));
//! ```
//!
//! ## Currency conversion
//!
//! [`currency::convert`] converts between a fixed set of currencies through USD:
//!
//! ```rust
//! let gbp = rent_explorer::currency::convert(10.0, "USD", "GBP").unwrap();
//! assert!((gbp - 8.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`dataset`]: the listing dataset and its queries
//! - [`labels`]: label sets and active label sets
//! - [`processing`]: selection, min/avg/max reduction and report rendering
//! - [`ingestion`]: CSV and sample ingestion plus observers
//! - [`currency`]: static exchange rates and the conversion table
//! - [`config`]: environment-driven configuration
//! - [`cli`]: the interactive menu session
//! - [`error`]: the shared error type

pub mod cli;
pub mod config;
pub mod currency;
pub mod dataset;
pub mod error;
pub mod ingestion;
pub mod labels;
pub mod processing;
pub mod types;

pub use error::{ExplorerError, ExplorerResult};
