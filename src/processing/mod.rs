//! In-memory statistics over loaded listings.
//!
//! The processing layer operates on the listings held by [`crate::dataset::DataSet`]:
//!
//! - [`filter`]: which listings a query draws from ([`Selection`])
//! - [`reduce`]: min/avg/max summaries ([`Stats`], [`StatKind`])
//! - [`report`]: table values and their text rendering ([`CrossTable`], [`FieldTable`])
//!
//! ## Example: select → summarize
//!
//! ```rust
//! use rent_explorer::processing::{filter, summarize, Selection};
//! use rent_explorer::types::Listing;
//!
//! let rows = vec![
//!     Listing::new("Manhattan", "Private room", 125),
//!     Listing::new("Manhattan", "Private room", 98),
//!     Listing::new("Bronx", "Private room", 40),
//! ];
//!
//! let sel = Selection::Pair { location: "Manhattan", property_type: "Private room" };
//! let stats = summarize(filter(&rows, sel).map(|l| l.price)).unwrap();
//! assert_eq!((stats.min, stats.avg, stats.max), (98, 111.5, 125));
//! ```

pub mod filter;
pub mod reduce;
pub mod report;

pub use filter::{filter, Selection};
pub use reduce::{summarize, StatKind, Stats};
pub use report::{CrossTable, FieldRow, FieldTable};
