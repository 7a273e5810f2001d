use std::collections::BTreeSet;

use proptest::prelude::*;

use rent_explorer::dataset::DataSet;
use rent_explorer::ingestion::{load_into, sample_listings, IngestionOptions, ListingSource};
use rent_explorer::processing::StatKind;
use rent_explorer::types::{Category, Listing};
use rent_explorer::ExplorerError;

fn four_listings() -> Vec<Listing> {
    vec![
        Listing::new("Bronx", "Private room", 40),
        Listing::new("Staten Island", "Private room", 70),
        Listing::new("Manhattan", "Private room", 125),
        Listing::new("Manhattan", "Private room", 98),
    ]
}

#[test]
fn pair_stats_for_the_four_listing_scenario() {
    let mut ds = DataSet::default();
    assert_eq!(ds.load(four_listings()), 4);

    let s = ds.stats_for_pair("Manhattan", "Private room").unwrap();
    assert_eq!((s.min, s.avg, s.max), (98, 111.5, 125));
    assert!(matches!(
        ds.stats_for_pair("Staten Island", "Entire home/apt"),
        Err(ExplorerError::NoMatchingItems)
    ));
}

#[test]
fn toggled_location_is_excluded_from_property_type_stats() {
    let mut ds = DataSet::default();
    ds.load(four_listings());
    ds.toggle_label(Category::Location, "Manhattan").unwrap();

    let s = ds.stats_for_label(Category::PropertyType, "Private room").unwrap();
    assert_eq!((s.min, s.avg, s.max), (40, 55.0, 70));
}

#[test]
fn label_snapshots_do_not_track_later_toggles() {
    let mut ds = DataSet::default();
    ds.load(four_listings());
    let before = ds.active_labels(Category::Location).unwrap();
    ds.toggle_label(Category::Location, "Bronx").unwrap();
    assert_eq!(before, vec!["Bronx", "Manhattan", "Staten Island"]);
    assert_eq!(ds.active_labels(Category::Location).unwrap(), vec!["Manhattan", "Staten Island"]);
}

#[test]
fn cross_table_axes_are_sorted_and_stable() {
    let mut ds = DataSet::default();
    ds.load(sample_listings());
    let a = ds.cross_table(StatKind::Avg).unwrap();
    let b = ds.cross_table(StatKind::Avg).unwrap();
    assert_eq!(a, b);

    let mut sorted = a.locations.clone();
    sorted.sort();
    assert_eq!(a.locations, sorted);
    assert_eq!(a.locations.len(), 5);
    assert_eq!(a.property_types, vec!["Entire home/apt", "Private room", "Shared room"]);

    // No shared rooms in the Bronx in the sample.
    assert_eq!(a.cell("Bronx", "Shared room"), None);
    assert_eq!(a.cell("Bronx", "Private room"), Some(40.0));
}

#[test]
fn failed_load_keeps_previous_data() {
    let mut ds = DataSet::default();
    ds.load(four_listings());
    ds.toggle_label(Category::Location, "Bronx").unwrap();

    let err = load_into(
        &mut ds,
        &ListingSource::Csv("tests/fixtures/listings_bad_price.csv".into()),
        &IngestionOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ExplorerError::MalformedRecord { .. }));

    assert_eq!(ds.record_count(), 4);
    assert!(!ds.is_active(Category::Location, "Bronx"));
}

#[test]
fn load_into_from_csv_replaces_data() {
    let mut ds = DataSet::default();
    ds.load(four_listings());
    let n = load_into(
        &mut ds,
        &ListingSource::Csv("tests/fixtures/listings.csv".into()),
        &IngestionOptions::default(),
    )
    .unwrap();
    assert_eq!(n, 10);
    assert_eq!(ds.labels(Category::Location).unwrap(), vec!["Brooklyn", "Manhattan"]);
    let s = ds.stats_for_pair("Manhattan", "Entire home/apt").unwrap();
    assert_eq!((s.min, s.max, s.count), (80, 225, 4));
    assert!((s.avg - 163.75).abs() < 1e-9);
}

#[test]
fn display_field_table_renders_na_for_filtered_out_labels() {
    let mut ds = DataSet::default();
    ds.load(four_listings());
    ds.load(vec![
        Listing::new("Bronx", "Private room", 40),
        Listing::new("Manhattan", "Entire home/apt", 200),
    ]);
    ds.toggle_label(Category::PropertyType, "Entire home/apt").unwrap();

    let mut out = Vec::new();
    ds.display_field_table(Category::Location, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Active property type filters: Private room"));
    let manhattan = text.lines().find(|l| l.starts_with("Manhattan")).unwrap();
    assert_eq!(manhattan.matches("N/A").count(), 3);
}

fn arb_listings() -> impl Strategy<Value = Vec<Listing>> {
    let location = prop::sample::select(vec!["Bronx", "Brooklyn", "Manhattan", "Queens", "Staten Island"]);
    let property_type = prop::sample::select(vec!["Entire home/apt", "Private room", "Shared room"]);
    prop::collection::vec(
        (location, property_type, 0u32..10_000).prop_map(|(l, p, price)| Listing::new(l, p, price)),
        0..60,
    )
}

fn arb_toggles() -> impl Strategy<Value = Vec<(bool, usize)>> {
    prop::collection::vec((any::<bool>(), 0usize..8), 0..20)
}

fn axis_of(is_location: bool) -> Category {
    if is_location {
        Category::Location
    } else {
        Category::PropertyType
    }
}

proptest! {
    #[test]
    fn active_labels_stay_within_labels(listings in arb_listings(), toggles in arb_toggles()) {
        let mut ds = DataSet::default();
        ds.load(listings);
        for (is_location, pick) in toggles {
            let axis = axis_of(is_location);
            let labels = ds.labels(axis).unwrap();
            if labels.is_empty() {
                continue;
            }
            ds.toggle_label(axis, &labels[pick % labels.len()]).unwrap();

            for c in Category::ALL {
                let all: BTreeSet<String> = ds.labels(c).unwrap().into_iter().collect();
                let active: BTreeSet<String> = ds.active_labels(c).unwrap().into_iter().collect();
                prop_assert!(active.is_subset(&all));
            }
        }
    }

    #[test]
    fn toggling_twice_restores_active_labels(listings in arb_listings(), is_location in any::<bool>(), pick in 0usize..8) {
        let mut ds = DataSet::default();
        ds.load(listings);
        let axis = axis_of(is_location);
        let labels = ds.labels(axis).unwrap();
        prop_assume!(!labels.is_empty());
        let label = &labels[pick % labels.len()];

        let before = ds.active_labels(axis).unwrap();
        ds.toggle_label(axis, label).unwrap();
        prop_assert_ne!(&ds.active_labels(axis).unwrap(), &before);
        ds.toggle_label(axis, label).unwrap();
        prop_assert_eq!(ds.active_labels(axis).unwrap(), before);
    }

    #[test]
    fn pair_stats_are_ordered(listings in arb_listings()) {
        let mut ds = DataSet::default();
        ds.load(listings.clone());
        for l in &listings {
            let s = ds.stats_for_pair(&l.location, &l.property_type).unwrap();
            prop_assert!(f64::from(s.min) <= s.avg);
            prop_assert!(s.avg <= f64::from(s.max));
            prop_assert!(s.count >= 1);
        }
    }
}
