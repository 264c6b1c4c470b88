use mlife_comparison::{ComparisonTable, monthly_series};
use mlife_domain::comparison::TechnicalParameter;
use proptest::prelude::*;

#[test]
fn table_series_matches_free_function() {
    let parameter = TechnicalParameter::new("Availability (%)", 88.0, 93.5);
    let table = ComparisonTable::new(vec![parameter.clone()]).unwrap();

    assert_eq!(table.monthly("Availability (%)", 42).unwrap(), monthly_series(&parameter, 42));
    assert!(table.monthly("Missing", 42).is_err());
}

#[test]
fn series_serializes_with_year_keys() {
    let series = monthly_series(&TechnicalParameter::new("Load", 1.0, 2.0), 42);
    let json = serde_json::to_value(&series).unwrap();

    assert_eq!(json["name"], "Load");
    assert_eq!(json["months"].as_array().unwrap().len(), 12);
    assert_eq!(json["series2013"].as_array().unwrap().len(), 12);
    assert_eq!(json["series2023"].as_array().unwrap().len(), 12);
}

proptest! {
    #[test]
    fn series_is_reproducible_for_any_seed(seed in any::<u64>(), v13 in -1e6f64..1e6, v23 in -1e6f64..1e6) {
        let parameter = TechnicalParameter::new("P", v13, v23);
        let first = monthly_series(&parameter, seed);
        prop_assert_eq!(&first, &monthly_series(&parameter, seed));
        prop_assert!(first.series_2013.iter().chain(&first.series_2023).all(|v| v.is_finite()));
    }
}
