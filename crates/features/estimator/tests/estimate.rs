use mlife_domain::life::{OperatingProfile, WearComponent};
use mlife_estimator::{EstimatorError, LifeEstimator, ResultPanel, estimate, format_estimate};
use proptest::prelude::*;

#[test]
fn reference_scenario() {
    let estimate = estimate(4_863.0, 200_000.0, 515.0).unwrap();

    assert!((estimate.remaining_life_years - 1.565_744).abs() < 1e-6);
    assert_eq!((estimate.years, estimate.months, estimate.days), (1, 6, 23));
    assert_eq!(estimate.component, WearComponent::TurbineBladesAndCompressors);
    assert_eq!(
        format_estimate(&estimate),
        "Estimated Remaining Life: 1 years, 6 months, 23 days.\n\
         Likely first wear-out component: Turbine Blades and Compressor Components"
    );
}

#[test]
fn rerunning_a_scenario_is_identical() {
    let first = estimate(4_863.0, 200_000.0, 515.0).unwrap();
    let second = estimate(4_863.0, 200_000.0, 515.0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn zero_divisors_fail_with_invalid_input() {
    for (usage, stress) in [(4_863.0, 0.0), (0.0, 200_000.0), (0.0, 0.0)] {
        let err = estimate(usage, stress, 515.0).unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidInput { .. }));
        assert_eq!(err.kind(), "InvalidInputError");
    }
}

#[test]
fn stress_at_bearing_threshold_is_not_bearings() {
    let at = estimate(1_000.0, 700_000.0, 100.0).unwrap();
    assert_ne!(at.component, WearComponent::BearingsAndRotating);
    let above = estimate(1_000.0, 700_001.0, 100.0).unwrap();
    assert_eq!(above.component, WearComponent::BearingsAndRotating);
}

#[test]
fn result_panel_lifecycle() {
    let mut panel = ResultPanel::default();
    assert_eq!(panel.render(), "");

    panel.show(estimate(4_863.0, 200_000.0, 515.0));
    assert!(panel.render().starts_with("Estimated Remaining Life: 1 years, 6 months, 23 days."));

    panel.show(estimate(4_863.0, 0.0, 515.0));
    let text = panel.to_string();
    assert!(text.starts_with("Cannot estimate remaining life."));
    assert!(text.contains("stressCyclesPerYear"));
}

#[test]
fn result_panel_lists_range_warnings() {
    let panel = ResultPanel::from(estimate(500.0, 200_000.0, 515.0));
    let text = panel.render();
    assert!(text.contains("\nWarning: usageHoursPerYear = 500 is outside the declared range [1000, 8000]"));
}

proptest! {
    #[test]
    fn identical_inputs_yield_identical_outputs(
        usage in 1_000.0f64..8_000.0,
        stress in 50_000.0f64..1_000_000.0,
        temperature in 100.0f64..600.0,
    ) {
        let estimator = LifeEstimator::default();
        let profile = OperatingProfile::new(usage, stress, temperature);
        prop_assert_eq!(estimator.estimate(&profile).unwrap(), estimator.estimate(&profile).unwrap());
    }

    #[test]
    fn breakdown_stays_in_bounds(
        usage in 1.0f64..20_000.0,
        stress in 1.0f64..5_000_000.0,
        temperature in -200.0f64..1_500.0,
    ) {
        let estimate = estimate(usage, stress, temperature).unwrap();
        prop_assert!(estimate.months < 12);
        prop_assert!(estimate.days < 30);
        prop_assert!((estimate.years as f64) <= estimate.remaining_life_years);
    }

    #[test]
    fn more_load_means_less_life(
        usage in 1_000.0f64..8_000.0,
        stress in 50_000.0f64..1_000_000.0,
        temperature in 100.0f64..600.0,
        factor in 1.01f64..3.0,
    ) {
        let base = estimate(usage, stress, temperature).unwrap().remaining_life_years;
        let more_usage = estimate(usage * factor, stress, temperature).unwrap().remaining_life_years;
        let more_stress = estimate(usage, stress * factor, temperature).unwrap().remaining_life_years;
        let hotter = estimate(usage, stress, temperature + factor).unwrap().remaining_life_years;

        prop_assert!(more_usage < base);
        prop_assert!(more_stress < base);
        prop_assert!(hotter < base);
    }
}
