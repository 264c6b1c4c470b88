//! Simulated month-wise values around the yearly figures.

use mlife_domain::comparison::TechnicalParameter;
use mlife_domain::constants::{MONTH_LABELS, SERIES_STD_DEV};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::f64::consts::PI;

/// Twelve monthly values per year for one parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySeries {
    pub name: String,
    pub months: [&'static str; 12],
    pub series_2013: [f64; 12],
    pub series_2023: [f64; 12],
}

/// Draws `N(mean, std_dev)` with the Box-Muller transform.
fn normal(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1 = rng.random::<f64>().max(1e-300);
    let u2 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt().mul_add((2.0 * PI * u2).cos() * std_dev, mean)
}

fn draw_year(rng: &mut StdRng, mean: f64) -> [f64; 12] {
    std::array::from_fn(|_| normal(rng, mean, SERIES_STD_DEV))
}

/// Month-wise series centered on the two yearly values.
///
/// Both years come from one stream seeded with `seed`: the 2013 months are
/// drawn first, then the 2023 months. The same `(parameter, seed)` always
/// yields the same series.
#[must_use]
pub fn monthly_series(parameter: &TechnicalParameter, seed: u64) -> MonthlySeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let series_2013 = draw_year(&mut rng, parameter.value_2013);
    let series_2023 = draw_year(&mut rng, parameter.value_2023);

    MonthlySeries { name: parameter.name.clone(), months: MONTH_LABELS, series_2013, series_2023 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameter() -> TechnicalParameter {
        TechnicalParameter::new("Efficiency (%)", 42.0, 45.0)
    }

    #[test]
    fn same_seed_same_series() {
        assert_eq!(monthly_series(&parameter(), 42), monthly_series(&parameter(), 42));
    }

    #[test]
    fn different_seed_different_series() {
        assert_ne!(
            monthly_series(&parameter(), 42).series_2013,
            monthly_series(&parameter(), 43).series_2013
        );
    }

    #[test]
    fn years_are_drawn_from_one_stream() {
        let same_values = TechnicalParameter::new("Flat", 10.0, 10.0);
        let series = monthly_series(&same_values, 42);
        assert_ne!(series.series_2013, series.series_2023);
    }

    #[test]
    fn values_stay_near_their_year() {
        let series = monthly_series(&parameter(), 42);
        assert_eq!(series.months[0], "Jan");
        assert_eq!(series.months[11], "Dec");
        // Twelve N(0, 1) draws beyond 6 sigma are practically impossible.
        assert!(series.series_2013.iter().all(|v| (v - 42.0).abs() < 6.0));
        assert!(series.series_2023.iter().all(|v| (v - 45.0).abs() < 6.0));
    }
}
