//! The closed-form life formula and its truncating duration breakdown.

use crate::error::EstimatorError;
use mlife_domain::life::{OperatingProfile, ProfileField};
use mlife_domain::model::LifeModel;

/// Whole years, months and days of a remaining life value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeBreakdown {
    pub years: u64,
    pub months: u8,
    pub days: u8,
}

/// Converts °C to the model's absolute scale.
#[must_use]
pub fn absolute_temperature(model: &LifeModel, temperature_c: f64) -> f64 {
    temperature_c + model.kelvin_offset
}

/// Rejects inputs the formula cannot evaluate.
///
/// # Errors
/// [`EstimatorError::InvalidInput`] when an input is not finite, when usage hours
/// or stress cycles are not strictly positive, or when the absolute temperature
/// is not strictly positive.
pub fn validate_profile(model: &LifeModel, profile: &OperatingProfile) -> Result<(), EstimatorError> {
    for field in [
        ProfileField::UsageHoursPerYear,
        ProfileField::StressCyclesPerYear,
        ProfileField::OperatingTemperatureCelsius,
    ] {
        let value = profile.value(field);
        if !value.is_finite() {
            return Err(EstimatorError::invalid_input(format!("{field} must be a finite number")));
        }
    }

    for field in [ProfileField::UsageHoursPerYear, ProfileField::StressCyclesPerYear] {
        let value = profile.value(field);
        if value <= 0.0 {
            return Err(EstimatorError::invalid_input(format!(
                "{field} must be greater than zero, got {value}"
            )));
        }
    }

    let kelvin = absolute_temperature(model, profile.operating_temperature_celsius);
    if kelvin <= 0.0 {
        return Err(EstimatorError::invalid_input(format!(
            "{} of {} °C is at or below absolute zero",
            ProfileField::OperatingTemperatureCelsius,
            profile.operating_temperature_celsius
        )));
    }

    Ok(())
}

/// Evaluates `C * (cycles_ref / cycles) * (hours_ref / hours) * (kelvin_ref / kelvin)`.
///
/// # Errors
/// See [`validate_profile`]; additionally fails when the product overflows.
pub fn remaining_life_years(
    model: &LifeModel,
    profile: &OperatingProfile,
) -> Result<f64, EstimatorError> {
    validate_profile(model, profile)?;

    let kelvin = absolute_temperature(model, profile.operating_temperature_celsius);
    let years = (model.material_constant
        * (model.reference_stress_cycles / profile.stress_cycles_per_year))
        * (model.reference_usage_hours / profile.usage_hours_per_year)
        * (model.reference_temperature_kelvin / kelvin);

    if years.is_finite() {
        Ok(years)
    } else {
        Err(EstimatorError::invalid_input("inputs produce a non-finite remaining life"))
    }
}

/// Splits a year value into whole years, months and days.
///
/// Every step truncates, so the remainder is always carried downward and the
/// breakdown never exceeds `remaining_years`.
#[must_use]
pub fn decompose(model: &LifeModel, remaining_years: f64) -> LifeBreakdown {
    let remaining_years = remaining_years.max(0.0);
    let whole_years = remaining_years.trunc();
    let fractional_months = (remaining_years - whole_years) * model.months_per_year;
    let whole_months = fractional_months.trunc();
    let whole_days = ((fractional_months - whole_months) * model.days_per_month).trunc();

    LifeBreakdown { years: whole_years as u64, months: whole_months as u8, days: whole_days as u8 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LifeModel {
        LifeModel::default()
    }

    #[test]
    fn reference_profile_yields_material_constant_scaled_by_temperature() {
        // 100k cycles, 1000 h and 327 °C (600 K) hit every baseline exactly.
        let profile = OperatingProfile::new(1_000.0, 100_000.0, 327.0);
        let years = remaining_life_years(&model(), &profile).unwrap();
        assert!((years - 20.0).abs() < 1e-12);
    }

    #[test]
    fn temperature_uses_integral_kelvin_offset() {
        assert!((absolute_temperature(&model(), 515.0) - 788.0).abs() < f64::EPSILON);
    }

    #[test]
    fn decompose_truncates_every_component() {
        let breakdown = decompose(&model(), 1.565_744_025_903_668_8);
        assert_eq!(breakdown, LifeBreakdown { years: 1, months: 6, days: 23 });

        // 2.999.. must never round up into 3 years.
        let breakdown = decompose(&model(), 2.999_999);
        assert_eq!(breakdown.years, 2);
        assert_eq!(breakdown.months, 11);
        assert_eq!(breakdown.days, 29);
    }

    #[test]
    fn decompose_whole_years_has_no_remainder() {
        assert_eq!(decompose(&model(), 4.0), LifeBreakdown { years: 4, months: 0, days: 0 });
        assert_eq!(decompose(&model(), 0.0), LifeBreakdown { years: 0, months: 0, days: 0 });
    }

    #[test]
    fn zero_divisors_are_rejected_before_computation() {
        let err = remaining_life_years(&model(), &OperatingProfile::new(4_863.0, 0.0, 515.0))
            .unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidInput { .. }));
        assert!(err.to_string().contains("stressCyclesPerYear"));

        let err = remaining_life_years(&model(), &OperatingProfile::new(0.0, 200_000.0, 515.0))
            .unwrap_err();
        assert!(err.to_string().contains("usageHoursPerYear"));
    }

    #[test]
    fn negative_and_non_finite_inputs_are_rejected() {
        for profile in [
            OperatingProfile::new(-1.0, 200_000.0, 515.0),
            OperatingProfile::new(4_863.0, -5.0, 515.0),
            OperatingProfile::new(f64::NAN, 200_000.0, 515.0),
            OperatingProfile::new(4_863.0, f64::INFINITY, 515.0),
            OperatingProfile::new(4_863.0, 200_000.0, -273.0),
            OperatingProfile::new(4_863.0, 200_000.0, -400.0),
        ] {
            assert!(
                matches!(
                    remaining_life_years(&model(), &profile),
                    Err(EstimatorError::InvalidInput { .. })
                ),
                "profile should be rejected: {profile:?}"
            );
        }
    }

    #[test]
    fn overflowing_result_is_rejected() {
        let profile = OperatingProfile::new(1e-300, 1e-300, 515.0);
        assert!(matches!(
            remaining_life_years(&model(), &profile),
            Err(EstimatorError::InvalidInput { .. })
        ));
    }
}
