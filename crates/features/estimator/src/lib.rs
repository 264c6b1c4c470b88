//! # Life Estimation
//!
//! Estimates the remaining mechanical service life of an asset from its yearly
//! usage hours, yearly stress cycles and operating temperature, and predicts
//! which component category wears out first.
//!
//! ## Model
//!
//! ```text
//! years = C * (100000 / cycles) * (1000 / hours) * (600 / (°C + 273)),  C = 20
//! ```
//!
//! The value is broken down into whole years, months and days by truncation
//! ([`formula::decompose`]) and the component is picked by the ordered
//! decision list in [`rules`].
//!
//! ## Example
//!
//! ```rust
//! use mlife_estimator::{estimate, format_estimate};
//!
//! let estimate = estimate(4863.0, 200_000.0, 515.0).unwrap();
//! assert_eq!((estimate.years, estimate.months, estimate.days), (1, 6, 23));
//! assert!(format_estimate(&estimate).starts_with("Estimated Remaining Life: 1 years"));
//! ```

#[cfg(feature = "server")]
pub mod api;
mod error;
pub mod formula;
mod report;
pub mod rules;

pub use crate::error::{EstimatorError, EstimatorErrorExt};
pub use crate::report::{ResultPanel, format_estimate};
use mlife_domain::config::ApiConfigInner;
use mlife_domain::life::{LifeEstimate, OperatingProfile, ProfileField, RangeWarning};
use mlife_domain::model::{LifeModel, OperatingLimits};
#[cfg(feature = "server")]
use mlife_domain::registry::{FeatureSlice, InitializedSlice};
use tracing::{debug, warn};

/// Stateless estimator bound to a model and its declared input ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LifeEstimator {
    model: LifeModel,
    limits: OperatingLimits,
}

impl LifeEstimator {
    /// Builds an estimator after checking that the model can produce finite,
    /// positive lifetimes.
    ///
    /// # Errors
    /// [`EstimatorError::InvalidModel`] if any model constant is not finite or not
    /// strictly positive, or if a declared range is inverted.
    pub fn new(model: LifeModel, limits: OperatingLimits) -> Result<Self, EstimatorError> {
        let constants = [
            ("material_constant", model.material_constant),
            ("reference_stress_cycles", model.reference_stress_cycles),
            ("reference_usage_hours", model.reference_usage_hours),
            ("reference_temperature_kelvin", model.reference_temperature_kelvin),
            ("months_per_year", model.months_per_year),
            ("days_per_month", model.days_per_month),
        ];
        if let Some((name, value)) =
            constants.into_iter().find(|(_, value)| !value.is_finite() || *value <= 0.0)
        {
            return Err(EstimatorError::InvalidModel {
                message: format!("{name} must be a positive finite number, got {value}").into(),
                context: None,
            });
        }
        if !model.kelvin_offset.is_finite() {
            return Err(EstimatorError::InvalidModel {
                message: "kelvin_offset must be finite".into(),
                context: None,
            });
        }

        for field in [
            ProfileField::UsageHoursPerYear,
            ProfileField::StressCyclesPerYear,
            ProfileField::OperatingTemperatureCelsius,
        ] {
            let range = limits.range(field);
            if range.min > range.max {
                return Err(EstimatorError::InvalidModel {
                    message: format!("declared range of {field} is inverted").into(),
                    context: None,
                });
            }
        }

        Ok(Self { model, limits })
    }

    /// Builds an estimator from the `model` and `limits` configuration sections.
    ///
    /// # Errors
    /// See [`LifeEstimator::new`].
    pub fn from_config(config: &ApiConfigInner) -> Result<Self, EstimatorError> {
        Self::new(config.model, config.limits).context("model/limits configuration")
    }

    #[must_use]
    pub const fn model(&self) -> &LifeModel {
        &self.model
    }

    #[must_use]
    pub const fn limits(&self) -> &OperatingLimits {
        &self.limits
    }

    /// Estimates remaining life for `profile`.
    ///
    /// Inputs outside the declared ranges are still estimated; each one is
    /// reported in [`LifeEstimate::warnings`] and logged at `WARN`.
    ///
    /// # Errors
    /// [`EstimatorError::InvalidInput`] for non-positive usage hours or stress
    /// cycles, non-finite inputs, temperatures at or below absolute zero, or a
    /// non-finite result.
    pub fn estimate(&self, profile: &OperatingProfile) -> Result<LifeEstimate, EstimatorError> {
        let remaining_life_years = formula::remaining_life_years(&self.model, profile)?;
        let breakdown = formula::decompose(&self.model, remaining_life_years);
        let component = rules::classify(profile);
        let warnings = self.range_warnings(profile);

        for warning in &warnings {
            warn!(
                field = %warning.field,
                value = warning.value,
                min = warning.min,
                max = warning.max,
                "Input outside declared operating range"
            );
        }
        debug!(
            remaining_life_years,
            years = breakdown.years,
            months = breakdown.months,
            days = breakdown.days,
            component = %component,
            "Estimated remaining life"
        );

        Ok(LifeEstimate {
            remaining_life_years,
            years: breakdown.years,
            months: breakdown.months,
            days: breakdown.days,
            component,
            warnings,
        })
    }

    /// Inputs of `profile` that fall outside the declared ranges.
    #[must_use]
    pub fn range_warnings(&self, profile: &OperatingProfile) -> Vec<RangeWarning> {
        [
            ProfileField::UsageHoursPerYear,
            ProfileField::StressCyclesPerYear,
            ProfileField::OperatingTemperatureCelsius,
        ]
        .into_iter()
        .filter_map(|field| {
            let range = self.limits.range(field);
            let value = profile.value(field);
            (!range.contains(value)).then_some(RangeWarning {
                field,
                value,
                min: range.min,
                max: range.max,
            })
        })
        .collect()
    }
}

/// Estimates remaining life with the fixed default model.
///
/// # Errors
/// [`EstimatorError::InvalidInput`] if `stress_cycles` or `usage_hours` is not
/// strictly positive, or any input is unusable (see [`LifeEstimator::estimate`]).
pub fn estimate(
    usage_hours: f64,
    stress_cycles: f64,
    temperature_c: f64,
) -> Result<LifeEstimate, EstimatorError> {
    LifeEstimator::default().estimate(&OperatingProfile::new(usage_hours, stress_cycles, temperature_c))
}

/// Feature slice holding the configured estimator.
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct Estimator {
    pub estimator: LifeEstimator,
}

#[cfg(feature = "server")]
impl FeatureSlice for Estimator {
    fn name(&self) -> &'static str {
        "estimator"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initializes the estimator slice from configuration.
///
/// # Errors
/// [`EstimatorError::InvalidModel`] if the configured model is unusable.
#[cfg(feature = "server")]
pub fn init(config: &ApiConfigInner) -> Result<InitializedSlice, EstimatorError> {
    let estimator = LifeEstimator::from_config(config)?;
    tracing::info!(model = ?estimator.model(), "Estimator slice initialized");
    Ok(InitializedSlice::new(Estimator { estimator }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlife_domain::life::WearComponent;
    use mlife_domain::model::ValueRange;

    #[test]
    fn default_estimator_accepts_fixed_model() {
        assert!(LifeEstimator::new(LifeModel::default(), OperatingLimits::default()).is_ok());
    }

    #[test]
    fn unusable_models_are_rejected() {
        let model = LifeModel { reference_usage_hours: 0.0, ..LifeModel::default() };
        let err = LifeEstimator::new(model, OperatingLimits::default()).unwrap_err();
        assert_eq!(err.kind(), "InvalidModelError");
        assert!(err.to_string().contains("reference_usage_hours"));

        let limits = OperatingLimits {
            stress_cycles_per_year: ValueRange::new(10.0, 1.0),
            ..OperatingLimits::default()
        };
        assert!(LifeEstimator::new(LifeModel::default(), limits).is_err());
    }

    #[test]
    fn in_range_profile_has_no_warnings() {
        let estimate = estimate(4_863.0, 200_000.0, 515.0).unwrap();
        assert!(!estimate.has_warnings());
    }

    #[test]
    fn out_of_range_profile_is_estimated_and_flagged() {
        let estimate = estimate(9_000.0, 20_000.0, 50.0).unwrap();
        let fields: Vec<_> = estimate.warnings.iter().map(|w| w.field).collect();
        assert_eq!(
            fields,
            [
                ProfileField::UsageHoursPerYear,
                ProfileField::StressCyclesPerYear,
                ProfileField::OperatingTemperatureCelsius,
            ]
        );
        assert!(estimate.remaining_life_years > 0.0);
        assert_eq!(estimate.component, WearComponent::PipingAndStructural);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let estimator = LifeEstimator::default();
        let low = OperatingProfile::new(1_000.0, 50_000.0, 100.0);
        let high = OperatingProfile::new(8_000.0, 1_000_000.0, 600.0);
        assert!(estimator.range_warnings(&low).is_empty());
        assert!(estimator.range_warnings(&high).is_empty());
    }

    #[test]
    fn custom_model_scales_result() {
        let model = LifeModel { material_constant: 40.0, ..LifeModel::default() };
        let estimator = LifeEstimator::new(model, OperatingLimits::default()).unwrap();
        let profile = OperatingProfile::new(1_000.0, 100_000.0, 327.0);
        let estimate = estimator.estimate(&profile).unwrap();
        assert!((estimate.remaining_life_years - 40.0).abs() < 1e-12);
        assert_eq!((estimate.years, estimate.months, estimate.days), (40, 0, 0));
    }
}
