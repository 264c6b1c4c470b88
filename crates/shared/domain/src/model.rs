use crate::constants::{
    DAYS_PER_MONTH, KELVIN_OFFSET, MATERIAL_CONSTANT, MONTHS_PER_YEAR, REFERENCE_STRESS_CYCLES,
    REFERENCE_TEMPERATURE_KELVIN, REFERENCE_USAGE_HOURS, STRESS_CYCLES_RANGE,
    TEMPERATURE_CELSIUS_RANGE, USAGE_HOURS_RANGE,
};
use crate::life::ProfileField;
use serde::{Deserialize, Serialize};

/// Empirical parameters of the life formula.
///
/// `remaining = C * (cycles_ref / cycles) * (hours_ref / hours) * (kelvin_ref / (celsius + offset))`
///
/// The default is the fixed single-material model; overriding it from
/// configuration only makes the assumptions explicit, the formula shape never changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeModel {
    pub material_constant: f64,
    pub reference_stress_cycles: f64,
    pub reference_usage_hours: f64,
    pub reference_temperature_kelvin: f64,
    pub kelvin_offset: f64,
    pub months_per_year: f64,
    pub days_per_month: f64,
}

impl Default for LifeModel {
    fn default() -> Self {
        Self {
            material_constant: MATERIAL_CONSTANT,
            reference_stress_cycles: REFERENCE_STRESS_CYCLES,
            reference_usage_hours: REFERENCE_USAGE_HOURS,
            reference_temperature_kelvin: REFERENCE_TEMPERATURE_KELVIN,
            kelvin_offset: KELVIN_OFFSET,
            months_per_year: MONTHS_PER_YEAR,
            days_per_month: DAYS_PER_MONTH,
        }
    }
}

/// Inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl From<(f64, f64)> for ValueRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// Declared operating ranges of the three inputs.
///
/// These are UI hints: values outside them are estimated and flagged, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingLimits {
    pub usage_hours_per_year: ValueRange,
    pub stress_cycles_per_year: ValueRange,
    pub operating_temperature_celsius: ValueRange,
}

impl OperatingLimits {
    #[must_use]
    pub const fn range(&self, field: ProfileField) -> ValueRange {
        match field {
            ProfileField::UsageHoursPerYear => self.usage_hours_per_year,
            ProfileField::StressCyclesPerYear => self.stress_cycles_per_year,
            ProfileField::OperatingTemperatureCelsius => self.operating_temperature_celsius,
        }
    }
}

impl Default for OperatingLimits {
    fn default() -> Self {
        Self {
            usage_hours_per_year: USAGE_HOURS_RANGE.into(),
            stress_cycles_per_year: STRESS_CYCLES_RANGE.into(),
            operating_temperature_celsius: TEMPERATURE_CELSIUS_RANGE.into(),
        }
    }
}
