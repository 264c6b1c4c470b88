use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Operating conditions of the asset, as entered by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingProfile {
    pub usage_hours_per_year: f64,
    pub stress_cycles_per_year: f64,
    pub operating_temperature_celsius: f64,
}

impl OperatingProfile {
    #[must_use]
    pub const fn new(usage_hours: f64, stress_cycles: f64, temperature_c: f64) -> Self {
        Self {
            usage_hours_per_year: usage_hours,
            stress_cycles_per_year: stress_cycles,
            operating_temperature_celsius: temperature_c,
        }
    }

    /// Value of a single input field.
    #[must_use]
    pub const fn value(&self, field: ProfileField) -> f64 {
        match field {
            ProfileField::UsageHoursPerYear => self.usage_hours_per_year,
            ProfileField::StressCyclesPerYear => self.stress_cycles_per_year,
            ProfileField::OperatingTemperatureCelsius => self.operating_temperature_celsius,
        }
    }
}

/// Names of the three profile inputs, spelled as on the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ProfileField {
    UsageHoursPerYear,
    StressCyclesPerYear,
    OperatingTemperatureCelsius,
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into())
    }
}

/// Component category predicted to wear out first.
///
/// Serialized as its human readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum WearComponent {
    #[strum(serialize = "Bearings and Rotating Components")]
    BearingsAndRotating,
    #[strum(serialize = "Boiler Tubes and Heat Exchangers")]
    BoilerTubesAndHeatExchangers,
    #[strum(serialize = "Turbine Blades and Compressor Components")]
    TurbineBladesAndCompressors,
    #[strum(serialize = "Piping and Structural Components")]
    PipingAndStructural,
    #[strum(serialize = "General Mechanical Components")]
    GeneralMechanical,
}

impl WearComponent {
    #[must_use]
    pub fn label(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for WearComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for WearComponent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for WearComponent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Self::from_str(&label)
            .map_err(|_| serde::de::Error::custom(format!("Unknown wear component: {label}")))
    }
}

/// Input accepted but outside its declared operating range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeWarning {
    pub field: ProfileField,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} is outside the declared range [{}, {}]",
            self.field, self.value, self.min, self.max
        )
    }
}

/// Remaining service life derived from an [`OperatingProfile`].
///
/// `years`/`months`/`days` are truncated, so the duration is a lower bound of
/// `remaining_life_years`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeEstimate {
    pub remaining_life_years: f64,
    pub years: u64,
    /// Always in `0..=11`.
    pub months: u8,
    /// Always in `0..=29`.
    pub days: u8,
    pub component: WearComponent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<RangeWarning>,
}

impl LifeEstimate {
    /// `true` when at least one input was outside its declared range.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
