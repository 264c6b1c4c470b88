//! # Parameter Comparison
//!
//! Read-only views over the configured 2013/2023 technical parameter dataset:
//! per-parameter percentage change, the grouped overview table and a seeded
//! month-wise series for trend charts.
//!
//! ```rust
//! use mlife_comparison::{ComparisonTable, percentage_change};
//! use mlife_domain::comparison::TechnicalParameter;
//!
//! let table = ComparisonTable::new(vec![TechnicalParameter::new("Efficiency (%)", 40.0, 50.0)]).unwrap();
//! assert_eq!(table.get("Efficiency (%)").unwrap().annotation(), "25.00% change");
//! assert_eq!(percentage_change(0.0, 7.0), 0.0);
//! ```

#[cfg(feature = "server")]
pub mod api;
mod error;
mod series;

pub use crate::error::{ComparisonError, ComparisonErrorExt};
pub use crate::series::{MonthlySeries, monthly_series};
use mlife_domain::comparison::TechnicalParameter;
use mlife_domain::config::DatasetConfig;
#[cfg(feature = "server")]
use mlife_domain::registry::{FeatureSlice, InitializedSlice};
use serde::Serialize;

/// Relative change from 2013 to 2023 in percent; `0` when the 2013 value is `0`.
#[must_use]
pub fn percentage_change(value_2013: f64, value_2023: f64) -> f64 {
    if value_2013 == 0.0 { 0.0 } else { (value_2023 - value_2013) / value_2013 * 100.0 }
}

/// A dataset row together with its derived change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterComparison {
    pub name: String,
    pub value_2013: f64,
    pub value_2023: f64,
    pub percentage_change: f64,
}

impl ParameterComparison {
    /// Chart annotation, e.g. `"12.50% change"`.
    #[must_use]
    pub fn annotation(&self) -> String {
        format!("{:.2}% change", self.percentage_change)
    }
}

impl From<&TechnicalParameter> for ParameterComparison {
    fn from(parameter: &TechnicalParameter) -> Self {
        Self {
            name: parameter.name.clone(),
            value_2013: parameter.value_2013,
            value_2023: parameter.value_2023,
            percentage_change: percentage_change(parameter.value_2013, parameter.value_2023),
        }
    }
}

/// The dataset in its configured order, addressable by parameter name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonTable {
    parameters: Vec<TechnicalParameter>,
}

impl ComparisonTable {
    /// Builds a table, rejecting duplicate or blank names and non-finite values.
    ///
    /// # Errors
    /// [`ComparisonError::InvalidDataset`] naming the offending parameter.
    pub fn new(parameters: Vec<TechnicalParameter>) -> Result<Self, ComparisonError> {
        for (index, parameter) in parameters.iter().enumerate() {
            if parameter.name.trim().is_empty() {
                return Err(invalid_dataset(format!("parameter #{index} has a blank name")));
            }
            if !parameter.value_2013.is_finite() || !parameter.value_2023.is_finite() {
                return Err(invalid_dataset(format!("'{}' has a non-finite value", parameter.name)));
            }
            if parameters[..index].iter().any(|p| p.name == parameter.name) {
                return Err(invalid_dataset(format!("'{}' is listed twice", parameter.name)));
            }
        }
        Ok(Self { parameters })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Parameter names in dataset order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }

    /// Every parameter with its percentage change, in dataset order.
    #[must_use]
    pub fn list(&self) -> Vec<ParameterComparison> {
        self.parameters.iter().map(ParameterComparison::from).collect()
    }

    /// The raw dataset row for `name`.
    ///
    /// # Errors
    /// [`ComparisonError::UnknownParameter`] if `name` is not configured.
    pub fn parameter(&self, name: &str) -> Result<&TechnicalParameter, ComparisonError> {
        self.parameters.iter().find(|p| p.name == name).ok_or_else(|| {
            ComparisonError::UnknownParameter {
                message: format!("'{name}' is not in the dataset").into(),
                context: None,
            }
        })
    }

    /// Comparison of a single parameter.
    ///
    /// # Errors
    /// [`ComparisonError::UnknownParameter`] if `name` is not configured.
    pub fn get(&self, name: &str) -> Result<ParameterComparison, ComparisonError> {
        self.parameter(name).map(ParameterComparison::from)
    }

    /// Month-wise series of a single parameter.
    ///
    /// # Errors
    /// [`ComparisonError::UnknownParameter`] if `name` is not configured.
    pub fn monthly(&self, name: &str, seed: u64) -> Result<MonthlySeries, ComparisonError> {
        self.parameter(name).map(|p| monthly_series(p, seed))
    }
}

impl TryFrom<&DatasetConfig> for ComparisonTable {
    type Error = ComparisonError;

    fn try_from(config: &DatasetConfig) -> Result<Self, Self::Error> {
        Self::new(config.parameters.clone()).context("dataset configuration")
    }
}

fn invalid_dataset(message: String) -> ComparisonError {
    ComparisonError::InvalidDataset { message: message.into(), context: None }
}

/// Feature slice holding the dataset and the series seed.
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct Comparison {
    pub table: ComparisonTable,
    pub seed: u64,
}

#[cfg(feature = "server")]
impl FeatureSlice for Comparison {
    fn name(&self) -> &'static str {
        "comparison"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initializes the comparison slice from the `dataset` configuration section.
///
/// # Errors
/// [`ComparisonError::InvalidDataset`] if the configured dataset is malformed.
#[cfg(feature = "server")]
pub fn init(config: &DatasetConfig) -> Result<InitializedSlice, ComparisonError> {
    let table = ComparisonTable::try_from(config)?;
    if table.is_empty() {
        tracing::warn!("Comparison dataset is empty; parameter routes will return no data");
    }
    tracing::info!(parameters = table.len(), seed = config.seed, "Comparison slice initialized");
    Ok(InitializedSlice::new(Comparison { table, seed: config.seed }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ComparisonTable {
        ComparisonTable::new(vec![
            TechnicalParameter::new("Efficiency (%)", 40.0, 50.0),
            TechnicalParameter::new("Heat Rate (kJ/kWh)", 10_000.0, 9_000.0),
            TechnicalParameter::new("Forced Outages", 0.0, 3.0),
        ])
        .unwrap()
    }

    #[test]
    fn percentage_change_handles_growth_decline_and_zero_base() {
        assert!((percentage_change(40.0, 50.0) - 25.0).abs() < 1e-12);
        assert!((percentage_change(10_000.0, 9_000.0) + 10.0).abs() < 1e-12);
        assert!(percentage_change(0.0, 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn list_preserves_dataset_order() {
        let names: Vec<_> = table().list().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Efficiency (%)", "Heat Rate (kJ/kWh)", "Forced Outages"]);
    }

    #[test]
    fn annotation_uses_two_decimals() {
        let table = table();
        assert_eq!(table.get("Heat Rate (kJ/kWh)").unwrap().annotation(), "-10.00% change");
        assert_eq!(table.get("Forced Outages").unwrap().annotation(), "0.00% change");
    }

    #[test]
    fn unknown_parameter_is_an_error() {
        let err = table().get("Voltage").unwrap_err();
        assert_eq!(err.kind(), "UnknownParameterError");
        assert!(err.to_string().contains("Voltage"));
    }

    #[test]
    fn malformed_datasets_are_rejected() {
        let duplicate = vec![
            TechnicalParameter::new("A", 1.0, 2.0),
            TechnicalParameter::new("A", 3.0, 4.0),
        ];
        assert!(ComparisonTable::new(duplicate).is_err());
        assert!(ComparisonTable::new(vec![TechnicalParameter::new(" ", 1.0, 2.0)]).is_err());
        assert!(ComparisonTable::new(vec![TechnicalParameter::new("B", f64::NAN, 2.0)]).is_err());
    }

    #[test]
    fn dataset_config_context_is_attached() {
        let config = DatasetConfig {
            parameters: vec![TechnicalParameter::new("", 1.0, 1.0)],
            ..DatasetConfig::default()
        };
        let err = ComparisonTable::try_from(&config).unwrap_err();
        assert!(err.to_string().contains("dataset configuration"));
    }
}
