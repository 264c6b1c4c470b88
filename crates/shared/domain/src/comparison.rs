use serde::{Deserialize, Serialize};

/// One row of the two-year technical comparison dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalParameter {
    pub name: String,
    /// Value in the baseline year (2013).
    pub value_2013: f64,
    /// Value in the current year (2023).
    pub value_2023: f64,
}

impl TechnicalParameter {
    pub fn new(name: impl Into<String>, value_2013: f64, value_2023: f64) -> Self {
        Self { name: name.into(), value_2013, value_2023 }
    }
}
