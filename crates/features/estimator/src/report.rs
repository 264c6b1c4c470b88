//! Text rendering of estimates for the presentation layer.

use crate::error::EstimatorError;
use mlife_domain::life::LifeEstimate;
use std::fmt;

/// Renders the remaining-life breakdown and the first wear-out component.
#[must_use]
pub fn format_estimate(estimate: &LifeEstimate) -> String {
    format!(
        "Estimated Remaining Life: {} years, {} months, {} days.\nLikely first wear-out component: {}",
        estimate.years, estimate.months, estimate.days, estimate.component
    )
}

/// State of the result area shown next to the input form.
///
/// Starts [`ResultPanel::Idle`] and renders blank until the first trigger.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultPanel {
    #[default]
    Idle,
    Ready(LifeEstimate),
    Failed(String),
}

impl ResultPanel {
    /// Replaces the panel content with the outcome of a new estimation.
    pub fn show(&mut self, outcome: Result<LifeEstimate, EstimatorError>) {
        *self = outcome.map_or_else(|e| Self::Failed(e.to_string()), Self::Ready);
    }

    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Ready(estimate) => {
                let mut text = format_estimate(estimate);
                for warning in &estimate.warnings {
                    text.push_str("\nWarning: ");
                    text.push_str(&warning.to_string());
                }
                text
            },
            Self::Failed(message) => format!("Cannot estimate remaining life. {message}"),
        }
    }
}

impl fmt::Display for ResultPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Result<LifeEstimate, EstimatorError>> for ResultPanel {
    fn from(outcome: Result<LifeEstimate, EstimatorError>) -> Self {
        let mut panel = Self::Idle;
        panel.show(outcome);
        panel
    }
}
