use anyhow::{Context, Result};
use mlife::domain::config::ApiConfig;
use mlife::domain::life::OperatingProfile;
use mlife::features::comparison::{ComparisonTable, MonthlySeries};
use mlife::features::estimator::{LifeEstimator, ResultPanel};
use std::fmt::Write as _;

/// Runs one estimation; an invalid profile is returned as an error.
pub(crate) fn estimate(cfg: &ApiConfig, profile: &OperatingProfile, json: bool) -> Result<String> {
    let estimator = LifeEstimator::from_config(cfg)?;
    let estimate = estimator.estimate(profile)?;

    if json {
        return serde_json::to_string_pretty(&estimate).context("Failed to serialize estimate");
    }
    Ok(ResultPanel::Ready(estimate).render())
}

/// Renders the comparison table, one parameter per line.
pub(crate) fn parameters(cfg: &ApiConfig) -> Result<String> {
    let table = ComparisonTable::try_from(&cfg.dataset)?;
    if table.is_empty() {
        return Ok("No parameters configured.".to_owned());
    }

    let width = table.names().map(str::len).max().unwrap_or_default().max("Parameter".len());
    let mut out = format!("{:<width$}  {:>12}  {:>12}  Change", "Parameter", "2013", "2023");
    for row in table.list() {
        write!(
            out,
            "\n{:<width$}  {:>12.2}  {:>12.2}  {}",
            row.name,
            row.value_2013,
            row.value_2023,
            row.annotation()
        )?;
    }
    Ok(out)
}

/// Renders the month-wise series of one parameter.
pub(crate) fn monthly(cfg: &ApiConfig, name: &str) -> Result<String> {
    let table = ComparisonTable::try_from(&cfg.dataset)?;
    let MonthlySeries { name, months, series_2013, series_2023 } =
        table.monthly(name, cfg.dataset.seed)?;

    let mut out = format!("{name}\nMonth  {:>12}  {:>12}", "2013", "2023");
    for ((month, v13), v23) in months.iter().zip(series_2013).zip(series_2023) {
        write!(out, "\n{month:<5}  {v13:>12.2}  {v23:>12.2}")?;
    }
    Ok(out)
}
