//! `GET /parameters`, `GET /parameters/{name}` and `GET /parameters/{name}/monthly`.

use crate::{Comparison, ComparisonError, MonthlySeries, ParameterComparison};
use axum::Json;
use axum::extract::{Path, State};
use mlife_derive::{api_handler, api_model};
use mlife_domain::constants::COMPARISON_TAG;
use mlife_kernel::server::{ApiError, ApiState, ErrorBody};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[api_model]
/// One parameter compared between 2013 and 2023
pub struct ComparisonResponse {
    pub name: String,
    pub value_2013: f64,
    pub value_2023: f64,
    /// Relative change in percent; 0 when the 2013 value is 0
    pub percentage_change: f64,
}

#[api_model]
/// Simulated month-wise values of one parameter
pub struct MonthlySeriesResponse {
    pub name: String,
    /// `Jan` to `Dec`
    pub months: Vec<String>,
    pub series_2013: Vec<f64>,
    pub series_2023: Vec<f64>,
}

impl From<ParameterComparison> for ComparisonResponse {
    fn from(c: ParameterComparison) -> Self {
        Self {
            name: c.name,
            value_2013: c.value_2013,
            value_2023: c.value_2023,
            percentage_change: c.percentage_change,
        }
    }
}

impl From<MonthlySeries> for MonthlySeriesResponse {
    fn from(series: MonthlySeries) -> Self {
        Self {
            name: series.name,
            months: series.months.iter().map(|m| (*m).to_owned()).collect(),
            series_2013: series.series_2013.to_vec(),
            series_2023: series.series_2023.to_vec(),
        }
    }
}

impl From<ComparisonError> for ApiError {
    fn from(err: ComparisonError) -> Self {
        match err {
            ComparisonError::UnknownParameter { .. } => Self::not_found(err.kind(), err.to_string()),
            ComparisonError::InvalidDataset { .. } => Self::internal(err.to_string()),
        }
    }
}

#[api_handler(
    get,
    path = "/parameters",
    responses((status = OK, description = "All configured parameters", body = [ComparisonResponse])),
    tag = COMPARISON_TAG,
)]
pub(crate) async fn list_handler(
    State(state): State<ApiState>,
) -> Result<Json<Vec<ComparisonResponse>>, ApiError> {
    let slice = state.try_get_slice::<Comparison>()?;
    Ok(Json(slice.table.list().into_iter().map(Into::into).collect()))
}

#[api_handler(
    get,
    path = "/parameters/{name}",
    params(("name" = String, Path, description = "Parameter name as configured")),
    responses(
        (status = OK, description = "Parameter comparison", body = ComparisonResponse),
        (status = NOT_FOUND, description = "Parameter is not configured", body = ErrorBody),
    ),
    tag = COMPARISON_TAG,
)]
pub(crate) async fn get_handler(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> Result<Json<ComparisonResponse>, ApiError> {
    let slice = state.try_get_slice::<Comparison>()?;
    Ok(Json(slice.table.get(&name)?.into()))
}

#[api_handler(
    get,
    path = "/parameters/{name}/monthly",
    params(("name" = String, Path, description = "Parameter name as configured")),
    responses(
        (status = OK, description = "Month-wise series", body = MonthlySeriesResponse),
        (status = NOT_FOUND, description = "Parameter is not configured", body = ErrorBody),
    ),
    tag = COMPARISON_TAG,
)]
pub(crate) async fn monthly_handler(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> Result<Json<MonthlySeriesResponse>, ApiError> {
    let slice = state.try_get_slice::<Comparison>()?;
    Ok(Json(slice.table.monthly(&name, slice.seed)?.into()))
}

/// Routes of the comparison slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_handler))
        .routes(routes!(get_handler))
        .routes(routes!(monthly_handler))
}
