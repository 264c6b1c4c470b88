//! `POST /estimate`.

use crate::{Estimator, EstimatorError, format_estimate};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use mlife_derive::{api_handler, api_model};
use mlife_domain::constants::ESTIMATOR_TAG;
use mlife_domain::life::{LifeEstimate, OperatingProfile};
use mlife_kernel::server::{ApiError, ApiState, ErrorBody};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[api_model]
/// Operating conditions to estimate
pub struct EstimateRequest {
    /// Operating hours per year
    pub usage_hours_per_year: f64,
    /// Load/stress cycles per year
    pub stress_cycles_per_year: f64,
    /// Operating temperature in °C
    pub operating_temperature_celsius: f64,
}

#[api_model]
/// Remaining life and first wear-out component
pub struct EstimateResponse {
    /// Whole years of remaining life
    pub years: u64,
    /// Whole months beyond `years` (0-11)
    pub months: u8,
    /// Whole days beyond `months` (0-29)
    pub days: u8,
    /// Component category predicted to wear out first
    pub component: String,
    /// Untruncated model output in years
    pub remaining_life_years: f64,
    /// Human readable two-line summary
    pub summary: String,
    /// Inputs outside their declared operating ranges
    pub warnings: Vec<String>,
}

impl From<EstimateRequest> for OperatingProfile {
    fn from(request: EstimateRequest) -> Self {
        Self::new(
            request.usage_hours_per_year,
            request.stress_cycles_per_year,
            request.operating_temperature_celsius,
        )
    }
}

impl From<LifeEstimate> for EstimateResponse {
    fn from(estimate: LifeEstimate) -> Self {
        Self {
            summary: format_estimate(&estimate),
            years: estimate.years,
            months: estimate.months,
            days: estimate.days,
            component: estimate.component.label().to_owned(),
            remaining_life_years: estimate.remaining_life_years,
            warnings: estimate.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<EstimatorError> for ApiError {
    fn from(err: EstimatorError) -> Self {
        match err {
            EstimatorError::InvalidInput { .. } => Self::bad_request(err.kind(), err.to_string()),
            EstimatorError::InvalidModel { .. } => Self::internal(err.to_string()),
        }
    }
}

#[api_handler(
    post,
    path = "/estimate",
    request_body = EstimateRequest,
    responses(
        (status = OK, description = "Estimated remaining life", body = EstimateResponse),
        (status = BAD_REQUEST, description = "Inputs cannot be evaluated", body = ErrorBody),
    ),
    tag = ESTIMATOR_TAG,
)]
pub(crate) async fn estimate_handler(
    State(state): State<ApiState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let Json(request) = payload
        .map_err(|rejection| ApiError::bad_request("InvalidInputError", rejection.body_text()))?;
    let slice = state.try_get_slice::<Estimator>()?;

    let estimate = slice.estimator.estimate(&request.into())?;
    Ok(Json(estimate.into()))
}

/// Routes of the estimator slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(estimate_handler))
}
