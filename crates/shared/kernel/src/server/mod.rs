//! Shared Axum plumbing: application state, JSON error mapping and system routes.

pub mod error;
mod health;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorBody};
pub use health::HealthResponse;
pub use state::{ApiState, ApiStateBuilder, ApiStateError};
