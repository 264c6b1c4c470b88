//! # Domain Models
//!
//! Pure data for the life-estimation service: the operating profile fed into
//! the estimator, the estimate it produces, the empirical model constants and
//! the configuration tree. No I/O and no computation beyond trivial helpers.

pub mod comparison;
pub mod config;
pub mod constants;
pub mod life;
pub mod model;
pub mod registry;
