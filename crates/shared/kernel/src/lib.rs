//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it owns configuration loading and, behind the
//! `server` feature, the shared Axum state, error mapping and system routes.
//!
//! ## Config loading
//! ```rust,no_run
//! use mlife_kernel::config::load_config;
//! use mlife_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("mlife.toml")).unwrap();
//! assert_eq!(cfg.dataset.seed, 42);
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use mlife_domain as domain;
