//! Facade crate for the mechanical life service.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `mlife` with the `server` feature for the HTTP surface.
//! - Call `mlife::init` (server) to build every feature slice from configuration.

pub use mlife_domain as domain;
pub use mlife_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    pub use mlife_comparison as comparison;
    pub use mlife_estimator as estimator;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "estimator",
        "comparison",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        use mlife_kernel::server::ApiState;
        pub use mlife_kernel::server::router::system_router;
        use utoipa_axum::router::OpenApiRouter;

        /// System routes plus the routes of every feature slice.
        pub fn api_router() -> OpenApiRouter<ApiState> {
            OpenApiRouter::new()
                .merge(system_router())
                .merge(mlife_estimator::api::router())
                .merge(mlife_comparison::api::router())
        }
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[cfg(feature = "server")]
pub fn init(
    config: &domain::config::ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Life estimation
    slices.push(features::estimator::init(config)?);

    // Parameter comparison
    slices.push(features::comparison::init(&config.dataset)?);

    Ok(slices)
}
