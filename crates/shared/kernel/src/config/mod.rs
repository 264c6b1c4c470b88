use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "mlife";
/// Prefix of environment overrides (`MLIFE__SERVER__PORT=8080`).
pub const ENV_PREFIX: &str = "MLIFE";

/// Custom error type for config loading.
#[mlife_derive::mlife_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: the file at `path`, which must exist. Without a path the
///    optional `mlife.{toml,json,yaml}` in the working directory is used and
///    built-in defaults apply when it is absent.
/// 2. **Environment Overrides**: variables prefixed with `MLIFE__`. Nested
///    structures are addressed with double underscores (`MLIFE__LOGGING__LEVEL`
///    maps to `logging.level`).
///
/// # Errors
/// This function will return an error if:
/// * An explicitly given configuration file cannot be found or parsed.
/// * The merged values do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use mlife_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .convert_case(config::Case::Snake)
        .try_parsing(true)
}

fn load_layered<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(path) => {
            info!("Loading config from {}", path.as_ref().display());
            File::from(path.as_ref()).required(true)
        },
        None => {
            info!("Loading optional config '{DEFAULT_CONFIG_FILE}'");
            File::with_name(DEFAULT_CONFIG_FILE).required(false)
        },
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
