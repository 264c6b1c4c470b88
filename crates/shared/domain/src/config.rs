use crate::comparison::TechnicalParameter;
use crate::constants::DEFAULT_SERIES_SEED;
use crate::model::{LifeModel, OperatingLimits};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the server and the CLI.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub model: LifeModel,
    pub limits: OperatingLimits,
    pub logging: LoggingConfig,
    pub dataset: DatasetConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Subscriber settings applied by the binaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`trace`..`error`, `off`); `RUST_LOG` still wins when no filter is set.
    pub level: String,
    pub filter: Option<String>,
    pub json: bool,
    /// Directory for rolling log files; console only when absent.
    pub directory: Option<PathBuf>,
}

/// The fixed comparison dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub parameters: Vec<TechnicalParameter>,
    /// Seed of the simulated month-wise series.
    pub seed: u64,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4590, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, json: false, directory: None }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self { parameters: Vec::new(), seed: DEFAULT_SERIES_SEED }
    }
}
